// Repository contracts the request layer depends on

pub mod user_repository;

pub use user_repository::{DynUserRepository, UserRepository};
