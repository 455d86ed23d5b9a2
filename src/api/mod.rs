// API layer module (adapters for controllers)

pub mod errors;
pub mod handlers;
