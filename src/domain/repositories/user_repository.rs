use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::user::User;

/// Repository trait for the User entity
///
/// Defines the contract the request layer depends on for persisting and
/// retrieving users. Implementations should handle storage-specific details.
/// Each operation carries its outcome in the return value: absence is `None`
/// and a declined write is `false`, never an error.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Store a new user. Returns `true` iff the user was durably accepted;
    /// `false` signals a domain-level rejection such as a uniqueness conflict.
    async fn create(&self, user: User) -> bool;

    /// Find a user by ID. Returns `None` when no such user exists.
    async fn find_by_id(&self, id: Uuid) -> Option<User>;

    /// Find all users, in the order the implementation chooses.
    async fn find_all(&self) -> Vec<User>;

    /// Delete a user by ID. Returns `true` iff a user with that id existed
    /// and was removed.
    async fn delete(&self, id: Uuid) -> bool;
}

/// Shared handle to the repository chosen at process wiring time.
pub type DynUserRepository = Arc<dyn UserRepository>;
