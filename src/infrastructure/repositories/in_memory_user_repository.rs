use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::repositories::UserRepository;
use crate::domain::user::User;

/// In-memory implementation of UserRepository
///
/// Backs the process by default and the integration tests. Creation is
/// declined when the name is blank or the id is already taken. Listing
/// returns users ordered by full name, ties broken by id.
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    /// Creates an empty InMemoryUserRepository
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: User) -> bool {
        if user.full_name.trim().is_empty() {
            tracing::debug!("declining user {}: blank name", user.id);
            return false;
        }

        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            tracing::debug!("declining user {}: id already taken", user.id);
            return false;
        }

        users.insert(user.id, user);
        true
    }

    async fn find_by_id(&self, id: Uuid) -> Option<User> {
        self.users.read().await.get(&id).cloned()
    }

    async fn find_all(&self) -> Vec<User> {
        let mut users: Vec<User> = self.users.read().await.values().cloned().collect();
        users.sort_by(|a, b| {
            a.full_name
                .cmp(&b.full_name)
                .then_with(|| a.id.cmp(&b.id))
        });
        users
    }

    async fn delete(&self, id: Uuid) -> bool {
        self.users.write().await.remove(&id).is_some()
    }
}
