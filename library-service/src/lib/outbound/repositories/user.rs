use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::ports::UserRepository;
use crate::user::errors::UserError;

/// In-memory user store backed by a lock-protected vector.
///
/// Linear-scan semantics; writes take the exclusive lock, so the
/// duplicate-email check and the insert happen atomically with respect to
/// concurrent registrations.
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
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
    async fn create(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.email == user.email) {
            return Err(UserError::EmailAlreadyExists);
        }

        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.id == *id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError> {
        let users = self.users.read().await;
        Ok(users.iter().find(|u| u.email.as_str() == email).cloned())
    }

    async fn list_all(&self) -> Result<Vec<User>, UserError> {
        let users = self.users.read().await;
        Ok(users.clone())
    }

    async fn update(&self, user: User) -> Result<User, UserError> {
        let mut users = self.users.write().await;

        let position = users
            .iter()
            .position(|u| u.id == user.id)
            .ok_or(UserError::NotFound(user.id.to_string()))?;

        users[position] = user.clone();
        Ok(user)
    }

    async fn delete(&self, id: &UserId) -> Result<(), UserError> {
        let mut users = self.users.write().await;

        let position = users
            .iter()
            .position(|u| u.id == *id)
            .ok_or(UserError::NotFound(id.to_string()))?;

        users.remove(position);
        Ok(())
    }
}
