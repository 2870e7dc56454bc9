//! In-memory user repository

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{User, UserId, UserRepository};

/// In-memory user repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<Mutex<Vec<User>>>,
}

impl InMemoryUserRepository {
    /// Create with initial contents
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, user_id: &UserId) -> Option<User> {
        let users = self.users.lock().await;
        users.iter().find(|user| &user.id == user_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_by_id() {
        // テスト項目: 登録済みユーザーは取得でき、未登録なら None
        // given (前提条件):
        let repo = InMemoryUserRepository::new(vec![User::new(
            "1",
            "John Doe",
            "john@example.com",
        )]);

        // then (期待する結果):
        let found = repo.find_by_id(&UserId::new("1")).await;
        assert_eq!(found.map(|u| u.name), Some("John Doe".to_string()));
        assert!(repo.find_by_id(&UserId::new("99")).await.is_none());
    }
}
