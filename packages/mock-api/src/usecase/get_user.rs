//! UseCase: get user

use std::{sync::Arc, time::Duration};

use crate::{
    domain::{User, UserId, UserRepository},
    infrastructure::LatencySimulator,
};

/// Use case for looking up a user
pub struct GetUserUseCase {
    repository: Arc<dyn UserRepository>,
    latency: Duration,
}

impl GetUserUseCase {
    pub fn new(repository: Arc<dyn UserRepository>, latency: Duration) -> Self {
        Self {
            repository,
            latency,
        }
    }

    /// `None` when no user has this id.
    pub async fn execute(&self, user_id: &UserId) -> Option<User> {
        LatencySimulator::new().delay(self.latency).await;

        let user = self.repository.find_by_id(user_id).await;
        if user.is_none() {
            tracing::debug!(%user_id, "user not found");
        }
        user
    }
}
