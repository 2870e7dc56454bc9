//! UseCase: list rooms

use std::{sync::Arc, time::Duration};

use crate::{
    domain::{Room, RoomRepository},
    infrastructure::LatencySimulator,
};

/// Use case for listing rooms
pub struct ListRoomsUseCase {
    repository: Arc<dyn RoomRepository>,
    latency: Duration,
}

impl ListRoomsUseCase {
    pub fn new(repository: Arc<dyn RoomRepository>, latency: Duration) -> Self {
        Self {
            repository,
            latency,
        }
    }

    /// Snapshot of every room in store order. No filtering or paging.
    pub async fn execute(&self) -> Vec<Room> {
        LatencySimulator::new().delay(self.latency).await;

        let rooms = self.repository.list().await;
        tracing::debug!(count = rooms.len(), "listed rooms");
        rooms
    }
}
