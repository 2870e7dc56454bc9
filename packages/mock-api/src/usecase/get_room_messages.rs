//! UseCase: get room messages

use std::{sync::Arc, time::Duration};

use crate::{
    domain::{Message, MessageRepository, RoomId},
    infrastructure::LatencySimulator,
};

/// Use case for reading a room's messages
pub struct GetRoomMessagesUseCase {
    repository: Arc<dyn MessageRepository>,
    latency: Duration,
}

impl GetRoomMessagesUseCase {
    pub fn new(repository: Arc<dyn MessageRepository>, latency: Duration) -> Self {
        Self {
            repository,
            latency,
        }
    }

    /// Messages of `room_id` in insertion order; empty for unknown rooms.
    pub async fn execute(&self, room_id: &RoomId) -> Vec<Message> {
        LatencySimulator::new().delay(self.latency).await;

        let messages = self.repository.list_by_room(room_id).await;
        tracing::debug!(%room_id, count = messages.len(), "loaded room messages");
        messages
    }
}
