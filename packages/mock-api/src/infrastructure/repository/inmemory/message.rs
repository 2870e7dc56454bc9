//! In-memory message repository

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Message, MessageRepository, RoomId};

/// Append-only in-memory message repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryMessageRepository {
    messages: Arc<Mutex<Vec<Message>>>,
}

impl InMemoryMessageRepository {
    /// Create with initial contents
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages: Arc::new(Mutex::new(messages)),
        }
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn insert(&self, message: Message) {
        let mut messages = self.messages.lock().await;
        messages.push(message);
    }

    async fn list_by_room(&self, room_id: &RoomId) -> Vec<Message> {
        let messages = self.messages.lock().await;
        messages
            .iter()
            .filter(|message| &message.room_id == room_id)
            .cloned()
            .collect()
    }
}
