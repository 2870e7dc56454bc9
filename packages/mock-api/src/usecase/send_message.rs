//! UseCase: send message
//!
//! ## Test notes
//!
//! ### What is tested
//! - `SendMessageUseCase::execute()`
//! - id assignment, timestamping and the "sent" status
//!
//! ### Scenarios
//! - normal: an existing user posting to an existing room
//! - edge case: unknown room or sender ids (accepted, only a warning is logged)

use std::{sync::Arc, time::Duration};

use tagalong_shared::time::now_utc;

use crate::{
    domain::{
        IdFactory, Message, MessageRepository, MessageStatus, NewMessage, RoomRepository,
        UserRepository,
    },
    infrastructure::LatencySimulator,
};

/// Use case for posting a message
pub struct SendMessageUseCase {
    messages: Arc<dyn MessageRepository>,
    rooms: Arc<dyn RoomRepository>,
    users: Arc<dyn UserRepository>,
    latency: Duration,
}

impl SendMessageUseCase {
    pub fn new(
        messages: Arc<dyn MessageRepository>,
        rooms: Arc<dyn RoomRepository>,
        users: Arc<dyn UserRepository>,
        latency: Duration,
    ) -> Self {
        Self {
            messages,
            rooms,
            users,
            latency,
        }
    }

    /// Post a message.
    ///
    /// The message is always accepted. Room and sender are weak references;
    /// dangling ones are logged, not rejected.
    pub async fn execute(&self, new_message: NewMessage) -> Message {
        LatencySimulator::new().delay(self.latency).await;

        self.warn_on_dangling_references(&new_message).await;

        let message = Message {
            id: IdFactory::message_id(),
            text: new_message.text,
            sender_id: new_message.sender_id,
            room_id: new_message.room_id,
            timestamp: now_utc(),
            status: MessageStatus::Sent,
            message_type: new_message.message_type,
        };
        self.messages.insert(message.clone()).await;

        tracing::debug!(
            message_id = %message.id,
            room_id = %message.room_id,
            sender_id = %message.sender_id,
            "sent message"
        );
        message
    }

    async fn warn_on_dangling_references(&self, new_message: &NewMessage) {
        if self.rooms.find_by_id(&new_message.room_id).await.is_none() {
            tracing::warn!(
                room_id = %new_message.room_id,
                "message posted to a room that does not exist"
            );
        }
        if self.users.find_by_id(&new_message.sender_id).await.is_none() {
            tracing::warn!(
                sender_id = %new_message.sender_id,
                "message sent by an unknown user"
            );
        }
    }
}
