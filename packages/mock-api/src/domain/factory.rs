//! Domain factories for creating identifiers.

use super::{MessageId, RoomId};

/// Factory for generating entity identifiers.
///
/// Ids are random UUID v4 strings, so rooms or messages created at the same
/// instant never collide.
pub struct IdFactory;

impl IdFactory {
    /// Generate a new RoomId
    pub fn room_id() -> RoomId {
        RoomId::new(uuid::Uuid::new_v4().to_string())
    }

    /// Generate a new MessageId
    pub fn message_id() -> MessageId {
        MessageId::new(uuid::Uuid::new_v4().to_string())
    }
}
