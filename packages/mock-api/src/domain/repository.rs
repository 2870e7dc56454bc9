//! Repository traits.
//!
//! The domain layer defines these; the infrastructure layer implements them
//! and the usecase layer depends only on the traits.

use async_trait::async_trait;

use super::{Message, Room, RoomId, User, UserId};

/// Store of rooms, kept in insertion order
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Snapshot of every room
    async fn list(&self) -> Vec<Room>;

    /// Append a room
    async fn insert(&self, room: Room);

    /// Look up a room by id
    async fn find_by_id(&self, room_id: &RoomId) -> Option<Room>;
}

/// Append-only store of chat messages
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Append a message
    async fn insert(&self, message: Message);

    /// Messages whose room id matches, in insertion order
    async fn list_by_room(&self, room_id: &RoomId) -> Vec<Message>;
}

/// Read-only store of users
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, user_id: &UserId) -> Option<User>;
}
