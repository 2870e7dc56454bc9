//! The mock store: the in-memory system of record standing in for a backend.

use std::sync::Arc;

use crate::domain::{MessageRepository, RoomRepository, UserRepository};

use super::repository::{
    InMemoryMessageRepository, InMemoryRoomRepository, InMemoryUserRepository, inmemory::seed,
};

/// Rooms, messages and users held for as long as the store is alive.
///
/// Nothing is persisted. Clones share the same collections.
#[derive(Clone)]
pub struct MockStore {
    pub rooms: Arc<dyn RoomRepository>,
    pub messages: Arc<dyn MessageRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl MockStore {
    /// Store loaded with the demonstration rooms, messages and users
    pub fn seeded() -> Self {
        Self::from_parts(
            InMemoryRoomRepository::new(seed::rooms()),
            InMemoryMessageRepository::new(seed::messages()),
            InMemoryUserRepository::new(seed::users()),
        )
    }

    /// Store with no data at all
    pub fn empty() -> Self {
        Self::from_parts(
            InMemoryRoomRepository::default(),
            InMemoryMessageRepository::default(),
            InMemoryUserRepository::default(),
        )
    }

    /// Assemble a store from any repository implementations
    pub fn from_parts(
        rooms: impl RoomRepository + 'static,
        messages: impl MessageRepository + 'static,
        users: impl UserRepository + 'static,
    ) -> Self {
        Self {
            rooms: Arc::new(rooms),
            messages: Arc::new(messages),
            users: Arc::new(users),
        }
    }
}
