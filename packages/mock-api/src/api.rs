//! The mock API: the asynchronous operation set screens call into.

use std::sync::Arc;

use crate::{
    domain::{Message, NewMessage, Room, RoomDraft, RoomId, User, UserId},
    infrastructure::{LatencyProfile, MockStore},
    usecase::{
        CreateRoomUseCase, GetRoomMessagesUseCase, GetUserUseCase, ListRoomsUseCase,
        SendMessageUseCase,
    },
};

struct UseCases {
    list_rooms: ListRoomsUseCase,
    create_room: CreateRoomUseCase,
    send_message: SendMessageUseCase,
    get_room_messages: GetRoomMessagesUseCase,
    get_user: GetUserUseCase,
}

/// Room and messaging operations over a [`MockStore`].
///
/// Every call suspends for its simulated latency and never fails. Clones
/// share the same store, so the handle can be passed to any number of
/// tasks.
#[derive(Clone)]
pub struct MockApi {
    usecases: Arc<UseCases>,
}

impl MockApi {
    pub fn new(store: MockStore, latency: LatencyProfile) -> Self {
        let usecases = UseCases {
            list_rooms: ListRoomsUseCase::new(store.rooms.clone(), latency.list_rooms),
            create_room: CreateRoomUseCase::new(store.rooms.clone(), latency.create_room),
            send_message: SendMessageUseCase::new(
                store.messages.clone(),
                store.rooms.clone(),
                store.users.clone(),
                latency.send_message,
            ),
            get_room_messages: GetRoomMessagesUseCase::new(
                store.messages.clone(),
                latency.get_room_messages,
            ),
            get_user: GetUserUseCase::new(store.users, latency.get_user),
        };
        Self {
            usecases: Arc::new(usecases),
        }
    }

    /// Seeded store with nominal latencies
    pub fn seeded() -> Self {
        Self::new(MockStore::seeded(), LatencyProfile::default())
    }

    pub async fn list_rooms(&self) -> Vec<Room> {
        self.usecases.list_rooms.execute().await
    }

    pub async fn create_room(&self, draft: RoomDraft) -> Room {
        self.usecases.create_room.execute(draft).await
    }

    pub async fn send_message(&self, message: NewMessage) -> Message {
        self.usecases.send_message.execute(message).await
    }

    pub async fn get_room_messages(&self, room_id: &RoomId) -> Vec<Message> {
        self.usecases.get_room_messages.execute(room_id).await
    }

    pub async fn get_user(&self, user_id: &UserId) -> Option<User> {
        self.usecases.get_user.execute(user_id).await
    }
}
