//! UseCase layer
//!
//! One use case per mock API operation. Each waits out its simulated
//! latency first and only then reads or writes the store.

pub mod create_room;
pub mod get_room_messages;
pub mod get_user;
pub mod list_rooms;
pub mod send_message;

pub use create_room::CreateRoomUseCase;
pub use get_room_messages::GetRoomMessagesUseCase;
pub use get_user::GetUserUseCase;
pub use list_rooms::ListRoomsUseCase;
pub use send_message::SendMessageUseCase;
