//! Domain layer for the ride and chat simulator.
//!
//! This module contains the entity model and business rules that are
//! independent of how rooms and messages are stored.

pub mod draft;
pub mod entity;
pub mod error;
pub mod factory;
pub mod repository;
pub mod schedule;
pub mod value_object;

pub use draft::{DEFAULT_ROOM_NAME, NewMessage, RoomDraft};
pub use entity::{
    Location, Message, MessageStatus, MessageType, RideType, Room, RoomKind, RoomMetadata,
    RoomStatus, User,
};
pub use error::ValueObjectError;
pub use factory::IdFactory;
pub use repository::{MessageRepository, RoomRepository, UserRepository};
pub use schedule::{DepartureSlot, RideRequest, departure_countdown, time_left_label};
pub use value_object::{MessageId, RoomId, UserId};
