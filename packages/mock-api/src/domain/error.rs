//! Domain layer error definitions.

use thiserror::Error;

/// Errors raised while parsing value objects from user input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// Unknown room status name
    #[error("unknown room status '{0}' (expected pending, active, completed or cancelled)")]
    UnknownRoomStatus(String),

    /// Unknown ride type name
    #[error("unknown ride type '{0}' (expected auto, cab or any)")]
    UnknownRideType(String),

    /// Unknown room kind name
    #[error("unknown room kind '{0}' (expected private or group)")]
    UnknownRoomKind(String),

    /// Unknown message status name
    #[error("unknown message status '{0}' (expected sent, delivered or read)")]
    UnknownMessageStatus(String),

    /// Unknown message type name
    #[error("unknown message type '{0}' (expected text, image or location)")]
    UnknownMessageType(String),

    /// Unknown departure slot
    #[error("unknown departure slot '{0}' (expected now, +5 or +10)")]
    UnknownDepartureSlot(String),
}
