//! Core domain models for rides and their chat rooms.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    error::ValueObjectError,
    value_object::{MessageId, RoomId, UserId},
};

/// Implements `as_str`, `Display` and `FromStr` over the lowercase variant names.
macro_rules! lowercase_enum {
    ($name:ident, $err:ident, { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl $name {
            /// Lowercase name, identical to the serialized form.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ValueObjectError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    other => Err(ValueObjectError::$err(other.to_string())),
                }
            }
        }
    };
}

/// A registered rider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    /// Display name
    pub name: String,
    pub email: String,
    /// Avatar image URI
    pub avatar: Option<String>,
}

impl User {
    /// Create a new user without an avatar
    pub fn new(id: impl Into<UserId>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            avatar: None,
        }
    }

    /// Attach an avatar URI
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Initials of each word in the display name, e.g. "JD" for "John Doe"
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect()
    }
}

/// A named geographic point (WGS84-style, unvalidated)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    /// Free-text address
    pub address: String,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64, address: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            address: address.into(),
        }
    }

    /// A point known only by its address; coordinates are left at zero
    pub fn unknown(address: impl Into<String>) -> Self {
        Self::new(0.0, 0.0, address)
    }
}

/// Ride lifecycle status.
///
/// Nothing in the simulator moves a room between states: rooms keep
/// whatever status they were created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomStatus {
    #[default]
    Pending,
    Active,
    Completed,
    Cancelled,
}

lowercase_enum!(RoomStatus, UnknownRoomStatus, {
    Pending => "pending",
    Active => "active",
    Completed => "completed",
    Cancelled => "cancelled",
});

/// Requested mode of transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RideType {
    #[default]
    Auto,
    Cab,
    Any,
}

lowercase_enum!(RideType, UnknownRideType, {
    Auto => "auto",
    Cab => "cab",
    Any => "any",
});

/// Whether a room is a one-to-one or a group conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomKind {
    Private,
    #[default]
    Group,
}

lowercase_enum!(RoomKind, UnknownRoomKind, {
    Private => "private",
    Group => "group",
});

/// Ride details attached to a room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomMetadata {
    pub destination: Location,
    pub pickup_point: Location,
    pub status: RoomStatus,
    pub ride_type: RideType,
    /// Scheduled departure
    pub scheduled_time: DateTime<Utc>,
}

impl RoomMetadata {
    /// Metadata used when a room is created without any: zero-valued
    /// locations, pending, auto, departing at `now`.
    pub fn placeholder(now: DateTime<Utc>) -> Self {
        Self {
            destination: Location::default(),
            pickup_point: Location::default(),
            status: RoomStatus::Pending,
            ride_type: RideType::Auto,
            scheduled_time: now,
        }
    }
}

/// A ride-coordination session grouping participants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub kind: RoomKind,
    pub name: String,
    /// Participants in join order (duplicates are not rejected)
    pub participants: Vec<User>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub metadata: RoomMetadata,
}

/// Delivery status of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageStatus {
    Sent,
    Delivered,
    Read,
}

lowercase_enum!(MessageStatus, UnknownMessageStatus, {
    Sent => "sent",
    Delivered => "delivered",
    Read => "read",
});

/// Content type of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    #[default]
    Text,
    Image,
    Location,
}

lowercase_enum!(MessageType, UnknownMessageType, {
    Text => "text",
    Image => "image",
    Location => "location",
});

/// A chat message posted to a room.
///
/// `sender_id` and `room_id` are weak references: nothing guarantees the
/// user or room exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub text: String,
    pub sender_id: UserId,
    pub room_id: RoomId,
    pub timestamp: DateTime<Utc>,
    pub status: MessageStatus,
    #[serde(rename = "type")]
    pub message_type: MessageType,
}
