//! Inputs accepted by the create-room and send-message operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{
    entity::{Room, RoomKind, RoomMetadata, User},
    value_object::{RoomId, UserId},
    MessageType,
};

/// Name given to rooms created without one
pub const DEFAULT_ROOM_NAME: &str = "New Room";

/// A partially specified room.
///
/// Every field is optional. The id and both timestamps are always assigned
/// by the store, so they are not part of the draft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoomDraft {
    pub kind: Option<RoomKind>,
    pub name: Option<String>,
    pub participants: Option<Vec<User>>,
    pub metadata: Option<RoomMetadata>,
}

impl RoomDraft {
    /// Draft with only a name set
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Complete the draft, filling every unset field with its default.
    ///
    /// An empty name counts as unset. Supplied metadata is taken as a whole.
    pub fn into_room(self, id: RoomId, now: DateTime<Utc>) -> Room {
        Room {
            id,
            kind: self.kind.unwrap_or_default(),
            name: self
                .name
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| DEFAULT_ROOM_NAME.to_string()),
            participants: self.participants.unwrap_or_default(),
            created_at: now,
            updated_at: now,
            metadata: self
                .metadata
                .unwrap_or_else(|| RoomMetadata::placeholder(now)),
        }
    }
}

/// A message as submitted by a sender, before the store stamps it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMessage {
    pub text: String,
    pub sender_id: UserId,
    pub room_id: RoomId,
    #[serde(rename = "type", default)]
    pub message_type: MessageType,
}

impl NewMessage {
    /// Plain text message
    pub fn text(
        text: impl Into<String>,
        sender_id: impl Into<UserId>,
        room_id: impl Into<RoomId>,
    ) -> Self {
        Self {
            text: text.into(),
            sender_id: sender_id.into(),
            room_id: room_id.into(),
            message_type: MessageType::Text,
        }
    }
}
