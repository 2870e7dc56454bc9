//! Fixed demonstration data loaded into a seeded store.

use chrono::{DateTime, NaiveDate, Utc};

use crate::domain::{
    Location, Message, MessageId, MessageStatus, MessageType, RideType, Room, RoomId, RoomKind,
    RoomMetadata, RoomStatus, User, UserId,
};

/// Seed timestamp on 2024-01-20; the fixed arguments are always valid.
fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(2024, 1, 20)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

fn financial_district() -> Location {
    Location::new(37.7833, -122.4167, "Financial District")
}

fn john() -> User {
    User::new("1", "John Doe", "john@example.com").with_avatar("https://i.pravatar.cc/150?img=1")
}

fn jane() -> User {
    User::new("2", "Jane Smith", "jane@example.com").with_avatar("https://i.pravatar.cc/150?img=2")
}

fn mike() -> User {
    User::new("3", "Mike Johnson", "mike@example.com")
        .with_avatar("https://i.pravatar.cc/150?img=3")
}

pub fn users() -> Vec<User> {
    vec![john(), jane(), mike()]
}

pub fn rooms() -> Vec<Room> {
    vec![
        Room {
            id: RoomId::new("1"),
            kind: RoomKind::Group,
            name: "Let's go to the mall".to_string(),
            participants: vec![john(), jane()],
            created_at: at(10, 0),
            updated_at: at(10, 0),
            metadata: RoomMetadata {
                destination: Location::new(37.7749, -122.4194, "Downtown San Francisco"),
                pickup_point: financial_district(),
                status: RoomStatus::Active,
                ride_type: RideType::Auto,
                scheduled_time: at(11, 0),
            },
        },
        Room {
            id: RoomId::new("2"),
            kind: RoomKind::Group,
            name: "Airport Shuttle".to_string(),
            participants: vec![john(), mike()],
            created_at: at(9, 0),
            updated_at: at(9, 0),
            metadata: RoomMetadata {
                destination: Location::new(
                    37.6213,
                    -122.3790,
                    "San Francisco International Airport",
                ),
                pickup_point: financial_district(),
                status: RoomStatus::Active,
                ride_type: RideType::Cab,
                scheduled_time: at(14, 0),
            },
        },
    ]
}

pub fn messages() -> Vec<Message> {
    vec![
        Message {
            id: MessageId::new("1"),
            text: "Hey, I'm on my way!".to_string(),
            sender_id: UserId::new("2"),
            room_id: RoomId::new("1"),
            timestamp: at(10, 30),
            status: MessageStatus::Read,
            message_type: MessageType::Text,
        },
        Message {
            id: MessageId::new("2"),
            text: "Great, I'll be there in 5 minutes".to_string(),
            sender_id: UserId::new("1"),
            room_id: RoomId::new("1"),
            timestamp: at(10, 31),
            status: MessageStatus::Sent,
            message_type: MessageType::Text,
        },
    ]
}
