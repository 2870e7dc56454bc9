//! Plain-text rendering of rides, messages and users.

use chrono::{DateTime, Utc};
use tagalong_mock_api::domain::{Message, RideType, Room, User, time_left_label};
use tagalong_shared::time::format_clock;

pub fn ride_type_icon(ride_type: RideType) -> &'static str {
    match ride_type {
        RideType::Auto => "🛺",
        RideType::Cab => "🚕",
        RideType::Any => "🚗",
    }
}

/// "1 person" / "N people"
pub fn participant_count(count: usize) -> String {
    if count == 1 {
        "1 person".to_string()
    } else {
        format!("{count} people")
    }
}

/// One ride card line for the ride list
pub fn ride_card(room: &Room, now: DateTime<Utc>) -> String {
    let metadata = &room.metadata;
    let destination = if metadata.destination.address.is_empty() {
        room.name.as_str()
    } else {
        metadata.destination.address.as_str()
    };

    format!(
        "[{id}] {destination} (from {pickup}) | {left} | {status} | {people} | {icon} {ride}",
        id = room.id,
        pickup = metadata.pickup_point.address,
        left = time_left_label(metadata.scheduled_time, now),
        status = metadata.status,
        people = participant_count(room.participants.len()),
        icon = ride_type_icon(metadata.ride_type),
        ride = metadata.ride_type,
    )
}

/// A chat line. Own messages are labelled "You".
pub fn message_line(message: &Message, sender_name: Option<&str>, own: bool) -> String {
    let sender = if own {
        "You"
    } else {
        sender_name.unwrap_or(message.sender_id.as_str())
    };
    format!(
        "[{}] {}: {}",
        format_clock(&message.timestamp),
        sender,
        message.text
    )
}

pub fn user_card(user: &User) -> String {
    let mut card = format!("{} ({}) {} <{}>", user.initials(), user.id, user.name, user.email);
    if let Some(avatar) = &user.avatar {
        card.push_str(&format!(" {avatar}"));
    }
    card
}
