//! Ride scheduling: turning a ride request into a room draft, and the
//! time-left labels shown on ride cards and in the chat header.

use std::{fmt, str::FromStr};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{
    draft::RoomDraft,
    entity::{Location, RideType, RoomKind, RoomMetadata, RoomStatus},
    error::ValueObjectError,
};

/// When the rider wants to leave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DepartureSlot {
    #[default]
    #[serde(rename = "now")]
    Now,
    #[serde(rename = "+5")]
    InFiveMinutes,
    #[serde(rename = "+10")]
    InTenMinutes,
}

impl DepartureSlot {
    /// Minutes after `now` this slot departs
    pub fn offset_minutes(&self) -> i64 {
        match self {
            Self::Now => 0,
            Self::InFiveMinutes => 5,
            Self::InTenMinutes => 10,
        }
    }

    /// Scheduled departure instant for a request made at `now`
    pub fn resolve(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        now + Duration::minutes(self.offset_minutes())
    }
}

impl fmt::Display for DepartureSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Now => f.write_str("now"),
            Self::InFiveMinutes => f.write_str("+5"),
            Self::InTenMinutes => f.write_str("+10"),
        }
    }
}

impl FromStr for DepartureSlot {
    type Err = ValueObjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "now" => Ok(Self::Now),
            "+5" => Ok(Self::InFiveMinutes),
            "+10" => Ok(Self::InTenMinutes),
            other => Err(ValueObjectError::UnknownDepartureSlot(other.to_string())),
        }
    }
}

/// A rider's request to share a ride
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RideRequest {
    /// Pickup address
    pub pickup: String,
    /// Destination address
    pub destination: String,
    pub ride_type: RideType,
    pub departure: DepartureSlot,
}

impl RideRequest {
    /// Build the room draft for this request.
    ///
    /// Addresses are not geocoded, so both locations carry zero coordinates.
    /// Participants start empty; matching would populate them.
    pub fn into_draft(self, now: DateTime<Utc>) -> RoomDraft {
        RoomDraft {
            kind: Some(RoomKind::Group),
            name: Some(format!("Ride to {}", self.destination)),
            participants: Some(Vec::new()),
            metadata: Some(RoomMetadata {
                destination: Location::unknown(self.destination),
                pickup_point: Location::unknown(self.pickup),
                status: RoomStatus::Pending,
                ride_type: self.ride_type,
                scheduled_time: self.departure.resolve(now),
            }),
        }
    }
}

/// Ride card badge: minutes (floored) until departure
pub fn time_left_label(scheduled: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff_ms = (scheduled - now).num_milliseconds();
    let minutes = diff_ms.div_euclid(60_000);

    if minutes < 0 {
        return "Expired".to_string();
    }
    if minutes < 60 {
        return format!("{minutes}m left");
    }
    format!("{}h {}m left", minutes / 60, minutes % 60)
}

/// Chat header countdown in `m:ss`
pub fn departure_countdown(departure: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(departure) = departure else {
        return "No departure time set".to_string();
    };

    let diff_ms = (departure - now).num_milliseconds();
    if diff_ms <= 0 {
        return "Departure time reached".to_string();
    }

    let minutes = diff_ms / 60_000;
    let seconds = (diff_ms % 60_000) / 1000;
    format!("{minutes}:{seconds:02}")
}
