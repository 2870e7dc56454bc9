//! Simulated network latency.
//!
//! Every operation of the mock API waits on a tokio timer before touching
//! the store, so callers observe the same suspension points a networked
//! backend would impose. The wait never blocks a thread and never fails.

use std::time::Duration;

/// Per-operation simulated round-trip times
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub list_rooms: Duration,
    pub create_room: Duration,
    pub send_message: Duration,
    pub get_room_messages: Duration,
    pub get_user: Duration,
}

impl LatencyProfile {
    /// Nominal delays of the mock backend
    pub const NOMINAL: Self = Self {
        list_rooms: Duration::from_millis(1000),
        create_room: Duration::from_millis(1500),
        send_message: Duration::from_millis(800),
        get_room_messages: Duration::from_millis(1000),
        get_user: Duration::from_millis(500),
    };

    /// No delay at all
    pub const fn instant() -> Self {
        Self {
            list_rooms: Duration::ZERO,
            create_room: Duration::ZERO,
            send_message: Duration::ZERO,
            get_room_messages: Duration::ZERO,
            get_user: Duration::ZERO,
        }
    }

    /// Nominal profile with every delay multiplied by `factor`.
    ///
    /// Returns `None` when a scaled delay is negative, NaN or too large for
    /// a `Duration`.
    pub fn scaled(factor: f64) -> Option<Self> {
        let scale = |nominal: Duration| {
            Duration::try_from_secs_f64(nominal.as_secs_f64() * factor).ok()
        };
        let nominal = Self::NOMINAL;
        Some(Self {
            list_rooms: scale(nominal.list_rooms)?,
            create_room: scale(nominal.create_room)?,
            send_message: scale(nominal.send_message)?,
            get_room_messages: scale(nominal.get_room_messages)?,
            get_user: scale(nominal.get_user)?,
        })
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::NOMINAL
    }
}

/// Deferred-completion primitive standing in for a network round trip
#[derive(Debug, Clone, Copy, Default)]
pub struct LatencySimulator;

impl LatencySimulator {
    pub fn new() -> Self {
        Self
    }

    /// Resolve after `duration` has elapsed.
    ///
    /// Other tasks keep running while this is pending.
    pub async fn delay(&self, duration: Duration) {
        if duration.is_zero() {
            return;
        }
        tokio::time::sleep(duration).await;
    }
}
