//! Command-line configuration.

use std::time::Duration;

use clap::Parser;
use tagalong_mock_api::{LatencyProfile, domain::UserId};

use crate::error::ConfigError;

/// Terminal companion for the Tagalong mock ride and chat API
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Multiplier applied to every simulated network delay (0 disables them)
    #[arg(long, default_value_t = 1.0)]
    pub latency_scale: f64,

    /// Id of the user the session acts as
    #[arg(long, default_value = "1")]
    pub user: String,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// How long the matching screen waits before returning to the ride list
    #[arg(long, default_value_t = 3000)]
    pub matching_wait_ms: u64,
}

/// Validated client settings
#[derive(Debug, Clone, PartialEq)]
pub struct ClientConfig {
    pub latency: LatencyProfile,
    pub current_user: UserId,
    pub matching_wait: Duration,
}

impl TryFrom<&Args> for ClientConfig {
    type Error = ConfigError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let latency = LatencyProfile::scaled(args.latency_scale)
            .ok_or(ConfigError::InvalidLatencyScale(args.latency_scale))?;
        let user = args.user.trim();
        if user.is_empty() {
            return Err(ConfigError::EmptyUserId);
        }

        Ok(Self {
            latency,
            current_user: UserId::new(user),
            matching_wait: Duration::from_millis(args.matching_wait_ms),
        })
    }
}
