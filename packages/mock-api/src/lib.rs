//! In-memory room and messaging simulator for the Tagalong ride-sharing app.
//!
//! Stands in for a real backend: rooms, messages and users live in a
//! [`MockStore`] and every operation of [`MockApi`] completes after a
//! simulated network delay.

pub mod api;
pub mod domain;
pub mod infrastructure;
pub mod usecase;

pub use api::MockApi;
pub use infrastructure::{LatencyProfile, LatencySimulator, MockStore};
