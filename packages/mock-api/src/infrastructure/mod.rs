//! Infrastructure layer: latency simulation and the in-memory mock store.

pub mod latency;
pub mod repository;
pub mod store;

pub use latency::{LatencyProfile, LatencySimulator};
pub use store::MockStore;
