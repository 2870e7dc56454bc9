//! Repository implementations
//!
//! Concrete backends for the repository traits declared in the domain layer.
//! Use cases depend on the traits only, never on these types.

pub mod inmemory;

pub use inmemory::{InMemoryMessageRepository, InMemoryRoomRepository, InMemoryUserRepository};
