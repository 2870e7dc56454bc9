//! In-memory repositories
//!
//! Each collection lives in an `Arc<Mutex<Vec<_>>>`. The `Vec` keeps
//! insertion order, and every access goes through the lock, so concurrent
//! tasks never interleave partial writes.

mod message;
mod room;
pub mod seed;
mod user;

pub use message::InMemoryMessageRepository;
pub use room::InMemoryRoomRepository;
pub use user::InMemoryUserRepository;
