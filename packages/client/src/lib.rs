//! Terminal companion for Tagalong.
//!
//! Plays the part of the mobile screens: browse rides, tag a new ride, wait
//! for matching and chat in a ride's room, all against the in-process mock
//! API.

pub mod command;
pub mod config;
pub mod error;
pub mod render;
pub mod runner;
pub mod session;

pub use runner::run_client;
