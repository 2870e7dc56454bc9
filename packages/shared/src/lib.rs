//! Shared utilities for Tagalong packages.

pub mod logger;
pub mod time;
