//! Data models for parsed business cards and configuration.

pub mod card;
pub mod config;

pub use card::*;
pub use config::*;
