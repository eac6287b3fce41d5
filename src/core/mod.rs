//! Core types: configuration, errors, and the session RNG.
//!
//! These are the building blocks the rest of the crate shares. Hosts
//! mostly touch `GameConfig` and the error enums.

pub mod config;
pub mod error;
pub mod rng;

pub use config::GameConfig;
pub use error::{BindError, ConfigError, LoadError, SetupError};
pub use rng::GameRng;
