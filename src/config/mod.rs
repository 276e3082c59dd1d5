//! Configuration module for tactile-calc
//!
//! Concentrates the user-facing settings surface shared between the
//! CLI and the interactive session.

pub mod settings;

pub use settings::{ConfigError, Settings};
