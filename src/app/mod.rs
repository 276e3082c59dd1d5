//! Application orchestration layer
//!
//! This module coordinates between input, domain, and display layers.
//! It owns the typing flag and the interactive session loop.

pub mod coordinator;
pub mod session;
