//! Infrastructure layer - External concerns
//! 
//! This layer contains:
//! - Config: Configuration loading
//! - Adapters: Terminal integrations (console)

pub mod config;
pub mod adapters;
