//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: Core business objects (Record, Phone, Command)
//! - Traits: Abstractions for infrastructure (Terminal)

pub mod entities;
pub mod traits;
