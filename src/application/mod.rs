//! Application layer - Use cases and business logic
//! 
//! This layer contains:
//! - Services: Address book, command execution, session loop
//! - Errors: Domain-specific errors
//! - Messaging: Command parsing and dispatching

pub mod errors;
pub mod services;
pub mod messaging;
