//! Domain traits - Abstractions for infrastructure implementations

pub mod terminal;

pub use terminal::Terminal;
