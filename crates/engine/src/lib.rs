//! Chi War Engine library.
//!
//! Drives the rules engine end to end: loads combatant snapshots through
//! ports, resolves actions and stores the results with a fight log.
//!
//! ## Structure
//!
//! - `use_cases/` - Chase, attack, initiative and archetype orchestration
//! - `infrastructure/` - Ports and their adapters (in-memory storage, clock, dice)
//! - `cli` - Command line entry point
//! - `config` - Environment configuration
//! - `app` - Application composition

pub mod app;
pub mod cli;
pub mod config;
pub mod infrastructure;
pub mod use_cases;

/// Test fixtures module for JSON fixtures and seeded storage.
#[cfg(test)]
pub mod test_fixtures;

pub use app::App;
pub use config::EngineConfig;
