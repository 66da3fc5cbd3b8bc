//! CLI command implementations
//!
//! Each command module handles argument parsing and execution for a specific CLI command.

pub mod completions;
pub mod config;
pub mod indices;
pub mod related;
pub mod related_to;

// Re-export argument types for use in mod.rs
pub use completions::CompletionsArgs;
pub use config::ConfigArgs;
pub use related::RelatedArgs;
pub use related_to::RelatedToArgs;
