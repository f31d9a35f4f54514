//! todo_core - Core types for the todo client system
//!
//! This crate provides the foundational types shared by the client and web crates:
//! - `todo` - ToDo, the task record exchanged with the remote todo API
//! - `config` - remote API base address and authorization scope

pub mod config;
pub mod todo;

// Re-export commonly used types
pub use config::Config;
pub use todo::ToDo;
