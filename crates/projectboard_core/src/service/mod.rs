//! Core use-case services.
//!
//! # Responsibility
//! - Turn raw front-end input into store mutations.
//! - Keep front-ends decoupled from validation rules and store internals.

pub mod project_input;
