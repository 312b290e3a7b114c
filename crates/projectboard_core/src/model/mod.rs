//! Domain model for submitted projects.
//!
//! # Responsibility
//! - Define the canonical project record shared by the store and list views.
//!
//! # Invariants
//! - Every project is identified by a stable `ProjectId`.
//! - Records are never removed once created.

pub mod project;
