//! Canonical project state and change broadcast.
//!
//! # Responsibility
//! - Own the single ordered collection of submitted projects.
//! - Notify subscribed listeners after every mutation.
//!
//! # Invariants
//! - Exactly one logical store exists per application; it is passed to
//!   collaborators explicitly instead of being reachable globally.

pub mod project_state;
