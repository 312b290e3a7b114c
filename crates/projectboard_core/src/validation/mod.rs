//! Input constraint checks.
//!
//! # Responsibility
//! - Decide whether one labeled form value satisfies its constraint set.
//!
//! # Invariants
//! - Validation is pure and never fails; it only answers true/false.

pub mod rules;
