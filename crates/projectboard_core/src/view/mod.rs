//! Filtered list projections over the project store.
//!
//! # Responsibility
//! - Keep one derived, read-only list per status category.
//! - Hand every recomputed list to the renderer.
//!
//! # Invariants
//! - Projections never write back to the store.
//! - Across all categories, the projections partition the latest snapshot.

pub mod project_list;
