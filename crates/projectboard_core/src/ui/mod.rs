//! Rendering collaborator contracts.
//!
//! The core never draws anything itself. Front-ends implement these traits
//! and the core calls into them synchronously, fire-and-forget.

pub mod surface;
