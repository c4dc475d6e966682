//! Umbrella crate for the Glide tweening engine.
//!
//! Re-exports the full public API of `glide-core` so hosts can depend on a
//! single `glide` crate.

pub use glide_core::*;
