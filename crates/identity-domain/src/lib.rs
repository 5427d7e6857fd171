//! Domain types for the identity store.
//!
//! This crate contains only pure types with no framework dependencies.
//! Legacy rows describe the flat source tables; the entity graph is what the
//! seeder materializes from them.

pub mod graph;
pub mod id;
pub mod legacy;
