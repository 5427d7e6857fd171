//! Test utilities for the identity store.
//!
//! Provides temporary SQLite databases and legacy dataset fixtures.
//! Import in tests only, never in production code.

pub mod fixture;
pub mod sqlite;
