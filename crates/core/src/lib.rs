//! Domain logic for the MovieVerse catalog.
//!
//! Pure logic only -- no database or HTTP dependencies -- so every rule can
//! be unit-tested in isolation and reused by the repository and API layers.

pub mod catalog;
pub mod error;
pub mod movie;
pub mod review;
pub mod stats;
pub mod types;
