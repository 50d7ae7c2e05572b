//! Test helpers shared across crates.
//!
//! This crate provides temporary template trees, a working-directory guard
//! and a `figment::Jail` wrapper that speaks `anyhow`.

pub mod cwd;
pub mod figment;
pub mod templates;
