//! Persistence core of the MavMart campus marketplace: accounts and listings
//! in a single embedded SQLite store, behind a small repository API.
//!
//! The host builds a [`infra::DbPool`] once at startup (via [`infra::init_db`])
//! and passes it into every operation in [`app`]; UI concerns stay outside
//! this crate.

pub mod app;
pub mod domain;
pub mod error;
pub mod infra;

use std::path::PathBuf;

/// Default on-disk location: `mavmart.db` under the platform data directory.
pub fn default_db_path() -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("com.mavmart.app").join("mavmart.db")
}
