//! Infrastructure: SQLite connection, schema, upgrade policy.

pub mod db;
pub mod schema;

pub(crate) use db::get_connection;
pub use db::{init_db, init_test_db, DbPool};
