//! SQLite connection, schema creation and versioned upgrade.

use rusqlite::Connection;
use std::path::Path;
use std::sync::Mutex;

use crate::error::AppError;
use crate::infra::schema;

/// The single shared store handle. Constructed once by the host at startup
/// and passed down into every repository operation; the mutex serializes
/// access to the one connection.
pub struct DbPool(pub Mutex<Connection>);

/// Initialize DB at path, apply schema / run upgrade, return managed pool.
pub fn init_db(db_path: &Path) -> Result<DbPool, AppError> {
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AppError::Db(e.to_string()))?;
    }
    let mut conn = Connection::open(db_path)?;
    configure(&conn)?;
    apply_schema(&mut conn)?;
    Ok(DbPool(Mutex::new(conn)))
}

/// In-memory store with the full schema, one per call. For tests.
pub fn init_test_db() -> DbPool {
    let mut conn = Connection::open_in_memory().expect("open in-memory db");
    configure(&conn).expect("configure db");
    apply_schema(&mut conn).expect("apply schema");
    DbPool(Mutex::new(conn))
}

/// Foreign keys are off by default in SQLite and must be enabled per
/// connection, before anything relies on the cascade.
fn configure(conn: &Connection) -> Result<(), AppError> {
    conn.execute_batch("PRAGMA foreign_keys = ON")?;
    Ok(())
}

/// Create tables on first use; on a version bump, drop and recreate.
///
/// DEMO policy carried over deliberately: no forward migrations, any store
/// older than `SCHEMA_VERSION` is wiped. Data loss on upgrade is accepted.
fn apply_schema(conn: &mut Connection) -> Result<(), AppError> {
    let version: i32 = conn.query_row("PRAGMA user_version", [], |r| r.get(0))?;
    if version == schema::SCHEMA_VERSION {
        return Ok(());
    }
    if version > schema::SCHEMA_VERSION {
        return Err(AppError::Db(format!(
            "store schema v{} is newer than supported v{}",
            version,
            schema::SCHEMA_VERSION
        )));
    }

    let tx = conn.transaction()?;
    if version > 0 {
        log::info!(
            "schema v{} is older than v{}, dropping and recreating",
            version,
            schema::SCHEMA_VERSION
        );
        // listings first: it holds the FK into users
        tx.execute_batch(&format!(
            "DROP TABLE IF EXISTS {}; DROP TABLE IF EXISTS {};",
            schema::LISTINGS_TABLE,
            schema::USERS_TABLE
        ))?;
    }
    tx.execute(schema::CREATE_USERS, [])?;
    tx.execute(schema::CREATE_USERS_EMAIL_INDEX, [])?;
    tx.execute(schema::CREATE_LISTINGS, [])?;
    tx.execute(schema::CREATE_LISTINGS_SELLER_INDEX, [])?;
    tx.execute_batch(&format!("PRAGMA user_version = {}", schema::SCHEMA_VERSION))?;
    tx.commit()?;
    Ok(())
}

/// Get connection from pool (for use in repository operations).
pub fn get_connection(pool: &DbPool) -> std::sync::MutexGuard<'_, Connection> {
    pool.0.lock().expect("db lock")
}
