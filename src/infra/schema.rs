//! Schema registry: the on-disk contract, nothing else.
//!
//! Enum columns store the symbolic names from `crate::domain`; those strings
//! and everything below are stable — any change bumps `SCHEMA_VERSION` and
//! triggers the destructive upgrade in `db.rs`.

/// Tracked via `PRAGMA user_version`. Anything older is dropped and recreated.
pub const SCHEMA_VERSION: i32 = 6;

pub const USERS_TABLE: &str = "users";
pub const LISTINGS_TABLE: &str = "listings";

/// `COLLATE NOCASE` on email makes uniqueness case-insensitive in the store
/// itself, independent of caller normalization.
pub const CREATE_USERS: &str = "CREATE TABLE users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first TEXT NOT NULL,
    last TEXT NOT NULL,
    email TEXT NOT NULL COLLATE NOCASE UNIQUE,
    credential TEXT NOT NULL,
    role TEXT NOT NULL
)";

pub const CREATE_USERS_EMAIL_INDEX: &str =
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_users_email ON users(email)";

pub const CREATE_LISTINGS: &str = "CREATE TABLE listings (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    seller_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
    title TEXT NOT NULL,
    description TEXT,
    category TEXT NOT NULL,
    price_cents INTEGER NOT NULL,
    condition TEXT NOT NULL,
    photos_json TEXT NOT NULL,
    status TEXT NOT NULL,
    created_at INTEGER NOT NULL
)";

pub const CREATE_LISTINGS_SELLER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_listings_seller ON listings(seller_id)";
