//! Account repository: registration, lookup, update, login check.

use rusqlite::params;
use serde::Deserialize;

use crate::domain::{Account, Role};
use crate::error::AppError;
use crate::infra::{get_connection, DbPool};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountCreateReq {
    pub first: String,
    pub last: String,
    /// Expected pre-normalized (see `domain::normalize_email`); the store's
    /// NOCASE uniqueness still holds either way.
    pub email: String,
    pub credential: String,
    pub role: Option<Role>,
}

const ACCOUNT_COLUMNS: &str = "id, first, last, email, credential, role";

fn account_from_row(row: &rusqlite::Row) -> rusqlite::Result<Account> {
    let role_str: String = row.get(5)?;
    let role = Role::parse(&role_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            5,
            rusqlite::types::Type::Text,
            format!("unknown role '{role_str}'").into(),
        )
    })?;
    Ok(Account {
        id: row.get(0)?,
        first: row.get(1)?,
        last: row.get(2)?,
        email: row.get(3)?,
        credential: row.get(4)?,
        role,
    })
}

fn map_unique_violation(e: rusqlite::Error, what: &str) -> AppError {
    match &e {
        rusqlite::Error::SqliteFailure(f, _)
            if f.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE =>
        {
            AppError::Conflict(what.to_string())
        }
        _ => AppError::Db(e.to_string()),
    }
}

pub fn account_create(pool: &DbPool, req: AccountCreateReq) -> Result<Account, AppError> {
    let first = req.first.trim();
    let last = req.last.trim();
    if first.is_empty() || last.is_empty() {
        return Err(AppError::Validation("first and last name are required".into()));
    }
    if req.email.trim().is_empty() {
        return Err(AppError::Validation("email is required".into()));
    }
    if req.credential.is_empty() {
        return Err(AppError::Validation("credential is required".into()));
    }
    let role = req.role.unwrap_or(Role::Standard);

    let conn = get_connection(pool);
    conn.execute(
        "INSERT INTO users (first, last, email, credential, role) VALUES (?1, ?2, ?3, ?4, ?5)",
        params![first, last, &req.email, &req.credential, role.as_str()],
    )
    .map_err(|e| map_unique_violation(e, "email already registered"))?;

    Ok(Account {
        id: conn.last_insert_rowid(),
        first: first.to_string(),
        last: last.to_string(),
        email: req.email,
        credential: req.credential,
        role,
    })
}

/// All accounts, first then last name, case-insensitive.
pub fn account_list(pool: &DbPool) -> Result<Vec<Account>, AppError> {
    let conn = get_connection(pool);
    let mut stmt = conn.prepare(&format!(
        "SELECT {ACCOUNT_COLUMNS} FROM users
         ORDER BY first COLLATE NOCASE ASC, last COLLATE NOCASE ASC"
    ))?;
    let rows = stmt.query_map([], account_from_row)?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn account_find_by_email(pool: &DbPool, email: &str) -> Result<Option<Account>, AppError> {
    let conn = get_connection(pool);
    let mut stmt = conn.prepare(&format!(
        "SELECT {ACCOUNT_COLUMNS} FROM users WHERE email = ?1"
    ))?;
    let mut rows = stmt.query_map([email], account_from_row)?;
    rows.next().transpose().map_err(AppError::from)
}

pub fn account_get(pool: &DbPool, id: i64) -> Result<Option<Account>, AppError> {
    let conn = get_connection(pool);
    let mut stmt = conn.prepare(&format!(
        "SELECT {ACCOUNT_COLUMNS} FROM users WHERE id = ?1"
    ))?;
    let mut rows = stmt.query_map([id], account_from_row)?;
    rows.next().transpose().map_err(AppError::from)
}

/// Full-record overwrite of the row matching `account.id`.
/// Returns rows affected: 1 on success, 0 if the id does not exist.
pub fn account_update(pool: &DbPool, account: &Account) -> Result<usize, AppError> {
    if account.first.trim().is_empty() || account.last.trim().is_empty() {
        return Err(AppError::Validation("first and last name are required".into()));
    }
    if account.email.trim().is_empty() {
        return Err(AppError::Validation("email is required".into()));
    }
    let conn = get_connection(pool);
    conn.execute(
        "UPDATE users SET first = ?1, last = ?2, email = ?3, credential = ?4, role = ?5
         WHERE id = ?6",
        params![
            account.first.trim(),
            account.last.trim(),
            &account.email,
            &account.credential,
            account.role.as_str(),
            account.id
        ],
    )
    .map_err(|e| map_unique_violation(e, "email already registered"))
}

/// Removes the account; the FK cascade deletes the seller's listings with it.
/// Returns rows affected (0 or 1).
pub fn account_delete(pool: &DbPool, id: i64) -> Result<usize, AppError> {
    let conn = get_connection(pool);
    conn.execute("DELETE FROM users WHERE id = ?1", [id])
        .map_err(AppError::from)
}

/// Read-only credential check. `None` on unknown email, credential mismatch,
/// or (when given) role mismatch. Exact string compare — the store keeps
/// credentials in plain text by design.
pub fn validate_login(
    pool: &DbPool,
    email: &str,
    credential: &str,
    expected_role: Option<Role>,
) -> Result<Option<Account>, AppError> {
    let Some(account) = account_find_by_email(pool, email)? else {
        return Ok(None);
    };
    if account.credential != credential {
        return Ok(None);
    }
    if let Some(role) = expected_role {
        if account.role != role {
            return Ok(None);
        }
    }
    Ok(Some(account))
}
