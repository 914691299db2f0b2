//! Account database operations

use shared::models::{Account, AccountCreate, ROLE_ADMIN};
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};

pub async fn find_by_username(pool: &SqlitePool, username: &str) -> RepoResult<Option<Account>> {
    let row: Option<Account> = sqlx::query_as(
        "SELECT id, username, hash_pass, role FROM account WHERE username = ? LIMIT 1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

pub async fn create(pool: &SqlitePool, data: AccountCreate) -> RepoResult<Account> {
    let id = sqlx::query("INSERT INTO account (username, hash_pass, role) VALUES (?, ?, ?)")
        .bind(&data.username)
        .bind(&data.hash_pass)
        .bind(&data.role)
        .execute(pool)
        .await
        .map_err(|e| match RepoError::from(e) {
            RepoError::Duplicate(_) => {
                RepoError::Duplicate(format!("Username '{}' already exists", data.username))
            }
            other => other,
        })?
        .last_insert_rowid();

    Ok(Account {
        id,
        username: data.username,
        hash_pass: data.hash_pass,
        role: data.role,
    })
}

/// Create the bootstrap admin unless an account with that name exists.
///
/// Returns `true` when a new account was inserted. An existing account is
/// left untouched, including its password and role. `hash_pass` only runs
/// when an insert is needed.
pub async fn ensure_admin<E>(
    pool: &SqlitePool,
    username: &str,
    hash_pass: impl FnOnce() -> Result<String, E>,
) -> Result<bool, E>
where
    E: From<RepoError>,
{
    if find_by_username(pool, username).await?.is_some() {
        return Ok(false);
    }

    create(
        pool,
        AccountCreate {
            username: username.to_string(),
            hash_pass: hash_pass()?,
            role: ROLE_ADMIN.to_string(),
        },
    )
    .await?;
    Ok(true)
}
