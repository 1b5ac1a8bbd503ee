use async_trait::async_trait;
use sqlx::MySqlPool;

use super::manager::{self, DatabaseError};
use super::models::{NewUser, ProgressUpdate, UserRecord};

/// Read/write access to the `UserInfo` table of the account schema
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Row for a login name, hash included
    async fn find_by_id(&self, id: &str) -> Result<Option<UserRecord>, DatabaseError>;

    /// Insert a new user and return its uid.
    ///
    /// A taken `id` surfaces as [`DatabaseError::Duplicate`].
    async fn insert(&self, user: &NewUser) -> Result<i32, DatabaseError>;

    /// Overwrite all progression columns of the row with `update.uid`.
    ///
    /// Returns `false` when no such uid exists.
    async fn overwrite_progress(&self, update: &ProgressUpdate) -> Result<bool, DatabaseError>;

    async fn ping(&self) -> Result<(), DatabaseError>;
}

pub struct MySqlAccountStore {
    pool: MySqlPool,
}

impl MySqlAccountStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for MySqlAccountStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<UserRecord>, DatabaseError> {
        let mut conn = self.pool.acquire().await?;
        let user = sqlx::query_as::<_, UserRecord>(
            "SELECT UID, ID, PW, Name, Level, EXP, HP, ATK, ClearedStageCode \
             FROM `UserInfo` WHERE ID = ?",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(user)
    }

    async fn insert(&self, user: &NewUser) -> Result<i32, DatabaseError> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query("INSERT INTO `UserInfo` (ID, PW, Name) VALUES (?, ?, ?)")
            .bind(&user.id)
            .bind(&user.password_hash)
            .bind(&user.name)
            .execute(&mut *conn)
            .await
            .map_err(DatabaseError::from_write)?;

        let uid = result.last_insert_id();
        i32::try_from(uid).map_err(|_| DatabaseError::Decode {
            column: "UID",
            value: uid.to_string(),
        })
    }

    async fn overwrite_progress(&self, update: &ProgressUpdate) -> Result<bool, DatabaseError> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query(
            "UPDATE `UserInfo` SET Level = ?, HP = ?, ATK = ?, EXP = ?, ClearedStageCode = ? \
             WHERE UID = ?",
        )
        .bind(update.level)
        .bind(update.hp)
        .bind(update.atk)
        .bind(update.exp)
        .bind(update.cleared_stage_code.as_deref())
        .bind(update.uid)
        .execute(&mut *conn)
        .await?;

        // sqlx-mysql negotiates CLIENT_FOUND_ROWS, so this is the matched row count
        Ok(result.rows_affected() > 0)
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        manager::ping(&self.pool).await
    }
}
