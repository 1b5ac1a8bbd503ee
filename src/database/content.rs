use async_trait::async_trait;
use sqlx::MySqlPool;

use super::manager::{self, DatabaseError};
use super::models::{CardRow, Level, MonsterRow, Stage};

/// Read-only lookups against the game content schema, by exact key.
///
/// Monster and card rows come back undecoded; the caller applies the
/// configured enum policy.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn find_stage(&self, stage_code: &str) -> Result<Option<Stage>, DatabaseError>;
    async fn find_monster(&self, monster_code: &str) -> Result<Option<MonsterRow>, DatabaseError>;
    async fn find_card(&self, card_code: &str) -> Result<Option<CardRow>, DatabaseError>;
    async fn find_level(&self, level_value: i32) -> Result<Option<Level>, DatabaseError>;
    async fn ping(&self) -> Result<(), DatabaseError>;
}

pub struct MySqlContentStore {
    pool: MySqlPool,
}

impl MySqlContentStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContentStore for MySqlContentStore {
    async fn find_stage(&self, stage_code: &str) -> Result<Option<Stage>, DatabaseError> {
        let mut conn = self.pool.acquire().await?;
        let stage = sqlx::query_as::<_, Stage>(
            "SELECT StageCode, StageName, MonsterCount, MonsterCode1, MonsterCode2, MonsterCode3, \
             PrerequisiteStage FROM `Stage` WHERE StageCode = ?",
        )
        .bind(stage_code)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(stage)
    }

    async fn find_monster(&self, monster_code: &str) -> Result<Option<MonsterRow>, DatabaseError> {
        let mut conn = self.pool.acquire().await?;
        let monster = sqlx::query_as::<_, MonsterRow>(
            "SELECT MonsterCode, MonsterName, Grade, HP, ATK, RewardEXP \
             FROM `Monster` WHERE MonsterCode = ?",
        )
        .bind(monster_code)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(monster)
    }

    async fn find_card(&self, card_code: &str) -> Result<Option<CardRow>, DatabaseError> {
        let mut conn = self.pool.acquire().await?;
        let card = sqlx::query_as::<_, CardRow>(
            "SELECT CardCode, CardName, CardType, Cost, EffectValue, Description \
             FROM `Card` WHERE CardCode = ?",
        )
        .bind(card_code)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(card)
    }

    async fn find_level(&self, level_value: i32) -> Result<Option<Level>, DatabaseError> {
        let mut conn = self.pool.acquire().await?;
        let level = sqlx::query_as::<_, Level>(
            "SELECT LevelValue, RequiredEXP, HP, ATK FROM `Level` WHERE LevelValue = ?",
        )
        .bind(level_value)
        .fetch_optional(&mut *conn)
        .await?;
        Ok(level)
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        manager::ping(&self.pool).await
    }
}
