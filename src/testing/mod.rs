//! In-memory stores and config for exercising the router without MySQL.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use crate::config::{AppConfig, ConfigError};
use crate::database::models::{
    CardRow, Level, MonsterRow, NewUser, ProgressUpdate, Stage, UserRecord,
};
use crate::database::{AccountStore, ContentStore, DatabaseError};
use crate::state::AppState;

// `UserInfo` column defaults applied on insert
pub const DEFAULT_LEVEL: i32 = 1;
pub const DEFAULT_EXP: i32 = 0;
pub const DEFAULT_HP: i32 = 100;
pub const DEFAULT_ATK: i32 = 10;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Default)]
struct Accounts {
    next_uid: i32,
    by_id: HashMap<String, UserRecord>,
}

/// `UserInfo` table held in a map keyed by login name
#[derive(Default)]
pub struct MemoryAccountStore {
    inner: Mutex<Accounts>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored row for a login name, as the table would hold it
    pub fn get(&self, id: &str) -> Option<UserRecord> {
        lock(&self.inner).by_id.get(id).cloned()
    }

    pub fn len(&self) -> usize {
        lock(&self.inner).by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn find_by_id(&self, id: &str) -> Result<Option<UserRecord>, DatabaseError> {
        Ok(self.get(id))
    }

    async fn insert(&self, user: &NewUser) -> Result<i32, DatabaseError> {
        let mut accounts = lock(&self.inner);
        if accounts.by_id.contains_key(&user.id) {
            return Err(DatabaseError::Duplicate(format!(
                "Duplicate entry '{}' for key 'ID'",
                user.id
            )));
        }

        accounts.next_uid += 1;
        let uid = accounts.next_uid;
        accounts.by_id.insert(
            user.id.clone(),
            UserRecord {
                uid,
                id: user.id.clone(),
                password_hash: user.password_hash.clone(),
                name: user.name.clone(),
                level: DEFAULT_LEVEL,
                exp: DEFAULT_EXP,
                hp: DEFAULT_HP,
                atk: DEFAULT_ATK,
                cleared_stage_code: None,
            },
        );
        Ok(uid)
    }

    async fn overwrite_progress(&self, update: &ProgressUpdate) -> Result<bool, DatabaseError> {
        let mut accounts = lock(&self.inner);
        let Some(record) = accounts.by_id.values_mut().find(|r| r.uid == update.uid) else {
            return Ok(false);
        };

        record.level = update.level;
        record.hp = update.hp;
        record.atk = update.atk;
        record.exp = update.exp;
        record.cleared_stage_code = update.cleared_stage_code.clone();
        Ok(true)
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}

/// Game content tables, seeded with the builder methods
#[derive(Default)]
pub struct MemoryContentStore {
    stages: HashMap<String, Stage>,
    monsters: HashMap<String, MonsterRow>,
    cards: HashMap<String, CardRow>,
    levels: HashMap<i32, Level>,
}

impl MemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stage(mut self, stage: Stage) -> Self {
        self.stages.insert(stage.stage_code.clone(), stage);
        self
    }

    pub fn with_monster(mut self, monster: MonsterRow) -> Self {
        self.monsters.insert(monster.monster_code.clone(), monster);
        self
    }

    pub fn with_card(mut self, card: CardRow) -> Self {
        self.cards.insert(card.card_code.clone(), card);
        self
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.levels.insert(level.level_value, level);
        self
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn find_stage(&self, stage_code: &str) -> Result<Option<Stage>, DatabaseError> {
        Ok(self.stages.get(stage_code).cloned())
    }

    async fn find_monster(&self, monster_code: &str) -> Result<Option<MonsterRow>, DatabaseError> {
        Ok(self.monsters.get(monster_code).cloned())
    }

    async fn find_card(&self, card_code: &str) -> Result<Option<CardRow>, DatabaseError> {
        Ok(self.cards.get(card_code).cloned())
    }

    async fn find_level(&self, level_value: i32) -> Result<Option<Level>, DatabaseError> {
        Ok(self.levels.get(&level_value).cloned())
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}

/// Both store traits, every call failing as an unreachable database would
#[derive(Default)]
pub struct UnavailableStore;

fn unavailable() -> DatabaseError {
    DatabaseError::Sqlx(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl AccountStore for UnavailableStore {
    async fn find_by_id(&self, _id: &str) -> Result<Option<UserRecord>, DatabaseError> {
        Err(unavailable())
    }

    async fn insert(&self, _user: &NewUser) -> Result<i32, DatabaseError> {
        Err(unavailable())
    }

    async fn overwrite_progress(&self, _update: &ProgressUpdate) -> Result<bool, DatabaseError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        Err(unavailable())
    }
}

#[async_trait]
impl ContentStore for UnavailableStore {
    async fn find_stage(&self, _stage_code: &str) -> Result<Option<Stage>, DatabaseError> {
        Err(unavailable())
    }

    async fn find_monster(&self, _monster_code: &str) -> Result<Option<MonsterRow>, DatabaseError> {
        Err(unavailable())
    }

    async fn find_card(&self, _card_code: &str) -> Result<Option<CardRow>, DatabaseError> {
        Err(unavailable())
    }

    async fn find_level(&self, _level_value: i32) -> Result<Option<Level>, DatabaseError> {
        Err(unavailable())
    }

    async fn ping(&self) -> Result<(), DatabaseError> {
        Err(unavailable())
    }
}

/// Development config with the minimum bcrypt cost, plus any overrides
pub fn test_config(overrides: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
    let mut vars: HashMap<&str, &str> = [
        ("DB_HOST", "127.0.0.1"),
        ("DB_USER", "test"),
        ("DB_PASSWORD", "test"),
        ("DB_ACCOUNT_NAME", "account"),
        ("DB_GAME_NAME", "game"),
        ("BCRYPT_COST", "4"),
        ("API_ENABLE_REQUEST_LOGGING", "false"),
    ]
    .into_iter()
    .collect();
    vars.extend(overrides.iter().copied());

    AppConfig::from_lookup(|key| vars.get(key).map(|v| v.to_string()))
}

/// State over the given in-memory stores
pub fn memory_state(
    config: AppConfig,
    accounts: Arc<MemoryAccountStore>,
    content: Arc<MemoryContentStore>,
) -> AppState {
    AppState::new(Arc::new(config), accounts, content)
}
