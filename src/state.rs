//! Shared application state for all routes. Read-only after startup.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::{
    AccountStore, ContentStore, DatabaseManager, MySqlAccountStore, MySqlContentStore,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub accounts: Arc<dyn AccountStore>,
    pub content: Arc<dyn ContentStore>,
}

impl AppState {
    pub fn new(
        config: Arc<AppConfig>,
        accounts: Arc<dyn AccountStore>,
        content: Arc<dyn ContentStore>,
    ) -> Self {
        Self {
            config,
            accounts,
            content,
        }
    }

    /// State backed by the MySQL account and game content pools
    pub fn from_database(config: Arc<AppConfig>, database: &DatabaseManager) -> Self {
        Self::new(
            config,
            Arc::new(MySqlAccountStore::new(database.account_pool())),
            Arc::new(MySqlContentStore::new(database.game_pool())),
        )
    }
}
