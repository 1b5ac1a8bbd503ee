pub mod account;
pub mod content;
pub mod manager;
pub mod mapper;
pub mod models;

pub use account::{AccountStore, MySqlAccountStore};
pub use content::{ContentStore, MySqlContentStore};
pub use manager::{DatabaseError, DatabaseManager};
pub use mapper::EnumDecodePolicy;
