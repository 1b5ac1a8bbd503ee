// handlers/mod.rs - Request handlers grouped by concern
//
// No handler depends on another; all share the stores in AppState and the
// response envelope in crate::middleware.

pub mod auth;    // /auth/* - login and registration
pub mod content; // /stage, /monster, /card, /level - read-only lookups
pub mod system;  // /, /health and the fallback
pub mod user;    // /user/progress - progression save
