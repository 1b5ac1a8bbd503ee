// handlers/auth/mod.rs - Account handlers
//
// Credentials are checked on every call; there is no session or token
// state between requests.

pub mod login;    // POST /auth/login - verify credentials, return profile
pub mod register; // POST /auth/register - create new account

pub use login::login;
pub use register::register;
