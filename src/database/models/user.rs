use serde::Serialize;
use sqlx::FromRow;

/// Full `UserInfo` row, including the password hash.
///
/// Never serialized; handlers answer with [`UserProfile`].
#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    #[sqlx(rename = "UID")]
    pub uid: i32,
    #[sqlx(rename = "ID")]
    pub id: String,
    #[sqlx(rename = "PW")]
    pub password_hash: String,
    #[sqlx(rename = "Name")]
    pub name: String,
    #[sqlx(rename = "Level")]
    pub level: i32,
    #[sqlx(rename = "EXP")]
    pub exp: i32,
    #[sqlx(rename = "HP")]
    pub hp: i32,
    #[sqlx(rename = "ATK")]
    pub atk: i32,
    #[sqlx(rename = "ClearedStageCode")]
    pub cleared_stage_code: Option<String>,
}

impl UserRecord {
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            uid: self.uid,
            name: self.name.clone(),
            level: self.level,
            hp: self.hp,
            atk: self.atk,
            exp: self.exp,
            cleared_stage_code: self.cleared_stage_code.clone(),
        }
    }
}

/// Public part of a user returned on login
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub uid: i32,
    pub name: String,
    pub level: i32,
    pub hp: i32,
    pub atk: i32,
    pub exp: i32,
    pub cleared_stage_code: Option<String>,
}

/// Insert payload for registration; stats take the schema defaults
#[derive(Debug, Clone)]
pub struct NewUser {
    pub id: String,
    pub password_hash: String,
    pub name: String,
}

/// Replacement values for every progression column of one user row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub uid: i32,
    pub level: i32,
    pub hp: i32,
    pub atk: i32,
    pub exp: i32,
    pub cleared_stage_code: Option<String>,
}
