use serde::Serialize;
use sqlx::FromRow;

/// Stat table entry for one character level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Level {
    #[sqlx(rename = "LevelValue")]
    pub level_value: i32,
    #[sqlx(rename = "RequiredEXP")]
    pub required_exp: i32,
    #[sqlx(rename = "HP")]
    pub hp: i32,
    #[sqlx(rename = "ATK")]
    pub atk: i32,
}
