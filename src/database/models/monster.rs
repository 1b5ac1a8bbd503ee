use serde::Serialize;
use sqlx::FromRow;

use crate::database::manager::DatabaseError;
use crate::database::mapper::{decode_enum, EnumDecodePolicy, StoredEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum MonsterGrade {
    #[default]
    Normal,
    Elite,
    Boss,
}

impl StoredEnum for MonsterGrade {
    const COLUMN: &'static str = "Grade";
    const VARIANTS: &'static [Self] =
        &[MonsterGrade::Normal, MonsterGrade::Elite, MonsterGrade::Boss];

    fn name(self) -> &'static str {
        match self {
            MonsterGrade::Normal => "Normal",
            MonsterGrade::Elite => "Elite",
            MonsterGrade::Boss => "Boss",
        }
    }
}

/// `Monster` row as stored, grade still in string form
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct MonsterRow {
    #[sqlx(rename = "MonsterCode")]
    pub monster_code: String,
    #[sqlx(rename = "MonsterName")]
    pub monster_name: String,
    #[sqlx(rename = "Grade")]
    pub grade: String,
    #[sqlx(rename = "HP")]
    pub hp: i32,
    #[sqlx(rename = "ATK")]
    pub atk: i32,
    #[sqlx(rename = "RewardEXP")]
    pub reward_exp: i32,
}

impl MonsterRow {
    pub fn into_monster(self, policy: EnumDecodePolicy) -> Result<Monster, DatabaseError> {
        Ok(Monster {
            grade: decode_enum(&self.grade, policy)?,
            monster_code: self.monster_code,
            monster_name: self.monster_name,
            hp: self.hp,
            atk: self.atk,
            reward_exp: self.reward_exp,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Monster {
    pub monster_code: String,
    pub monster_name: String,
    pub grade: MonsterGrade,
    pub hp: i32,
    pub atk: i32,
    pub reward_exp: i32,
}
