use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    #[sqlx(rename = "StageCode")]
    pub stage_code: String,
    #[sqlx(rename = "StageName")]
    pub stage_name: String,
    #[sqlx(rename = "MonsterCount")]
    pub monster_count: i32,
    #[sqlx(rename = "MonsterCode1")]
    pub monster_code1: Option<String>,
    #[sqlx(rename = "MonsterCode2")]
    pub monster_code2: Option<String>,
    #[sqlx(rename = "MonsterCode3")]
    pub monster_code3: Option<String>,
    #[sqlx(rename = "PrerequisiteStage")]
    pub prerequisite_stage: Option<String>,
}
