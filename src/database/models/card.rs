use serde::Serialize;
use sqlx::FromRow;

use crate::database::manager::DatabaseError;
use crate::database::mapper::{decode_enum, EnumDecodePolicy, StoredEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum CardType {
    #[default]
    Attack,
    Defense,
    Heal,
    Buff,
}

impl StoredEnum for CardType {
    const COLUMN: &'static str = "CardType";
    const VARIANTS: &'static [Self] = &[
        CardType::Attack,
        CardType::Defense,
        CardType::Heal,
        CardType::Buff,
    ];

    fn name(self) -> &'static str {
        match self {
            CardType::Attack => "Attack",
            CardType::Defense => "Defense",
            CardType::Heal => "Heal",
            CardType::Buff => "Buff",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct CardRow {
    #[sqlx(rename = "CardCode")]
    pub card_code: String,
    #[sqlx(rename = "CardName")]
    pub card_name: String,
    #[sqlx(rename = "CardType")]
    pub card_type: String,
    #[sqlx(rename = "Cost")]
    pub cost: i32,
    #[sqlx(rename = "EffectValue")]
    pub effect_value: i32,
    #[sqlx(rename = "Description")]
    pub description: String,
}

impl CardRow {
    pub fn into_card(self, policy: EnumDecodePolicy) -> Result<Card, DatabaseError> {
        Ok(Card {
            card_type: decode_enum(&self.card_type, policy)?,
            card_code: self.card_code,
            card_name: self.card_name,
            cost: self.cost,
            effect_value: self.effect_value,
            description: self.description,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub card_code: String,
    pub card_name: String,
    pub card_type: CardType,
    pub cost: i32,
    pub effect_value: i32,
    pub description: String,
}
