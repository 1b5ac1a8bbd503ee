//! Row-to-entity helpers shared by the content models.
//!
//! Enum columns are stored as strings. How an unrecognized string is
//! treated is a deployment decision, expressed by [`EnumDecodePolicy`].

use std::fmt;
use std::str::FromStr;

use super::manager::DatabaseError;

/// What to do when a stored enum string matches none of the known variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EnumDecodePolicy {
    /// Substitute the enum's zero variant and log a warning
    #[default]
    Fallback,
    /// Fail the lookup with a decode error
    Strict,
}

impl FromStr for EnumDecodePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fallback" | "default" | "lenient" => Ok(EnumDecodePolicy::Fallback),
            "strict" => Ok(EnumDecodePolicy::Strict),
            other => Err(format!("unknown enum decode policy: {}", other)),
        }
    }
}

/// A closed set of variants persisted by name in a content column
pub trait StoredEnum: Sized + Copy + Default + fmt::Debug + 'static {
    /// Column the value is read from, for error reporting
    const COLUMN: &'static str;

    /// All variants in declaration order; the first is the zero variant
    const VARIANTS: &'static [Self];

    fn name(self) -> &'static str;

    /// Case-insensitive match of a stored string against the variant names
    fn parse_stored(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.name().eq_ignore_ascii_case(raw))
    }
}

pub fn decode_enum<E: StoredEnum>(raw: &str, policy: EnumDecodePolicy) -> Result<E, DatabaseError> {
    if let Some(value) = E::parse_stored(raw) {
        return Ok(value);
    }

    match policy {
        EnumDecodePolicy::Fallback => {
            let fallback = E::default();
            tracing::warn!(
                column = E::COLUMN,
                value = raw,
                fallback = fallback.name(),
                "unrecognized enum value, using zero variant"
            );
            Ok(fallback)
        }
        EnumDecodePolicy::Strict => Err(DatabaseError::Decode {
            column: E::COLUMN,
            value: raw.to_string(),
        }),
    }
}

/// Nullable text columns treat blank strings the same as NULL
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
