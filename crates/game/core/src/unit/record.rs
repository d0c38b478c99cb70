//! Flat `name,health,damage,alive` record codec for units.
//!
//! The battle flow never uses this; it exists for callers that want to store
//! or exchange a unit's fields as one line of text.

use std::fmt;
use std::str::FromStr;

use crate::error::{ErrorSeverity, GameError};

use super::Unit;

const FIELD_COUNT: usize = 4;

/// The four persisted fields of a unit.
///
/// Fields are separated by commas without escaping, so a name containing a
/// comma has no record form. [`UnitRecord::encode`] rejects such names;
/// `Display` renders them as-is.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnitRecord {
    pub name: String,
    pub health: i32,
    pub damage: i32,
    pub alive: bool,
}

impl UnitRecord {
    /// Renders the record line, failing if it could not be parsed back.
    pub fn encode(&self) -> Result<String, RecordError> {
        if self.name.contains(',') {
            return Err(RecordError::NameContainsComma(self.name.clone()));
        }
        Ok(self.to_string())
    }
}

impl From<&Unit> for UnitRecord {
    fn from(unit: &Unit) -> Self {
        Self {
            name: unit.name().to_owned(),
            health: unit.health(),
            damage: unit.damage(),
            alive: unit.is_alive(),
        }
    }
}

impl fmt::Display for UnitRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.name, self.health, self.damage, self.alive
        )
    }
}

impl FromStr for UnitRecord {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split(',').collect();
        let &[name, health, damage, alive] = fields.as_slice() else {
            return Err(RecordError::FieldCount {
                expected: FIELD_COUNT,
                found: fields.len(),
            });
        };

        let health = health
            .trim()
            .parse()
            .map_err(|_| RecordError::InvalidHealth(health.to_owned()))?;
        let damage = damage
            .trim()
            .parse()
            .map_err(|_| RecordError::InvalidDamage(damage.to_owned()))?;
        let alive = parse_bool(alive).ok_or_else(|| RecordError::InvalidAlive(alive.to_owned()))?;

        Ok(Self {
            name: name.to_owned(),
            health,
            damage,
            alive,
        })
    }
}

// Accepts `true`/`false` in any ASCII case.
fn parse_bool(field: &str) -> Option<bool> {
    let field = field.trim();
    if field.eq_ignore_ascii_case("true") {
        Some(true)
    } else if field.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Failure to parse a flat unit record.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("malformed unit record: expected {expected} fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("malformed unit record: health '{0}' is not an integer")]
    InvalidHealth(String),

    #[error("malformed unit record: damage '{0}' is not an integer")]
    InvalidDamage(String),

    #[error("malformed unit record: alive '{0}' is not a boolean")]
    InvalidAlive(String),

    #[error("unit name '{0}' contains the field separator ','")]
    NameContainsComma(String),
}

impl GameError for RecordError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::FieldCount { .. } => "RECORD_FIELD_COUNT",
            Self::InvalidHealth(_) => "RECORD_INVALID_HEALTH",
            Self::InvalidDamage(_) => "RECORD_INVALID_DAMAGE",
            Self::InvalidAlive(_) => "RECORD_INVALID_ALIVE",
            Self::NameContainsComma(_) => "RECORD_NAME_CONTAINS_COMMA",
        }
    }
}
