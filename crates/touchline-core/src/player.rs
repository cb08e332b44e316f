// Player entity: identity, position, ratings and injury state.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use uuid::Uuid;

use crate::error::ValidationError;
use crate::position::Position;
use crate::stats::PlayerStats;

pub const MIN_AGE: i64 = 16;
pub const MAX_AGE: i64 = 45;

// ---------------------------------------------------------------------------
// PlayerRecord
// ---------------------------------------------------------------------------

/// Flat, unvalidated form of a player, as read from or written to storage.
/// Converting into `Player` runs the full validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: Uuid,
    pub name: String,
    pub age: i64,
    pub primary_position: Position,
    pub stats: PlayerStats,
    #[serde(default)]
    pub is_injured: bool,
    #[serde(default)]
    pub injury_description: Option<String>,
}

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// A squad member. The id is fixed at creation; injury state changes only
/// through `injure` and `heal`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "PlayerRecord", into = "PlayerRecord")]
pub struct Player {
    id: Uuid,
    name: String,
    age: u8,
    primary_position: Position,
    stats: PlayerStats,
    /// `Some` exactly when the player is injured; never blank.
    injury: Option<String>,
}

impl Player {
    /// Create a new player with a fresh id and no injury.
    pub fn create(
        name: impl Into<String>,
        age: i64,
        primary_position: Position,
        stats: PlayerStats,
    ) -> Result<Self, ValidationError> {
        Self::try_from(PlayerRecord {
            id: Uuid::new_v4(),
            name: name.into(),
            age,
            primary_position,
            stats,
            is_injured: false,
            injury_description: None,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn primary_position(&self) -> Position {
        self.primary_position
    }

    pub fn stats(&self) -> &PlayerStats {
        &self.stats
    }

    pub fn is_injured(&self) -> bool {
        self.injury.is_some()
    }

    pub fn injury_description(&self) -> Option<&str> {
        self.injury.as_deref()
    }

    /// Available for selection: not injured.
    pub fn is_available(&self) -> bool {
        !self.is_injured()
    }

    /// Mark the player as injured. The description is trimmed and must not
    /// be blank; on error the player is left unchanged.
    pub fn injure(&mut self, description: &str) -> Result<(), ValidationError> {
        let description = normalize_description(Some(description))
            .ok_or(ValidationError::MissingInjuryDescription)?;
        debug!(player = %self.id, injury = %description, "player injured");
        self.injury = Some(description);
        Ok(())
    }

    /// Clear any injury. Idempotent.
    pub fn heal(&mut self) {
        if self.injury.take().is_some() {
            debug!(player = %self.id, "player healed");
        }
    }
}

impl TryFrom<PlayerRecord> for Player {
    type Error = ValidationError;

    /// Checks, in order: age, name, injured without description, description
    /// without injury. Only the first failure is reported.
    fn try_from(record: PlayerRecord) -> Result<Self, Self::Error> {
        if !(MIN_AGE..=MAX_AGE).contains(&record.age) {
            return Err(ValidationError::AgeOutOfRange(record.age));
        }

        if record.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let injury = normalize_description(record.injury_description.as_deref());
        match (record.is_injured, &injury) {
            (true, None) => return Err(ValidationError::MissingInjuryDescription),
            (false, Some(_)) => return Err(ValidationError::UnexpectedInjuryDescription),
            _ => {}
        }

        Ok(Self {
            id: record.id,
            name: record.name,
            age: record.age as u8,
            primary_position: record.primary_position,
            stats: record.stats,
            injury,
        })
    }
}

impl From<Player> for PlayerRecord {
    fn from(player: Player) -> Self {
        Self {
            id: player.id,
            name: player.name,
            age: i64::from(player.age),
            primary_position: player.primary_position,
            stats: player.stats,
            is_injured: player.injury.is_some(),
            injury_description: player.injury,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.is_injured() { "INJURED" } else { "AVAILABLE" };
        write!(
            f,
            "{} ({}) - {} [{}]",
            self.name,
            self.age,
            self.primary_position.code(),
            status
        )
    }
}

/// Trim a description; blank counts as absent.
fn normalize_description(description: Option<&str>) -> Option<String> {
    description
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(str::to_string)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
