// On-field positions and the tactical categories they group into.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// Player positions, coded the way Football Manager abbreviates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "GK")]
    Goalkeeper,

    #[serde(rename = "CB")]
    CenterBack,
    #[serde(rename = "LB")]
    LeftBack,
    #[serde(rename = "RB")]
    RightBack,
    #[serde(rename = "WBL")]
    WingBackLeft,
    #[serde(rename = "WBR")]
    WingBackRight,

    #[serde(rename = "DM")]
    DefensiveMidfielder,
    #[serde(rename = "CM")]
    CentralMidfielder,
    #[serde(rename = "AM")]
    AttackingMidfielder,
    #[serde(rename = "LM")]
    LeftMidfielder,
    #[serde(rename = "RM")]
    RightMidfielder,

    #[serde(rename = "ST")]
    CenterForward,
    #[serde(rename = "LW")]
    LeftWinger,
    #[serde(rename = "RW")]
    RightWinger,
}

impl Position {
    /// Every position, in declaration order.
    pub const ALL: [Position; 14] = [
        Position::Goalkeeper,
        Position::CenterBack,
        Position::LeftBack,
        Position::RightBack,
        Position::WingBackLeft,
        Position::WingBackRight,
        Position::DefensiveMidfielder,
        Position::CentralMidfielder,
        Position::AttackingMidfielder,
        Position::LeftMidfielder,
        Position::RightMidfielder,
        Position::CenterForward,
        Position::LeftWinger,
        Position::RightWinger,
    ];

    /// Short tag used in squad lists and player display ("GK", "ST", ...).
    pub fn code(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::CenterBack => "CB",
            Position::LeftBack => "LB",
            Position::RightBack => "RB",
            Position::WingBackLeft => "WBL",
            Position::WingBackRight => "WBR",
            Position::DefensiveMidfielder => "DM",
            Position::CentralMidfielder => "CM",
            Position::AttackingMidfielder => "AM",
            Position::LeftMidfielder => "LM",
            Position::RightMidfielder => "RM",
            Position::CenterForward => "ST",
            Position::LeftWinger => "LW",
            Position::RightWinger => "RW",
        }
    }

    /// The tactical category this position belongs to.
    pub fn category(&self) -> PositionCategory {
        match self {
            Position::Goalkeeper => PositionCategory::Goalkeeper,
            Position::CenterBack
            | Position::LeftBack
            | Position::RightBack
            | Position::WingBackLeft
            | Position::WingBackRight => PositionCategory::Defender,
            Position::DefensiveMidfielder
            | Position::CentralMidfielder
            | Position::AttackingMidfielder
            | Position::LeftMidfielder
            | Position::RightMidfielder => PositionCategory::Midfielder,
            Position::CenterForward | Position::LeftWinger | Position::RightWinger => {
                PositionCategory::Forward
            }
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown position code `{0}`")]
pub struct ParsePositionError(pub String);

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Parse a position code. Case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        Position::ALL
            .into_iter()
            .find(|p| p.code() == code)
            .ok_or_else(|| ParsePositionError(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// PositionCategory
// ---------------------------------------------------------------------------

/// Broad position groupings used for tactical analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PositionCategory {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl PositionCategory {
    pub const ALL: [PositionCategory; 4] = [
        PositionCategory::Goalkeeper,
        PositionCategory::Defender,
        PositionCategory::Midfielder,
        PositionCategory::Forward,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PositionCategory::Goalkeeper => "Goalkeeper",
            PositionCategory::Defender => "Defender",
            PositionCategory::Midfielder => "Midfielder",
            PositionCategory::Forward => "Forward",
        }
    }

    /// Positions in this category, in declaration order.
    pub fn positions(&self) -> Vec<Position> {
        Position::ALL
            .into_iter()
            .filter(|p| p.category() == *self)
            .collect()
    }
}

impl fmt::Display for PositionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Look up the category for a position. Total over `Position`.
pub fn get_position_category(position: Position) -> PositionCategory {
    position.category()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
