// Library root: the player data model (positions, ratings, player entity)
// and its validation error.

pub mod error;
pub mod player;
pub mod position;
pub mod stats;

pub use error::ValidationError;
pub use player::{Player, PlayerRecord};
pub use position::{get_position_category, ParsePositionError, Position, PositionCategory};
pub use stats::{PlayerStats, StatField, StatsMap};
