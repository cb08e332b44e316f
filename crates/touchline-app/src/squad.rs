// Squad import from CSV.
//
// One player per row: name, age, position code, the ten ratings in their
// usual order, and an optional injury column. Rows that fail to decode or
// fail domain validation are skipped with a warning.

use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

use touchline_core::{Player, PlayerStats, Position, ValidationError};

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// Result of importing a squad file.
#[derive(Debug, Clone)]
pub struct SquadImport {
    pub players: Vec<Player>,
    /// Rows dropped because they could not be decoded or validated.
    pub skipped: usize,
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum SquadError {
    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },

    #[error("squad file {path} produced zero valid players")]
    Empty { path: String },
}

/// Why a single row was rejected.
#[derive(Debug, thiserror::Error)]
enum RowError {
    #[error(transparent)]
    Position(#[from] touchline_core::ParsePositionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// ---------------------------------------------------------------------------
// Raw CSV row (private)
// ---------------------------------------------------------------------------

/// Squad CSV row. Columns not named here are ignored by the CSV decoder.
#[derive(Debug, Deserialize)]
struct RawPlayerRow {
    name: String,
    age: i64,
    position: String,
    passing: i64,
    crossing: i64,
    dribbling: i64,
    first_touch: i64,
    marking: i64,
    tackling: i64,
    pace: i64,
    acceleration: i64,
    stamina: i64,
    vision: i64,
    #[serde(default)]
    injury: Option<String>,
}

impl RawPlayerRow {
    fn into_player(self) -> Result<Player, RowError> {
        let position: Position = self.position.parse()?;
        let stats = PlayerStats::new(
            self.passing,
            self.crossing,
            self.dribbling,
            self.first_touch,
            self.marking,
            self.tackling,
            self.pace,
            self.acceleration,
            self.stamina,
            self.vision,
        )?;
        let mut player = Player::create(self.name.trim(), self.age, position, stats)?;
        if let Some(injury) = self.injury.as_deref().filter(|s| !s.trim().is_empty()) {
            player.injure(injury)?;
        }
        Ok(player)
    }
}

// ---------------------------------------------------------------------------
// Loaders
// ---------------------------------------------------------------------------

/// Read a squad from any CSV source. Exposed so callers and tests can feed
/// in-memory data.
pub fn load_squad_from_reader<R: Read>(rdr: R) -> Result<SquadImport, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(rdr);

    let mut players = Vec::new();
    let mut skipped = 0;
    for (idx, result) in reader.deserialize::<RawPlayerRow>().enumerate() {
        // Header is line 1.
        let line = idx + 2;
        match result {
            Ok(raw) => {
                let name = raw.name.clone();
                match raw.into_player() {
                    Ok(player) => {
                        debug!(player = %player.id(), "imported {}", player);
                        players.push(player);
                    }
                    Err(e) => {
                        warn!("skipping row {} ('{}'): {}", line, name.trim(), e);
                        skipped += 1;
                    }
                }
            }
            Err(e) => {
                warn!("skipping malformed row {}: {}", line, e);
                skipped += 1;
            }
        }
    }

    Ok(SquadImport { players, skipped })
}

/// Load a squad CSV file. Fails if the file yields no valid players.
pub fn load_squad(path: &Path) -> Result<SquadImport, SquadError> {
    let file = std::fs::File::open(path).map_err(|e| SquadError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let import = load_squad_from_reader(file).map_err(|e| SquadError::Csv {
        path: path.display().to_string(),
        source: e,
    })?;

    if import.players.is_empty() {
        return Err(SquadError::Empty {
            path: path.display().to_string(),
        });
    }

    Ok(import)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
