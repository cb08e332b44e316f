// Player skill ratings: ten attributes on the Football Manager 1-20 scale.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::ValidationError;

/// Lowest valid rating.
pub const MIN_RATING: i64 = 1;
/// Highest valid rating.
pub const MAX_RATING: i64 = 20;

/// Flat serialised form of `PlayerStats`: rating name to value.
pub type StatsMap = BTreeMap<String, i64>;

// ---------------------------------------------------------------------------
// StatField
// ---------------------------------------------------------------------------

/// Names of the ten ratings, in declaration order. Validation walks them in
/// this order, so the first invalid field reported is deterministic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatField {
    // Technical
    Passing,
    Crossing,
    Dribbling,
    FirstTouch,
    // Defensive
    Marking,
    Tackling,
    // Physical
    Pace,
    Acceleration,
    Stamina,
    // Mental
    Vision,
}

impl StatField {
    pub const ALL: [StatField; 10] = [
        StatField::Passing,
        StatField::Crossing,
        StatField::Dribbling,
        StatField::FirstTouch,
        StatField::Marking,
        StatField::Tackling,
        StatField::Pace,
        StatField::Acceleration,
        StatField::Stamina,
        StatField::Vision,
    ];

    /// Key used in `StatsMap` and in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            StatField::Passing => "passing",
            StatField::Crossing => "crossing",
            StatField::Dribbling => "dribbling",
            StatField::FirstTouch => "first_touch",
            StatField::Marking => "marking",
            StatField::Tackling => "tackling",
            StatField::Pace => "pace",
            StatField::Acceleration => "acceleration",
            StatField::Stamina => "stamina",
            StatField::Vision => "vision",
        }
    }
}

impl fmt::Display for StatField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// PlayerStats
// ---------------------------------------------------------------------------

/// Core player attributes for tactical analysis.
///
/// Immutable once built: fields are private and every constructor runs the
/// 1-20 range check, so a `PlayerStats` value is always in range. Equality is
/// field by field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "StatsMap", into = "StatsMap")]
pub struct PlayerStats {
    passing: u8,
    crossing: u8,
    dribbling: u8,
    first_touch: u8,
    marking: u8,
    tackling: u8,
    pace: u8,
    acceleration: u8,
    stamina: u8,
    vision: u8,
}

impl PlayerStats {
    /// Build from ten ratings given in declaration order.
    ///
    /// Fails on the first rating outside 1..=20, naming that field.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
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
    ) -> Result<Self, ValidationError> {
        Self::from_ratings([
            passing,
            crossing,
            dribbling,
            first_touch,
            marking,
            tackling,
            pace,
            acceleration,
            stamina,
            vision,
        ])
    }

    /// Build from an array ordered like `StatField::ALL`.
    pub fn from_ratings(values: [i64; 10]) -> Result<Self, ValidationError> {
        let mut r = [0u8; 10];
        for (i, (field, value)) in StatField::ALL.into_iter().zip(values).enumerate() {
            r[i] = check_rating(field, value)?;
        }
        Ok(Self {
            passing: r[0],
            crossing: r[1],
            dribbling: r[2],
            first_touch: r[3],
            marking: r[4],
            tackling: r[5],
            pace: r[6],
            acceleration: r[7],
            stamina: r[8],
            vision: r[9],
        })
    }

    pub fn passing(&self) -> u8 {
        self.passing
    }

    pub fn crossing(&self) -> u8 {
        self.crossing
    }

    pub fn dribbling(&self) -> u8 {
        self.dribbling
    }

    pub fn first_touch(&self) -> u8 {
        self.first_touch
    }

    pub fn marking(&self) -> u8 {
        self.marking
    }

    pub fn tackling(&self) -> u8 {
        self.tackling
    }

    pub fn pace(&self) -> u8 {
        self.pace
    }

    pub fn acceleration(&self) -> u8 {
        self.acceleration
    }

    pub fn stamina(&self) -> u8 {
        self.stamina
    }

    pub fn vision(&self) -> u8 {
        self.vision
    }

    /// Read a rating by name.
    pub fn get(&self, field: StatField) -> u8 {
        match field {
            StatField::Passing => self.passing,
            StatField::Crossing => self.crossing,
            StatField::Dribbling => self.dribbling,
            StatField::FirstTouch => self.first_touch,
            StatField::Marking => self.marking,
            StatField::Tackling => self.tackling,
            StatField::Pace => self.pace,
            StatField::Acceleration => self.acceleration,
            StatField::Stamina => self.stamina,
            StatField::Vision => self.vision,
        }
    }

    /// Mean of passing, crossing, dribbling and first touch.
    pub fn technical_average(&self) -> f64 {
        mean(&[self.passing, self.crossing, self.dribbling, self.first_touch])
    }

    /// Mean of marking and tackling.
    pub fn defensive_average(&self) -> f64 {
        mean(&[self.marking, self.tackling])
    }

    /// Mean of pace, acceleration and stamina.
    pub fn physical_average(&self) -> f64 {
        mean(&[self.pace, self.acceleration, self.stamina])
    }

    /// Mean of all ten ratings.
    pub fn overall_average(&self) -> f64 {
        let all = StatField::ALL.map(|f| self.get(f));
        mean(&all)
    }

    /// Flat map of the ten rating names to their values.
    pub fn to_dict(&self) -> StatsMap {
        StatField::ALL
            .into_iter()
            .map(|f| (f.name().to_string(), i64::from(self.get(f))))
            .collect()
    }

    /// Inverse of `to_dict`, with the same validation as `new`.
    ///
    /// Fields are checked in declaration order (missing key or out-of-range
    /// value); keys that are not rating names are rejected afterwards.
    pub fn from_dict(data: &StatsMap) -> Result<Self, ValidationError> {
        let mut values = [0i64; 10];
        for (slot, field) in values.iter_mut().zip(StatField::ALL) {
            let value = *data
                .get(field.name())
                .ok_or(ValidationError::MissingRating { field })?;
            check_rating(field, value)?;
            *slot = value;
        }

        if let Some(key) = data
            .keys()
            .find(|k| !StatField::ALL.iter().any(|f| f.name() == k.as_str()))
        {
            return Err(ValidationError::UnknownRating { key: key.clone() });
        }

        Self::from_ratings(values)
    }
}

impl TryFrom<StatsMap> for PlayerStats {
    type Error = ValidationError;

    fn try_from(map: StatsMap) -> Result<Self, Self::Error> {
        Self::from_dict(&map)
    }
}

impl From<PlayerStats> for StatsMap {
    fn from(stats: PlayerStats) -> Self {
        stats.to_dict()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn check_rating(field: StatField, value: i64) -> Result<u8, ValidationError> {
    if (MIN_RATING..=MAX_RATING).contains(&value) {
        Ok(value as u8)
    } else {
        Err(ValidationError::RatingOutOfRange { field, value })
    }
}

/// Integer sum over count, not rounded.
fn mean(values: &[u8]) -> f64 {
    let sum: u32 = values.iter().map(|&v| u32::from(v)).sum();
    f64::from(sum) / values.len() as f64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_stats() -> PlayerStats {
        PlayerStats::new(15, 10, 12, 14, 8, 9, 13, 11, 16, 13).unwrap()
    }

    fn with_value(field: StatField, value: i64) -> [i64; 10] {
        let mut values = [10; 10];
        let idx = StatField::ALL.iter().position(|f| *f == field).unwrap();
        values[idx] = value;
        values
    }

    #[test]
    fn getters_return_constructor_values() {
        let stats = valid_stats();
        assert_eq!(stats.passing(), 15);
        assert_eq!(stats.crossing(), 10);
        assert_eq!(stats.dribbling(), 12);
        assert_eq!(stats.first_touch(), 14);
        assert_eq!(stats.marking(), 8);
        assert_eq!(stats.tackling(), 9);
        assert_eq!(stats.pace(), 13);
        assert_eq!(stats.acceleration(), 11);
        assert_eq!(stats.stamina(), 16);
        assert_eq!(stats.vision(), 13);
    }

    #[test]
    fn every_field_rejects_zero_and_twenty_one() {
        for field in StatField::ALL {
            for bad in [0, 21] {
                let err = PlayerStats::from_ratings(with_value(field, bad)).unwrap_err();
                assert_eq!(
                    err,
                    ValidationError::RatingOutOfRange { field, value: bad },
                    "{field}={bad}"
                );
                assert_eq!(
                    err.to_string(),
                    format!("{} must be between 1 and 20, got {bad}", field.name())
                );
            }
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        for field in StatField::ALL {
            for ok in [1, 20] {
                let stats = PlayerStats::from_ratings(with_value(field, ok)).unwrap();
                assert_eq!(i64::from(stats.get(field)), ok);
            }
        }
    }

    #[test]
    fn first_invalid_field_in_declared_order_is_reported() {
        let err = PlayerStats::new(10, 10, 10, 10, 10, 0, 10, 99, 10, -3).unwrap_err();
        assert_eq!(
            err,
            ValidationError::RatingOutOfRange {
                field: StatField::Tackling,
                value: 0
            }
        );
    }

    #[test]
    fn negative_rating_rejected() {
        let err = PlayerStats::new(-1, 10, 10, 10, 10, 10, 10, 10, 10, 10).unwrap_err();
        assert_eq!(err.to_string(), "passing must be between 1 and 20, got -1");
    }

    #[test]
    fn technical_average_is_exact() {
        assert_eq!(valid_stats().technical_average(), 12.75);
    }

    #[test]
    fn category_averages() {
        let stats = valid_stats();
        assert_eq!(stats.defensive_average(), 8.5);
        assert!((stats.physical_average() - 40.0 / 3.0).abs() < f64::EPSILON);
        assert_eq!(stats.overall_average(), 12.1);
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(valid_stats(), valid_stats());
        assert_ne!(
            valid_stats(),
            PlayerStats::new(15, 10, 12, 14, 8, 9, 13, 11, 16, 14).unwrap()
        );
    }

    #[test]
    fn to_dict_has_exactly_ten_keys() {
        let map = valid_stats().to_dict();
        assert_eq!(map.len(), 10);
        for field in StatField::ALL {
            assert!(map.contains_key(field.name()), "{field}");
        }
        assert_eq!(map["first_touch"], 14);
    }

    #[test]
    fn dict_roundtrip() {
        let stats = valid_stats();
        assert_eq!(PlayerStats::from_dict(&stats.to_dict()).unwrap(), stats);
    }

    #[test]
    fn from_dict_rejects_out_of_range() {
        let mut map = valid_stats().to_dict();
        map.insert("stamina".into(), 25);
        assert_eq!(
            PlayerStats::from_dict(&map).unwrap_err(),
            ValidationError::RatingOutOfRange {
                field: StatField::Stamina,
                value: 25
            }
        );
    }

    #[test]
    fn from_dict_rejects_missing_field() {
        let mut map = valid_stats().to_dict();
        map.remove("marking");
        assert_eq!(
            PlayerStats::from_dict(&map).unwrap_err(),
            ValidationError::MissingRating {
                field: StatField::Marking
            }
        );
    }

    #[test]
    fn from_dict_rejects_unknown_key() {
        let mut map = valid_stats().to_dict();
        map.insert("finishing".into(), 12);
        assert_eq!(
            PlayerStats::from_dict(&map).unwrap_err(),
            ValidationError::UnknownRating {
                key: "finishing".into()
            }
        );
    }
}
