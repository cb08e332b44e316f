// Squad report: players ordered by a rating average, with per-category counts.

use std::cmp::Ordering;
use std::fmt;

use touchline_core::{Player, PositionCategory};

use crate::config::{ReportConfig, SortKey};

/// One row of the report.
#[derive(Debug, Clone)]
pub struct ReportLine {
    /// `Player`'s display string.
    pub player: String,
    /// The figure the report is sorted by. `None` when sorting by name.
    pub score: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct SquadReport {
    pub title: String,
    pub sort_by: SortKey,
    pub lines: Vec<ReportLine>,
    /// Player counts per category, every category present, declaration order.
    pub by_category: Vec<(PositionCategory, usize)>,
    pub available: usize,
    pub injured: usize,
}

/// The average a sort key refers to. `None` for `SortKey::Name`.
pub fn score(player: &Player, key: SortKey) -> Option<f64> {
    let stats = player.stats();
    match key {
        SortKey::Overall => Some(stats.overall_average()),
        SortKey::Technical => Some(stats.technical_average()),
        SortKey::Defensive => Some(stats.defensive_average()),
        SortKey::Physical => Some(stats.physical_average()),
        SortKey::Name => None,
    }
}

/// Build a report over `players`. Averages sort descending, names ascending;
/// ties on an average fall back to name.
pub fn build_report(title: &str, players: &[Player], config: &ReportConfig) -> SquadReport {
    let mut selected: Vec<&Player> = players
        .iter()
        .filter(|p| config.include_injured || p.is_available())
        .collect();

    let key = config.sort_by;
    selected.sort_by(|a, b| {
        let by_score = match (score(a, key), score(b, key)) {
            (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        };
        by_score.then_with(|| a.name().cmp(b.name()))
    });

    let by_category = PositionCategory::ALL
        .into_iter()
        .map(|cat| {
            let count = selected
                .iter()
                .filter(|p| p.primary_position().category() == cat)
                .count();
            (cat, count)
        })
        .collect();

    let injured = selected.iter().filter(|p| p.is_injured()).count();

    SquadReport {
        title: title.to_string(),
        sort_by: key,
        lines: selected
            .iter()
            .map(|p| ReportLine {
                player: p.to_string(),
                score: score(p, key),
            })
            .collect(),
        by_category,
        available: selected.len() - injured,
        injured,
    }
}

impl fmt::Display for SquadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for line in &self.lines {
            match line.score {
                Some(score) => writeln!(f, "  {}  {:.2}", line.player, score)?,
                None => writeln!(f, "  {}", line.player)?,
            }
        }
        let categories: Vec<String> = self
            .by_category
            .iter()
            .map(|(cat, n)| format!("{cat}: {n}"))
            .collect();
        writeln!(f, "{}", categories.join(", "))?;
        write!(f, "Available: {}, Injured: {}", self.available, self.injured)
    }
}
