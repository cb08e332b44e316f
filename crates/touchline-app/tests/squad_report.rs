// Integration tests: the shipped config and squad file, loaded through the
// library's public API the same way the binary does.

use std::path::Path;

use touchline_app::config::{self, SortKey};
use touchline_app::report::build_report;
use touchline_app::squad::{load_squad, SquadError};
use touchline_core::{Position, PositionCategory};

#[test]
fn shipped_config_loads() {
    let config = config::load_config_from(Path::new(".")).expect("config/touchline.toml should load");
    assert_eq!(config.squad.name, "First Team");
    assert_eq!(config.squad.path, "data/squad.csv");
    assert_eq!(config.report.sort_by, SortKey::Overall);
    assert!(config.report.include_injured);
}

#[test]
fn shipped_squad_imports_cleanly() {
    let import = load_squad(Path::new("data/squad.csv")).expect("data/squad.csv should import");
    assert_eq!(import.players.len(), 9);
    assert_eq!(import.skipped, 0);

    let injured: Vec<&str> = import
        .players
        .iter()
        .filter(|p| p.is_injured())
        .map(|p| p.name())
        .collect();
    assert_eq!(injured, vec!["Andy Robertson", "Neymar Jr"]);

    let ronaldo = import
        .players
        .iter()
        .find(|p| p.primary_position() == Position::CenterForward)
        .unwrap();
    assert_eq!(ronaldo.to_string(), "Cristiano Ronaldo (38) - ST [AVAILABLE]");
}

#[test]
fn report_over_shipped_squad() {
    let config = config::load_config_from(Path::new(".")).unwrap();
    let import = load_squad(Path::new(&config.squad.path)).unwrap();
    let report = build_report(&config.squad.name, &import.players, &config.report);

    assert_eq!(report.lines.len(), 9);
    assert_eq!(report.available, 7);
    assert_eq!(report.injured, 2);
    assert_eq!(
        report.by_category,
        vec![
            (PositionCategory::Goalkeeper, 1),
            (PositionCategory::Defender, 3),
            (PositionCategory::Midfielder, 2),
            (PositionCategory::Forward, 3),
        ]
    );

    // Scores never increase down the list.
    let scores: Vec<f64> = report.lines.iter().map(|l| l.score.unwrap()).collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]), "{scores:?}");

    let text = report.to_string();
    assert!(text.starts_with("First Team\n"));
    assert!(text.contains("Neymar Jr (31) - LW [INJURED]"));
    assert!(text.ends_with("Available: 7, Injured: 2"));
}

#[test]
fn empty_squad_file_is_an_error() {
    let dir = std::env::temp_dir().join(format!("touchline_empty_squad_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("squad.csv");
    std::fs::write(
        &path,
        "name,age,position,passing,crossing,dribbling,first_touch,marking,tackling,pace,acceleration,stamina,vision\n\
         Too Young,14,CM,10,10,10,10,10,10,10,10,10,10\n",
    )
    .unwrap();

    let err = load_squad(&path).unwrap_err();
    assert!(matches!(err, SquadError::Empty { .. }), "{err}");
    let _ = std::fs::remove_dir_all(&dir);
}
