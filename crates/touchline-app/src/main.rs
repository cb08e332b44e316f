// Squad report entry point.
//
// Startup sequence:
// 1. Initialize tracing (stderr, so the report on stdout stays clean)
// 2. Load config
// 3. Import the squad CSV
// 4. Build and print the report

use std::path::Path;

use anyhow::Context;
use tracing::{info, warn};

use touchline_app::{config, report, squad};

fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing
    init_tracing()?;

    // 2. Load config
    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: squad '{}' from {}",
        config.squad.name, config.squad.path
    );

    // 3. Import the squad
    let import = squad::load_squad(Path::new(&config.squad.path))
        .with_context(|| format!("failed to import squad from {}", config.squad.path))?;
    info!("Imported {} players", import.players.len());
    if import.skipped > 0 {
        warn!("{} rows skipped during import", import.skipped);
    }

    // 4. Report
    let report = report::build_report(&config.squad.name, &import.players, &config.report);
    println!("{report}");

    Ok(())
}

/// Initialize tracing to stderr.
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("touchline=info,touchline_app=info,warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
