use std::path::{Path, PathBuf};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use kilowatch::application::config::AppConfig;
use kilowatch::application::services::analysis::AnalysisService;
use kilowatch::domain::ports::store::{BuildingStore, ReadingStore};
use kilowatch::domain::value_objects::day_type::DayType;
use kilowatch::infrastructure::import::{load_dataset, Dataset};
use kilowatch::infrastructure::persistence::in_memory_store::InMemoryStore;
use kilowatch::presentation::cli::app::{Cli, Commands};
use kilowatch::presentation::cli::commands::analyze::run_analyze;
use kilowatch::presentation::cli::commands::profile::run_profile;

fn setup_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn resolve_input(flag: Option<PathBuf>, config: &AppConfig) -> anyhow::Result<PathBuf> {
    flag.or_else(|| config.data.default_dataset.clone())
        .ok_or_else(|| {
            anyhow::anyhow!("No dataset given: pass --input or set data.default_dataset in config")
        })
}

fn resolve_day_type(raw: &str) -> anyhow::Result<DayType> {
    match raw.to_lowercase().as_str() {
        "weekday" => Ok(DayType::Weekday),
        "weekend" => Ok(DayType::Weekend),
        other => {
            anyhow::bail!("Unknown day type: '{other}'. Valid values: weekday, weekend");
        }
    }
}

fn open_dataset(path: &Path) -> anyhow::Result<Dataset> {
    let dataset = load_dataset(path)?;
    tracing::debug!(
        building = %dataset.building.id,
        readings = dataset.readings.len(),
        "dataset loaded"
    );
    Ok(dataset)
}

/// Register the dataset's building and readings in the store, returning the
/// building id to analyze. Commands read back from the store only.
fn stage_dataset(store: &InMemoryStore, dataset: &Dataset) -> anyhow::Result<String> {
    store.save_building(&dataset.building)?;
    store.append_readings(&dataset.building.id, &dataset.readings)?;
    Ok(dataset.building.id.clone())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_tracing(cli.verbose);

    // Load configuration
    let config = if let Some(ref path) = cli.config {
        AppConfig::load_from(path)?
    } else {
        AppConfig::load()?
    };

    if !config.output.color {
        colored::control::set_override(false);
    }

    let store = InMemoryStore::new();

    match cli.command {
        Commands::Analyze { input, json } => {
            let path = resolve_input(input, &config)?;
            let dataset = open_dataset(&path)?;
            let building_id = stage_dataset(&store, &dataset)?;
            let service = AnalysisService::default();
            run_analyze(&service, &store, &building_id, json)?;
        }
        Commands::Profile {
            input,
            day_type,
            json,
        } => {
            let path = resolve_input(input, &config)?;
            let dataset = open_dataset(&path)?;
            let building_id = stage_dataset(&store, &dataset)?;
            run_profile(&store, &building_id, resolve_day_type(&day_type)?, json)?;
        }
    }

    Ok(())
}
