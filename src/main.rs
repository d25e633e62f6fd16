use clap::Parser;

use ecotrack_rs::cli::{Cli, Command};
use ecotrack_rs::engine::{
    build_recommendations, build_series, derive_record, summarize_progress, EngineConfig,
    HISTORY_PREVIEW_LEN,
};
use ecotrack_rs::error::Result;
use ecotrack_rs::interface::{
    collect_inputs, display_history, display_progress, display_record, display_recommendations,
    prompt_yes_no, write_history_csv,
};
use ecotrack_rs::state::{clear_state, HistoryStore, JsonFileStore};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Calculate => cmd_calculate(&cli.data_dir),
        Command::History { full, limit } => cmd_history(&cli.data_dir, full, limit),
        Command::Progress => cmd_progress(&cli.data_dir),
        Command::Export { output } => cmd_export(&cli.data_dir, &output),
        Command::Reset { yes } => cmd_reset(&cli.data_dir, yes),
    }
}

/// Run a calculation, store it, and render results with recommendations.
fn cmd_calculate(data_dir: &str) -> Result<()> {
    let mut store = HistoryStore::open(JsonFileStore::new(data_dir))?;
    let config = EngineConfig::default();

    let inputs = collect_inputs()?;
    let record = derive_record(inputs, &config);
    let recommendations = build_recommendations(&record.inputs, &record.breakdown);

    store.add_calculation(record)?;

    if let Some(record) = store.latest() {
        display_record(record, config.global_average_tonnes);
        display_recommendations(&recommendations);
    }

    display_history(store.history(), Some(HISTORY_PREVIEW_LEN), false);

    Ok(())
}

/// List the stored history.
fn cmd_history(data_dir: &str, full: bool, limit: Option<usize>) -> Result<()> {
    let store = HistoryStore::open(JsonFileStore::new(data_dir))?;

    if store.is_empty() {
        println!("No calculations stored yet. Run your first calculation to start tracking progress.");
        return Ok(());
    }

    display_history(store.history(), limit, full);
    Ok(())
}

/// Show trend statistics once two calculations exist.
fn cmd_progress(data_dir: &str) -> Result<()> {
    let store = HistoryStore::open(JsonFileStore::new(data_dir))?;
    let config = EngineConfig::default();

    match summarize_progress(store.history()) {
        Some(summary) => {
            let series = build_series(store.history(), config.global_average_tonnes);
            display_progress(&summary, &series);
        }
        None => {
            println!(
                "Complete at least two calculations to unlock trend visualisations, \
                 Paris-aligned trajectories, and milestone tracking."
            );
        }
    }

    Ok(())
}

/// Export the history to CSV.
fn cmd_export(data_dir: &str, output: &str) -> Result<()> {
    let store = HistoryStore::open(JsonFileStore::new(data_dir))?;

    if store.is_empty() {
        println!("No calculations to export.");
        return Ok(());
    }

    write_history_csv(output, store.history())?;
    println!("Exported {} calculations to {}", store.len(), output);
    Ok(())
}

/// Clear the persisted history.
fn cmd_reset(data_dir: &str, yes: bool) -> Result<()> {
    let confirmed = yes || prompt_yes_no("Clear the entire calculation history?", false)?;

    if !confirmed {
        println!("Reset cancelled.");
        return Ok(());
    }

    let mut port = JsonFileStore::new(data_dir);
    clear_state(&mut port)?;
    println!("Calculation history cleared.");
    Ok(())
}
