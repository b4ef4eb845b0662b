//! printab - Entry Point

use clap::Parser;
use printab::dataset::{Dataset, SearchParam};
use printab::model::{FacetFilter, TriState};
use std::path::PathBuf;
use tracing::info;

/// Compare 3D printer specifications in a terminal table
#[derive(Parser, Debug)]
#[command(name = "printab")]
#[command(version)]
#[command(about = "TUI comparison table for 3D printer specifications")]
pub struct Args {
    /// Path to a dataset JSON file (uses the bundled records if not provided)
    pub dataset: Option<PathBuf>,

    /// Start with a search query active (repeat the flag for multiple terms)
    #[arg(short, long)]
    pub search: Vec<String>,

    /// Print matching records as JSON and exit without starting the TUI
    #[arg(long)]
    pub list: bool,

    /// Keep only records sold as a DIY kit (true) or not sold as one (false)
    #[arg(long, value_name = "BOOL")]
    pub diy_kit: Option<bool>,

    /// Keep only records sold pre-built (true) or not sold pre-built (false)
    #[arg(long, value_name = "BOOL")]
    pub built_printer: Option<bool>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Set NO_COLOR env var if --no-color flag is passed
    // This ensures consistent color handling throughout the application
    if args.no_color {
        std::env::set_var("NO_COLOR", "1");
    }

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = printab::config::load_config_with_precedence(args.config.clone())?;
        let merged = printab::config::merge_config(config_file);
        let with_env = printab::config::apply_env_overrides(merged);
        printab::config::apply_cli_overrides(with_env, args.dataset.clone())
    };

    let dataset = match &config.dataset {
        Some(path) => Dataset::from_path(path)?,
        None => Dataset::bundled()?,
    };

    let search = SearchParam::from_args(&args.search);
    let facets = FacetFilter {
        diy_kit: TriState::from(args.diy_kit),
        built_printer: TriState::from(args.built_printer),
    };

    // --list prints the query result and exits without touching the
    // terminal or the log file
    if args.list {
        let matched = facets.apply(&dataset.query(search.as_ref()));
        println!("{}", printab::dataset::to_json(&matched)?);
        return Ok(());
    }

    printab::logging::init(&config.log_file_path)?;

    info!(
        dataset = dataset.name(),
        records = dataset.len(),
        "Dataset loaded"
    );

    let colors = printab::view::ColorConfig::from_env_and_args(args.no_color);

    let mut state = printab::state::AppState::new(dataset).with_facets(facets);
    if !args.search.is_empty() {
        state = state.with_search(args.search.join(" "));
    }

    printab::view::run(state, colors)?;

    Ok(())
}
