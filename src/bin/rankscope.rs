//! rankscope - interactive country-ranking dashboard.
//!
//! Usage:
//!   rankscope                    # dashboard over ./data, top-10 mode
//!   rankscope -d /path/to/data   # custom data directory
//!   rankscope -c Portugal        # start in country mode around Portugal
//!
//! The data directory must contain `data.csv` and `metadata.csv`; an
//! optional `countries.csv` supplies the picker options. `RUST_LOG`
//! controls log verbosity (logs go to stderr).

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use rankscope::data::Dataset;
use rankscope::tui::{App, Mode};

/// Redraw tick; also paces the expiry of transient status messages.
const TICK_RATE: Duration = Duration::from_millis(250);

/// Interactive country-ranking dashboard.
#[derive(Parser)]
#[command(name = "rankscope", about = "Country ranking dashboard")]
struct Args {
    /// Directory containing data.csv, metadata.csv and optionally
    /// countries.csv.
    #[arg(short = 'd', long = "data", value_name = "DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Start in country mode with this country selected.
    #[arg(short = 'c', long = "country", value_name = "COUNTRY")]
    country: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let dataset = match Dataset::load(&args.data_dir) {
        Ok(dataset) => dataset,
        Err(e) => {
            eprintln!(
                "Error loading data from '{}': {}",
                args.data_dir.display(),
                e
            );
            std::process::exit(1);
        }
    };

    let mode = if args.country.is_some() {
        Mode::Country
    } else {
        Mode::TopTen
    };
    let app = App::new(dataset, mode, args.country);

    if let Err(e) = app.run(TICK_RATE) {
        eprintln!("Error running TUI: {}", e);
        std::process::exit(1);
    }
}
