//! SlidePage - present a text deck one slide at a time
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::{Path, PathBuf};

use clap::Parser;
use slidepage::app::config::{self, Settings};
use slidepage::app::{AppState, Deck};
use slidepage::core::logging;
use slidepage::CheckReport;
use tracing::{error, info};

/// SlidePage - present a text deck one slide at a time
#[derive(Parser, Debug)]
#[command(name = "slidepage")]
#[command(about = "A one-slide-at-a-time presenter for the terminal", long_about = None)]
struct Args {
    /// Deck file to present
    #[arg(value_name = "DECK")]
    deck: PathBuf,

    /// Regex matching the lines that separate slides
    #[arg(long, value_name = "REGEX")]
    selector: Option<String>,

    /// Animation duration in milliseconds
    #[arg(long, value_name = "MS")]
    duration: Option<u64>,

    /// Print a JSON report of the deck instead of presenting it
    #[arg(long)]
    check: bool,

    /// Write a default .slidepage/config.toml next to the deck and exit
    #[arg(long)]
    init_config: bool,
}

impl Args {
    fn apply_overrides(&self, settings: &mut Settings) {
        if let Some(selector) = &self.selector {
            settings.slides.selector = selector.clone();
        }
        if let Some(ms) = self.duration {
            settings.ui.animation_ms = ms;
        }
    }
}

fn main() -> color_eyre::Result<()> {
    let args = Args::parse();

    color_eyre::install()?;

    // Log to file, the TUI owns stdout
    logging::init()?;

    let deck_dir = deck_dir(&args.deck);
    if args.init_config {
        let path = config::init_config_dir(&deck_dir)?;
        eprintln!("Wrote {}", path.display());
        return Ok(());
    }

    info!("Deck: {}", args.deck.display());

    let deck = match Deck::open(&args.deck) {
        Ok(deck) => deck,
        Err(e) if e.is_fatal() => {
            error!("{}", e);
            eprintln!("❌ {}", e);
            eprintln!("   Pass the path of a text file, e.g. slidepage talk.md");
            std::process::exit(1);
        }
        Err(e) => return Err(e.into()),
    };
    let mut settings = config::load_settings(&deck_dir);
    args.apply_overrides(&mut settings);

    let state = AppState::new(deck, settings);

    if args.check {
        let report = CheckReport::from_state(&state);
        report.emit()?;
        if !report.is_ok() {
            std::process::exit(1);
        }
        return Ok(());
    }

    let result = slidepage::run(state);
    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }
    info!("SlidePage exiting");
    result?;
    Ok(())
}

/// Directory whose `.slidepage/config.toml` applies to the deck
fn deck_dir(deck: &Path) -> PathBuf {
    match deck.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
