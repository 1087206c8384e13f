use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use tally::core::config::{CliOverrides, TallyConfig, load_config, resolve};

#[derive(Parser)]
#[command(name = "tally", about = "Keep a running tally of your expenses")]
struct Args {
    /// Ledger file to read and write (overrides config and TALLY_DATA_FILE)
    #[arg(short, long)]
    data_file: Option<PathBuf>,

    /// Keep expenses in memory only; nothing is written to disk
    #[arg(long, conflicts_with = "data_file")]
    ephemeral: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to tally.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("tally.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config = load_config().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {}", e);
        TallyConfig::default()
    });
    let overrides = CliOverrides {
        data_file: args.data_file,
        ephemeral: args.ephemeral,
    };
    let resolved = resolve(&config, &overrides);

    log::info!("Tally starting up with storage: {:?}", resolved.storage);

    tally::tui::run(resolved)
}
