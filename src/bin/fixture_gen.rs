use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use sigvault::builder;
use sigvault::FixtureConfig;

/// Output artifact written into the working directory.
const OUTPUT_FILE: &str = "demo_recordings.json";

fn main() -> ExitCode {
    tracing_subscriber::fmt().init();
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:?}");
            ExitCode::from(1)
        }
    }
}

fn run() -> Result<()> {
    let config = FixtureConfig::default();
    tracing::info!("generating demonstration container");
    builder::write_fixture(Path::new(OUTPUT_FILE), &config)
        .with_context(|| format!("generating {}", OUTPUT_FILE))?;
    println!("wrote {}", OUTPUT_FILE);
    Ok(())
}
