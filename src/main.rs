//! carepoint-preview: render every screen in both modes and print a summary

use std::path::PathBuf;

use anyhow::{Context, Result};
use carepoint::{load_theme_config, run_preview};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = load_theme_config(config_path.as_deref())
        .with_context(|| format!("loading {:?}", config_path))?;

    let report = run_preview(&config);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
