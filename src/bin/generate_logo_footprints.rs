//! Writes the TrailCurrent logo footprints into the KiCad library.
//!
//! The library root comes from `TRAILCURRENT_FOOTPRINT_DIR` when set.
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::process::ExitCode;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use logo_footprint::config::{GeneratorConfig, OutputConfig};
use logo_footprint::footprint::{write_library, RandomUuids};
use logo_footprint::logo::Artwork;

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let output = OutputConfig::from_env();
    match write_library(
        &Artwork::default(),
        &GeneratorConfig::default(),
        &output,
        &mut RandomUuids,
    ) {
        Ok((_, icon)) => {
            info!(
                mountain_segments = icon.mountain_segments.len(),
                trail_vertices = icon.trail_polygon.len(),
                lightning_vertices = icon.lightning_polygon.len(),
                "icon summary"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
