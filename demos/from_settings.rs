//! Example: configuration from a settings file and a fallible source
//!
//! What it demonstrates
//! - Loading a YAML/JSON settings file with `persistence::load_config`.
//! - Wrapping a `Result`-returning closure with `fallible`; its error closes
//!   the window and is returned from `timeplot`.
//!
//! How to run
//! ```bash
//! cargo run --example from_settings -- demos/settings.yaml
//! ```

use std::path::PathBuf;

use timeplot::persistence::load_config;
use timeplot::{fallible, timeplot, Sample, TimePlotError};

fn main() -> Result<(), TimePlotError> {
    env_logger::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/demos/settings.yaml")));
    let cfg = load_config(&path)?;

    let start = std::time::Instant::now();
    let source = fallible(move || -> Result<Sample, String> {
        let secs = start.elapsed().as_secs_f64();
        if secs > 600.0 {
            return Err("demo feed ended after ten minutes".to_string());
        }
        let a = (secs * 0.2).sin();
        let b = (secs * 0.05).cos() * 0.5;
        Ok(Sample::now(vec![a, b]))
    });
    timeplot(source, cfg)
}
