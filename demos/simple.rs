//! Example: a single line with the default settings
//!
//! What it demonstrates
//! - Passing a plain closure as the sample source.
//! - Simulated timestamps one second apart and continuous scrolling.
//!
//! How to run
//! ```bash
//! cargo run --example simple
//! ```

use chrono::{DateTime, TimeDelta};
use timeplot::{timeplot, Sample, TimePlotConfig, TimePlotError, UpdateStyle};

fn main() -> Result<(), TimePlotError> {
    env_logger::init();

    let mut t = DateTime::from_timestamp(1_521_482_712, 0)
        .map(|dt| dt.naive_utc())
        .unwrap_or_default();
    let mut i = 0.0_f64;
    let source = move || {
        t += TimeDelta::seconds(1);
        i += 0.1;
        Sample::new(t, vec![i.sin()])
    };

    let cfg = TimePlotConfig::default()
        .with_interval(40)
        .with_update_style(UpdateStyle::Continuous);
    timeplot(source, cfg)
}
