//! Example: several lines with custom colors, widths and labels
//!
//! What it demonstrates
//! - A random walk plus its one-minute moving average and +/- 2 std. dev. bands.
//! - Lines without values yet (NaN) during the first minute.
//! - A blocking source: the sleep between ticks stalls the UI loop on purpose.
//!
//! How to run
//! ```bash
//! cargo run --example multiple_lines
//! ```

use std::collections::VecDeque;
use std::time::Duration;

use rand::Rng;
use timeplot::{timeplot, Color32, LineOptions, Sample, TimePlotConfig, TimePlotError};

struct SimpleTimeSeries {
    y: f64,
    history: VecDeque<f64>,
    max_len: usize,
}

impl SimpleTimeSeries {
    fn new() -> Self {
        Self {
            y: 0.0,
            history: VecDeque::new(),
            max_len: 60,
        }
    }

    /// 1-minute SMA and Bollinger bands; NaN until a minute of history exists.
    fn indicators(&mut self, y: f64) -> [f64; 4] {
        self.history.push_back(y);
        if self.history.len() > self.max_len {
            self.history.pop_front();
        }
        if self.history.len() < self.max_len {
            return [y, f64::NAN, f64::NAN, f64::NAN];
        }
        let n = self.history.len() as f64;
        let sma = self.history.iter().sum::<f64>() / n;
        let var = self.history.iter().map(|v| (v - sma).powi(2)).sum::<f64>() / n;
        let sd = var.sqrt();
        [y, sma, sma + 2.0 * sd, sma - 2.0 * sd]
    }

    fn get_tick(&mut self) -> Sample {
        let mut rng = rand::thread_rng();
        std::thread::sleep(Duration::from_secs_f64(rng.gen::<f64>()));
        // Sum of uniforms as a cheap stand-in for a normal step.
        let step: f64 = (0..12).map(|_| rng.gen::<f64>()).sum::<f64>() - 6.0;
        self.y += step;
        let values = self.indicators(self.y);
        Sample::now(values.to_vec())
    }
}

fn main() -> Result<(), TimePlotError> {
    env_logger::init();

    let light_blue = Color32::from_rgb(173, 216, 230);
    let lines = LineOptions::default()
        .with_colors([
            Color32::from_rgb(0, 0, 139),
            Color32::from_rgb(255, 165, 0),
            light_blue,
            light_blue,
        ])
        .with_widths([1.0, 0.8, 0.4, 0.4])
        .with_labels([
            "SimpleTimeSeries",
            "Moving average (1 minute)",
            "Moving average +/- 2 std. dev. (1 minute)",
            "",
        ]);

    let mut ts = SimpleTimeSeries::new();
    let cfg = TimePlotConfig::default()
        .with_lines(lines)
        .with_title("SimpleTimeSeries");
    timeplot(move || ts.get_tick(), cfg)
}
