//! Axis labels and grid marks for the time axis.
//!
//! X values are seconds as produced by [`to_plot_x`](crate::source::to_plot_x).
//! Major marks fall on whole minutes and are labeled with the time format;
//! minor marks fall on seconds 15, 30 and 45 and stay unlabeled.

use egui_plot::{GridInput, GridMark};

use crate::source::from_plot_x;

/// Spacing of major X marks, seconds.
pub const MAJOR_STEP_SECS: f64 = 60.0;
/// Spacing of minor X marks, seconds.
pub const MINOR_STEP_SECS: f64 = 15.0;

/// Formats X tick labels and the date readout below the axis.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeAxisFormatter {
    pub time_format: String,
    pub date_format: String,
}

impl Default for TimeAxisFormatter {
    fn default() -> Self {
        Self {
            time_format: "%H:%M".to_string(),
            date_format: "%d.%m.%Y".to_string(),
        }
    }
}

impl TimeAxisFormatter {
    pub fn new<S: Into<String>>(time_format: S, date_format: S) -> Self {
        Self {
            time_format: time_format.into(),
            date_format: date_format.into(),
        }
    }

    /// Label for an X mark. Only whole minutes get a label.
    pub fn format_tick(&self, x: f64) -> String {
        if !is_major(x) {
            return String::new();
        }
        from_plot_x(x)
            .map(|t| t.format(&self.time_format).to_string())
            .unwrap_or_default()
    }

    /// Date of `x` formatted with the date format.
    pub fn format_date(&self, x: f64) -> String {
        from_plot_x(x)
            .map(|t| t.format(&self.date_format).to_string())
            .unwrap_or_default()
    }
}

fn is_major(x: f64) -> bool {
    let r = x.rem_euclid(MAJOR_STEP_SECS);
    r < 1e-6 || MAJOR_STEP_SECS - r < 1e-6
}

/// Grid marks every 15 seconds inside `input.bounds`, with whole minutes
/// marked as major.
pub fn minute_grid(input: GridInput) -> Vec<GridMark> {
    let (lo, hi) = input.bounds;
    if !(lo.is_finite() && hi.is_finite()) || hi <= lo {
        return Vec::new();
    }
    let mut marks = Vec::new();
    let mut i = (lo / MINOR_STEP_SECS).ceil() as i64;
    loop {
        let value = i as f64 * MINOR_STEP_SECS;
        if value > hi {
            break;
        }
        let step_size = if is_major(value) {
            MAJOR_STEP_SECS
        } else {
            MINOR_STEP_SECS
        };
        marks.push(GridMark { value, step_size });
        i += 1;
    }
    marks
}

/// Fixed-point label for a Y value, e.g. `"1.50000"` for precision 5.
pub fn format_value(y: f64, precision: usize) -> String {
    format!("{:.*}", precision, y)
}
