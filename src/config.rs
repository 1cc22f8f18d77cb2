//! Configuration for a time plot.

use chrono::TimeDelta;

use crate::data::axis::UpdateStyle;
use crate::data::lines::LineOptions;
use crate::error::TimePlotError;
use crate::theme::ColorTheme;

/// Upper bound for `period` and `padding`: one hundred years, in seconds.
pub const MAX_RANGE_SECS: f64 = 100.0 * 365.25 * 86_400.0;

// ─────────────────────────────────────────────────────────────────────────────
// TimePlotConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for [`timeplot`](crate::timeplot).
///
/// | Field            | Purpose |
/// |------------------|---------|
/// | `lines`          | Per-line colors, styles, widths and legend labels |
/// | `period`         | Visible time range in seconds |
/// | `padding`        | Seconds kept free at the right edge |
/// | `interval`       | Polling interval in milliseconds |
/// | `update_style`   | How the visible range scrolls |
/// | `theme`          | Window and plot colors |
pub struct TimePlotConfig {
    // ── Lines ────────────────────────────────────────────────────────────────
    /// Per-line appearance. Lists left as `None` fall back to defaults.
    pub lines: LineOptions,
    /// Title shown in the upper left corner of the plot.
    pub title: Option<String>,

    // ── Time window ──────────────────────────────────────────────────────────
    /// Length of the visible time range in seconds. Default: `300.0`.
    pub period: f64,
    /// Minimal distance (seconds) of the newest point to the right border. Default: `15.0`.
    pub padding: f64,
    /// Polling interval in milliseconds. Default: `10`.
    pub interval: u64,
    /// Scroll policy. Default: [`UpdateStyle::Jump`].
    pub update_style: UpdateStyle,

    // ── Appearance ───────────────────────────────────────────────────────────
    pub theme: ColorTheme,
    /// strftime format of the X-axis tick labels. Default: `"%H:%M"`.
    pub time_format: String,
    /// strftime format of the date shown below the X axis. Default: `"%d.%m.%Y"`.
    pub date_format: String,
    /// Decimals of Y tick labels and of the current value box. Default: `5`.
    pub value_precision: usize,
    /// Fraction of the data span added above and below the data. Default: `0.8`.
    pub y_margin: f64,

    // ── Window ───────────────────────────────────────────────────────────────
    /// Native window title.
    pub window_title: String,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Clone for TimePlotConfig {
    fn clone(&self) -> Self {
        Self {
            lines: self.lines.clone(),
            title: self.title.clone(),
            period: self.period,
            padding: self.padding,
            interval: self.interval,
            update_style: self.update_style,
            theme: self.theme.clone(),
            time_format: self.time_format.clone(),
            date_format: self.date_format.clone(),
            value_precision: self.value_precision,
            y_margin: self.y_margin,
            window_title: self.window_title.clone(),
            native_options: self.native_options.clone(),
        }
    }
}

impl Default for TimePlotConfig {
    fn default() -> Self {
        Self {
            lines: LineOptions::default(),
            title: None,

            period: 300.0,
            padding: 15.0,
            interval: 10,
            update_style: UpdateStyle::Jump,

            theme: ColorTheme::default(),
            time_format: "%H:%M".to_string(),
            date_format: "%d.%m.%Y".to_string(),
            value_precision: 5,
            y_margin: 0.8,

            window_title: "timeplot".to_string(),
            native_options: None,
        }
    }
}

impl TimePlotConfig {
    /// `period` as a [`TimeDelta`] (millisecond precision).
    pub fn period_delta(&self) -> TimeDelta {
        secs_to_delta(self.period)
    }

    /// `padding` as a [`TimeDelta`] (millisecond precision).
    pub fn padding_delta(&self) -> TimeDelta {
        secs_to_delta(self.padding)
    }

    pub fn interval_duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.interval)
    }

    /// Check the numeric settings. Line lists are checked against the first sample.
    pub fn validate(&self) -> Result<(), TimePlotError> {
        if !self.period.is_finite() || self.period <= 0.0 || self.period > MAX_RANGE_SECS {
            return Err(TimePlotError::InvalidPeriod(self.period));
        }
        if !self.padding.is_finite() || self.padding < 0.0 || self.padding > MAX_RANGE_SECS {
            return Err(TimePlotError::InvalidPeriod(self.padding));
        }
        Ok(())
    }

    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_lines(mut self, lines: LineOptions) -> Self {
        self.lines = lines;
        self
    }

    pub fn with_period(mut self, secs: f64) -> Self {
        self.period = secs;
        self
    }

    pub fn with_interval(mut self, millis: u64) -> Self {
        self.interval = millis;
        self
    }

    pub fn with_update_style(mut self, style: UpdateStyle) -> Self {
        self.update_style = style;
        self
    }
}

fn secs_to_delta(secs: f64) -> TimeDelta {
    TimeDelta::milliseconds((secs * 1_000.0).round() as i64)
}
