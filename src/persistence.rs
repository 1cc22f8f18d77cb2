//! Settings files: load and save plot configuration as JSON or YAML.
//!
//! [`TimePlotSettings`] is a serializable mirror of the non-GUI parts of
//! [`TimePlotConfig`]. Colors are written as names or hex codes and line
//! styles as `-`, `--` or `:`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::TimePlotConfig;
use crate::data::axis::UpdateStyle;
use crate::data::lines::{line_style_name, parse_line_style, LineOptions};
use crate::error::TimePlotError;
use crate::theme::{color_to_hex, parse_color, ColorTheme};

/// Serializable version of ColorTheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorThemeSerde {
    pub fg1: String,
    pub fg2: String,
    pub bg1: String,
    pub bg2: String,
}

impl From<&ColorTheme> for ColorThemeSerde {
    fn from(t: &ColorTheme) -> Self {
        Self {
            fg1: color_to_hex(t.fg1),
            fg2: color_to_hex(t.fg2),
            bg1: color_to_hex(t.bg1),
            bg2: color_to_hex(t.bg2),
        }
    }
}

impl ColorThemeSerde {
    pub fn into_theme(self) -> Result<ColorTheme, TimePlotError> {
        Ok(ColorTheme {
            fg1: parse_color(&self.fg1)?,
            fg2: parse_color(&self.fg2)?,
            bg1: parse_color(&self.bg1)?,
            bg2: parse_color(&self.bg2)?,
        })
    }
}

/// Serializable plot settings. Missing fields take the [`TimePlotConfig`] defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimePlotSettings {
    pub title: Option<String>,
    pub colors: Option<Vec<String>>,
    pub styles: Option<Vec<String>>,
    pub widths: Option<Vec<f32>>,
    pub labels: Option<Vec<String>>,
    pub period: f64,
    pub padding: f64,
    pub interval: u64,
    pub update_style: String,
    pub theme: ColorThemeSerde,
    pub time_format: String,
    pub date_format: String,
    pub value_precision: usize,
    pub y_margin: f64,
    pub window_title: String,
}

impl Default for TimePlotSettings {
    fn default() -> Self {
        (&TimePlotConfig::default()).into()
    }
}

impl From<&TimePlotConfig> for TimePlotSettings {
    fn from(c: &TimePlotConfig) -> Self {
        Self {
            title: c.title.clone(),
            colors: c
                .lines
                .colors
                .as_ref()
                .map(|v| v.iter().map(|&col| color_to_hex(col)).collect()),
            styles: c
                .lines
                .styles
                .as_ref()
                .map(|v| v.iter().map(|s| line_style_name(s).to_string()).collect()),
            widths: c.lines.widths.clone(),
            labels: c.lines.labels.clone(),
            period: c.period,
            padding: c.padding,
            interval: c.interval,
            update_style: c.update_style.to_string(),
            theme: (&c.theme).into(),
            time_format: c.time_format.clone(),
            date_format: c.date_format.clone(),
            value_precision: c.value_precision,
            y_margin: c.y_margin,
            window_title: c.window_title.clone(),
        }
    }
}

impl TimePlotSettings {
    /// Convert to a [`TimePlotConfig`], parsing colors, styles and the update style.
    pub fn into_config(self) -> Result<TimePlotConfig, TimePlotError> {
        let colors = self
            .colors
            .map(|v| v.iter().map(|s| parse_color(s)).collect::<Result<Vec<_>, _>>())
            .transpose()?;
        let styles = self
            .styles
            .map(|v| {
                v.iter()
                    .map(|s| parse_line_style(s))
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;
        let cfg = TimePlotConfig {
            lines: LineOptions {
                colors,
                styles,
                widths: self.widths,
                labels: self.labels,
            },
            title: self.title,
            period: self.period,
            padding: self.padding,
            interval: self.interval,
            update_style: self.update_style.parse::<UpdateStyle>()?,
            theme: self.theme.into_theme()?,
            time_format: self.time_format,
            date_format: self.date_format,
            value_precision: self.value_precision,
            y_margin: self.y_margin,
            window_title: self.window_title,
            native_options: None,
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

enum Format {
    Json,
    Yaml,
}

fn format_of(path: &Path) -> Result<Format, TimePlotError> {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("json") => Ok(Format::Json),
        Some("yaml") | Some("yml") => Ok(Format::Yaml),
        _ => Err(TimePlotError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Save settings to `path`; the extension selects JSON or YAML.
pub fn save_settings(path: &Path, settings: &TimePlotSettings) -> Result<(), TimePlotError> {
    let txt = match format_of(path)? {
        Format::Json => serde_json::to_string_pretty(settings)?,
        Format::Yaml => serde_yaml::to_string(settings)?,
    };
    std::fs::write(path, txt)?;
    Ok(())
}

/// Load settings from `path`; the extension selects JSON or YAML.
pub fn load_settings(path: &Path) -> Result<TimePlotSettings, TimePlotError> {
    let format = format_of(path)?;
    let txt = std::fs::read_to_string(path)?;
    let settings = match format {
        Format::Json => serde_json::from_str(&txt)?,
        Format::Yaml => serde_yaml::from_str(&txt)?,
    };
    log::debug!("loaded plot settings from {}", path.display());
    Ok(settings)
}

/// Load a settings file and convert it to a validated [`TimePlotConfig`].
pub fn load_config(path: &Path) -> Result<TimePlotConfig, TimePlotError> {
    load_settings(path)?.into_config()
}
