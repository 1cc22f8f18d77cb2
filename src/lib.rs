//! timeplot crate root: re-exports and module wiring.
//!
//! A realtime plot for time series. [`timeplot()`] polls a [`SampleSource`]
//! for ticks `(t, y1, ..., yn)` and draws the last `period` seconds of every
//! line in a scrolling egui/eframe window.
//!
//! - `source`: sample type and the source trait
//! - `data`: sliding window, axis advance policy, line schema and session state
//! - `config`: code-first configuration
//! - `persistence`: JSON/YAML settings files
//! - `panels`, `app`: egui rendering and the native window loop

pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod panels;
pub mod persistence;
pub mod source;
pub mod theme;

pub use app::{timeplot, TimePlotApp};
pub use config::TimePlotConfig;
pub use data::axis::{UpdateStyle, ViewRange};
pub use data::lines::{LineLook, LineOptions, LineSchema};
pub use data::session::{PlotSession, TickUpdate};
pub use data::window::SeriesWindow;
pub use error::TimePlotError;
pub use source::{fallible, Sample, SampleSource};
pub use theme::ColorTheme;

pub use egui::Color32;
pub use egui_plot::LineStyle;
