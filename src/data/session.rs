//! PlotSession: the per-plot state mutated once per tick.

use chrono::TimeDelta;

use crate::config::TimePlotConfig;
use crate::data::axis::{UpdateStyle, ViewRange};
use crate::data::lines::LineSchema;
use crate::data::window::SeriesWindow;
use crate::error::TimePlotError;
use crate::source::Sample;

/// What a tick changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickUpdate {
    /// Samples dropped from the window.
    pub evicted: usize,
    /// Whether the visible range moved.
    pub view_advanced: bool,
}

/// State of one running plot: the sample window, the visible range and the
/// line schema.
///
/// Created once from the first sample, then fed every later sample through
/// [`on_tick`](Self::on_tick).
#[derive(Debug, Clone)]
pub struct PlotSession {
    window: SeriesWindow,
    view: ViewRange,
    schema: LineSchema,
    period: TimeDelta,
    padding: TimeDelta,
    update_style: UpdateStyle,
    y_margin: f64,
}

impl PlotSession {
    /// Set up the session from the first sample and process it as the first tick.
    pub fn new(first: Sample, cfg: &TimePlotConfig) -> Result<Self, TimePlotError> {
        cfg.validate()?;
        let schema = LineSchema::infer(&first, &cfg.lines, cfg.theme.fg1)?;
        let period = cfg.period_delta();
        let padding = cfg.padding_delta();
        log::debug!(
            "plot session: {} line(s), period {}s, padding {}s, {} updates",
            schema.num_lines(),
            cfg.period,
            cfg.padding,
            cfg.update_style
        );
        let mut session = Self {
            window: SeriesWindow::new(),
            view: ViewRange::starting_at(first.t, period, padding)?,
            schema,
            period,
            padding,
            update_style: cfg.update_style,
            y_margin: cfg.y_margin,
        };
        session.on_tick(first)?;
        Ok(session)
    }

    /// Append `sample`, evict stale samples and move the view if needed.
    pub fn on_tick(&mut self, sample: Sample) -> Result<TickUpdate, TimePlotError> {
        self.schema.check(&sample)?;
        let now = sample.t;
        self.window.append(sample);
        let evicted = self.window.evict(now, self.period);
        let view_advanced = self
            .view
            .advance(now, self.period, self.padding, self.update_style)?;
        if view_advanced {
            log::debug!(
                "view advanced to {} .. {}",
                self.view.xmin,
                self.view.xmax
            );
        }
        Ok(TickUpdate {
            evicted,
            view_advanced,
        })
    }

    pub fn window(&self) -> &SeriesWindow {
        &self.window
    }

    pub fn view_range(&self) -> ViewRange {
        self.view
    }

    pub fn schema(&self) -> &LineSchema {
        &self.schema
    }

    pub fn latest(&self) -> Option<&Sample> {
        self.window.latest()
    }

    /// Y range to display, `None` until a finite value has been seen.
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        self.window.value_bounds(self.y_margin)
    }
}
