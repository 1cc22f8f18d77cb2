//! Standalone application wrapper.
//!
//! [`TimePlotApp`] owns the sample source and the [`PlotSession`] and
//! implements [`eframe::App`]. Every frame it polls the source if the polling
//! interval has elapsed, feeds the sample to the session and redraws.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use eframe::egui;

use crate::config::TimePlotConfig;
use crate::data::session::{PlotSession, TickUpdate};
use crate::error::TimePlotError;
use crate::panels::TimePlotPanel;
use crate::source::SampleSource;
use crate::theme::ColorTheme;

/// Slot the app writes a fatal loop error into so the caller can report it
/// once the window has closed.
pub type ErrorSlot = Rc<RefCell<Option<TimePlotError>>>;

pub struct TimePlotApp<S: SampleSource> {
    source: S,
    session: PlotSession,
    panel: TimePlotPanel,
    theme: ColorTheme,
    interval: Duration,
    last_poll: Instant,
    theme_applied: bool,
    failed: bool,
    error: ErrorSlot,
}

impl<S: SampleSource> TimePlotApp<S> {
    /// Create the app from an already initialized session.
    pub fn new(source: S, session: PlotSession, cfg: &TimePlotConfig, error: ErrorSlot) -> Self {
        Self {
            source,
            session,
            panel: TimePlotPanel::new(cfg),
            theme: cfg.theme.clone(),
            interval: cfg.interval_duration(),
            last_poll: Instant::now(),
            theme_applied: false,
            failed: false,
            error,
        }
    }

    pub fn session(&self) -> &PlotSession {
        &self.session
    }

    /// Poll the source once and feed the sample to the session.
    pub fn poll(&mut self) -> Result<TickUpdate, TimePlotError> {
        let sample = self.source.next_sample()?;
        self.session.on_tick(sample)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// eframe integration
// ─────────────────────────────────────────────────────────────────────────────

impl<S: SampleSource> eframe::App for TimePlotApp<S> {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            self.theme.apply(ctx);
            self.theme_applied = true;
        }

        if !self.failed && self.last_poll.elapsed() >= self.interval {
            self.last_poll = Instant::now();
            if let Err(e) = self.poll() {
                log::error!("stopping plot: {e}");
                self.failed = true;
                *self.error.borrow_mut() = Some(e);
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.panel.render(ui, &self.session);
        });

        if !self.failed {
            ctx.request_repaint_after(self.interval);
        }
    }
}
