//! Top-level entry point for running a time plot in a native window.

use std::cell::RefCell;
use std::rc::Rc;

use eframe::egui;

use crate::config::TimePlotConfig;
use crate::data::session::PlotSession;
use crate::error::TimePlotError;
use crate::source::SampleSource;

use super::timeplot_app::{ErrorSlot, TimePlotApp};

/// Plot `source` in a native window until the window is closed.
///
/// This:
///
/// 1. Polls one sample to learn how many lines there are.
/// 2. Builds a [`PlotSession`], validating `cfg` against that sample. Any
///    configuration error is returned here, before a window opens.
/// 3. Opens a native window and enters the eframe event loop, polling the
///    source every `cfg.interval` milliseconds.
///
/// If the source fails while the window is open, the window is closed and the
/// source's error is returned.
pub fn timeplot<S>(mut source: S, mut cfg: TimePlotConfig) -> Result<(), TimePlotError>
where
    S: SampleSource + 'static,
{
    let first = source.next_sample()?;
    let session = PlotSession::new(first, &cfg)?;

    let error: ErrorSlot = Rc::new(RefCell::new(None));
    let app = TimePlotApp::new(source, session, &cfg, error.clone());

    let title = cfg.window_title.clone();
    let mut opts = cfg
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(900.0, 560.0));
    }

    log::info!("opening plot window '{title}'");
    eframe::run_native(&title, opts, Box::new(|_cc| Ok(Box::new(app))))?;
    log::info!("plot window closed");

    let failure = error.borrow_mut().take();
    match failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
