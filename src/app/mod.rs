//! Native window application.
//!
//! | Sub-module        | Responsibility |
//! | ----------------- | -------------- |
//! | [`timeplot_app`]  | [`TimePlotApp`] (eframe) polling the source and drawing the session |
//! | [`run`]           | Top-level [`timeplot()`] entry point |

mod run;
mod timeplot_app;

pub use run::timeplot;
pub use timeplot_app::{ErrorSlot, TimePlotApp};
