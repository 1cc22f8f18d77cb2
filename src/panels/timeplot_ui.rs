//! egui_plot rendering of a running plot session.

use egui::{Align2, RichText, Ui};
use egui_plot::{Corner, HPlacement, Legend, Line, Plot, PlotBounds, PlotPoint, Text};

use crate::config::TimePlotConfig;
use crate::data::session::PlotSession;
use crate::data::x_formatter::{format_value, minute_grid, TimeAxisFormatter};
use crate::theme::ColorTheme;

/// Renders a [`PlotSession`]: lines, legend, title, current value and date.
pub struct TimePlotPanel {
    title: Option<String>,
    theme: ColorTheme,
    formatter: TimeAxisFormatter,
    value_precision: usize,
}

impl TimePlotPanel {
    pub fn new(cfg: &TimePlotConfig) -> Self {
        Self {
            title: cfg.title.clone(),
            theme: cfg.theme.clone(),
            formatter: TimeAxisFormatter::new(cfg.time_format.clone(), cfg.date_format.clone()),
            value_precision: cfg.value_precision,
        }
    }

    pub fn render(&self, ui: &mut Ui, session: &PlotSession) {
        // Reserve a row below the plot for the date readout.
        let date_row = ui.spacing().interact_size.y + 4.0;
        let plot_height = (ui.available_height() - date_row).max(50.0);

        let (x_min, x_max) = session.view_range().plot_bounds();
        let (y_min, y_max) = match session.y_bounds() {
            Some((lo, hi)) if hi > lo => (lo, hi),
            Some((lo, _)) => (lo - 1.0, lo + 1.0),
            None => (-1.0, 1.0),
        };

        let precision = self.value_precision;
        let x_fmt = self.formatter.clone();
        let mut plot = Plot::new("timeplot")
            .height(plot_height)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .y_axis_position(HPlacement::Right)
            .x_grid_spacer(minute_grid)
            .x_axis_formatter(move |mark, _range| x_fmt.format_tick(mark.value))
            .y_axis_formatter(move |mark, _range| format_value(mark.value, precision));
        if session.schema().has_legend() {
            plot = plot.legend(Legend::default().position(Corner::LeftBottom));
        }

        plot.show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max([x_min, y_min], [x_max, y_max]));

            for (idx, look) in session.schema().looks().iter().enumerate() {
                let name = if look.in_legend() {
                    look.label.clone().unwrap_or_default()
                } else {
                    String::new()
                };
                let line = Line::new(name, session.window().line_points(idx))
                    .color(look.color)
                    .width(look.width)
                    .style(look.style);
                plot_ui.line(line);
            }

            let x_span = x_max - x_min;
            let y_span = y_max - y_min;
            if let Some(title) = &self.title {
                let pos = PlotPoint::new(x_min + 0.02 * x_span, y_max - 0.055 * y_span);
                plot_ui.text(
                    Text::new("title", pos, RichText::new(title).color(self.theme.fg1))
                        .anchor(Align2::LEFT_TOP),
                );
            }

            // Current value of the first line, pinned to the right edge.
            if let Some(&y) = session.latest().and_then(|s| s.values.first()) {
                if y.is_finite() {
                    let label = RichText::new(format_value(y, precision))
                        .color(self.theme.fg1)
                        .background_color(self.theme.bg1);
                    plot_ui.text(
                        Text::new("value", PlotPoint::new(x_max, y), label)
                            .anchor(Align2::RIGHT_CENTER),
                    );
                }
            }
        });

        if let Some(latest) = session.latest() {
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new(self.formatter.format_date(latest.x())).color(self.theme.fg1),
                );
            });
        }
    }
}
