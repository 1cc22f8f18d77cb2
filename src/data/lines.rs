//! Line schema: how many lines a plot has and how each one looks.
//!
//! The schema is inferred once from the first sample and stays fixed for the
//! lifetime of a [`PlotSession`](crate::data::session::PlotSession).

use egui::Color32;
use egui_plot::LineStyle;

use crate::error::TimePlotError;
use crate::source::Sample;

/// Visual presentation of one line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineLook {
    pub color: Color32,
    pub style: LineStyle,
    pub width: f32,
    /// Legend label. `None` or an empty string means no legend entry.
    pub label: Option<String>,
}

impl LineLook {
    /// True if the line should appear in the legend.
    pub fn in_legend(&self) -> bool {
        self.label.as_deref().is_some_and(|l| !l.is_empty())
    }
}

/// Per-line appearance supplied by the caller.
///
/// Every list is optional; a list that is given must have one entry per line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineOptions {
    pub colors: Option<Vec<Color32>>,
    pub styles: Option<Vec<LineStyle>>,
    pub widths: Option<Vec<f32>>,
    pub labels: Option<Vec<String>>,
}

impl LineOptions {
    pub fn with_colors<I: IntoIterator<Item = Color32>>(mut self, colors: I) -> Self {
        self.colors = Some(colors.into_iter().collect());
        self
    }

    pub fn with_styles<I: IntoIterator<Item = LineStyle>>(mut self, styles: I) -> Self {
        self.styles = Some(styles.into_iter().collect());
        self
    }

    pub fn with_widths<I: IntoIterator<Item = f32>>(mut self, widths: I) -> Self {
        self.widths = Some(widths.into_iter().collect());
        self
    }

    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }
}

/// Fixed set of lines for one plot session.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSchema {
    looks: Vec<LineLook>,
    legend: bool,
}

impl LineSchema {
    /// Infer the schema from the first sample.
    ///
    /// Missing lists default to `default_color`, solid lines and width 1.0.
    /// A given list whose length differs from the number of values in `first`
    /// is rejected.
    pub fn infer(
        first: &Sample,
        opts: &LineOptions,
        default_color: Color32,
    ) -> Result<Self, TimePlotError> {
        let n = first.num_lines();
        if n == 0 {
            return Err(TimePlotError::EmptySample);
        }

        let colors = fill_or_check("colors", opts.colors.as_ref(), n, default_color)?;
        let styles = fill_or_check("styles", opts.styles.as_ref(), n, LineStyle::Solid)?;
        let widths = fill_or_check("widths", opts.widths.as_ref(), n, 1.0_f32)?;
        let labels: Vec<Option<String>> = match &opts.labels {
            Some(l) => {
                check_len("labels", l.len(), n)?;
                l.iter().cloned().map(Some).collect()
            }
            None => vec![None; n],
        };

        let looks = colors
            .into_iter()
            .zip(styles)
            .zip(widths)
            .zip(labels)
            .map(|(((color, style), width), label)| LineLook {
                color,
                style,
                width,
                label,
            })
            .collect();

        Ok(Self {
            looks,
            legend: opts.labels.is_some(),
        })
    }

    pub fn num_lines(&self) -> usize {
        self.looks.len()
    }

    pub fn looks(&self) -> &[LineLook] {
        &self.looks
    }

    /// Whether a legend should be drawn (labels were supplied).
    pub fn has_legend(&self) -> bool {
        self.legend
    }

    /// Reject samples whose arity differs from the schema.
    pub fn check(&self, sample: &Sample) -> Result<(), TimePlotError> {
        if sample.num_lines() != self.num_lines() {
            return Err(TimePlotError::ArityChanged {
                expected: self.num_lines(),
                found: sample.num_lines(),
            });
        }
        Ok(())
    }
}

fn check_len(field: &'static str, found: usize, expected: usize) -> Result<(), TimePlotError> {
    if found != expected {
        return Err(TimePlotError::LineCountMismatch {
            field,
            expected,
            found,
        });
    }
    Ok(())
}

fn fill_or_check<T: Clone>(
    field: &'static str,
    given: Option<&Vec<T>>,
    n: usize,
    default: T,
) -> Result<Vec<T>, TimePlotError> {
    match given {
        Some(v) => {
            check_len(field, v.len(), n)?;
            Ok(v.clone())
        }
        None => Ok(vec![default; n]),
    }
}

/// Parse a line style: `-`/`solid`, `--`/`dashed`, `:`/`dotted`.
pub fn parse_line_style(s: &str) -> Result<LineStyle, TimePlotError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "-" | "solid" => Ok(LineStyle::Solid),
        "--" | "dashed" => Ok(LineStyle::Dashed { length: 6.0 }),
        ":" | "dotted" => Ok(LineStyle::Dotted { spacing: 4.0 }),
        _ => Err(TimePlotError::UnknownLineStyle(s.to_string())),
    }
}

/// Inverse of [`parse_line_style`].
pub fn line_style_name(style: &LineStyle) -> &'static str {
    match style {
        LineStyle::Solid => "-",
        LineStyle::Dashed { .. } => "--",
        LineStyle::Dotted { .. } => ":",
    }
}
