//! Sample types and the source trait the plot polls for new ticks.
//!
//! A source is polled once per frame interval on the UI thread. It returns one
//! [`Sample`]: a timestamp plus one value per plotted line. The number of
//! values is fixed by the first sample.
//!
//! Any `FnMut() -> Sample` closure is a source. Closures that can fail are
//! wrapped with [`fallible`]; their error ends the plot loop.

use chrono::{Local, NaiveDateTime};

use crate::error::TimePlotError;

/// One tick: a wall-clock timestamp and one value per line.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    pub t: NaiveDateTime,
    pub values: Vec<f64>,
}

impl Sample {
    pub fn new<V: Into<Vec<f64>>>(t: NaiveDateTime, values: V) -> Self {
        Self {
            t,
            values: values.into(),
        }
    }

    /// Stamp `values` with the current local time.
    pub fn now<V: Into<Vec<f64>>>(values: V) -> Self {
        Self::new(Local::now().naive_local(), values)
    }

    /// Number of lines this sample carries values for.
    #[inline]
    pub fn num_lines(&self) -> usize {
        self.values.len()
    }

    /// X coordinate of this sample on the plot (see [`to_plot_x`]).
    #[inline]
    pub fn x(&self) -> f64 {
        to_plot_x(self.t)
    }
}

impl From<(NaiveDateTime, f64)> for Sample {
    fn from((t, y): (NaiveDateTime, f64)) -> Self {
        Self::new(t, vec![y])
    }
}

impl From<(NaiveDateTime, Vec<f64>)> for Sample {
    fn from((t, values): (NaiveDateTime, Vec<f64>)) -> Self {
        Self::new(t, values)
    }
}

/// Convert a wall-clock timestamp to a plot X coordinate (seconds).
///
/// The naive value is read as if it were UTC, so [`from_plot_x`] gives the
/// same wall-clock value back regardless of the local timezone.
pub fn to_plot_x(t: NaiveDateTime) -> f64 {
    t.and_utc().timestamp_millis() as f64 / 1_000.0
}

/// Inverse of [`to_plot_x`], rounded to whole milliseconds.
pub fn from_plot_x(x: f64) -> Option<NaiveDateTime> {
    if !x.is_finite() {
        return None;
    }
    chrono::DateTime::from_timestamp_millis((x * 1_000.0).round() as i64).map(|dt| dt.naive_utc())
}

/// Something the plot can poll for ticks.
pub trait SampleSource {
    fn next_sample(&mut self) -> Result<Sample, TimePlotError>;
}

impl<F> SampleSource for F
where
    F: FnMut() -> Sample,
{
    fn next_sample(&mut self) -> Result<Sample, TimePlotError> {
        Ok(self())
    }
}

/// Adapter for closures returning `Result<Sample, E>`.
pub struct Fallible<F>(F);

/// Wrap a fallible closure so it can be used as a [`SampleSource`].
pub fn fallible<F, E>(f: F) -> Fallible<F>
where
    F: FnMut() -> Result<Sample, E>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    Fallible(f)
}

impl<F, E> SampleSource for Fallible<F>
where
    F: FnMut() -> Result<Sample, E>,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
{
    fn next_sample(&mut self) -> Result<Sample, TimePlotError> {
        (self.0)().map_err(|e| TimePlotError::Source(e.into()))
    }
}
