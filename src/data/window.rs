//! SeriesWindow: the sliding buffer of recent samples.

use std::collections::VecDeque;

use chrono::{NaiveDateTime, TimeDelta};

use crate::source::Sample;

/// Recent samples in arrival order.
///
/// After [`evict`](Self::evict) at most one buffered sample is older than
/// `now - period`. That boundary sample lets the first line segment enter the
/// plot from beyond the left edge.
#[derive(Debug, Default, Clone)]
pub struct SeriesWindow {
    samples: VecDeque<Sample>,
}

impl SeriesWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a sample to the tail. Samples are assumed to arrive in time order.
    pub fn append(&mut self, sample: Sample) {
        self.samples.push_back(sample);
    }

    /// Drop samples that are no longer needed to draw the window ending at `now`.
    ///
    /// The oldest sample is removed while the second-oldest is still older
    /// than `now - period`. Returns how many samples were removed. A cutoff
    /// before the start of the calendar removes nothing.
    pub fn evict(&mut self, now: NaiveDateTime, period: TimeDelta) -> usize {
        let Some(cutoff) = now.checked_sub_signed(period) else {
            return 0;
        };
        let mut removed = 0;
        while self.samples.len() >= 2 && self.samples[1].t < cutoff {
            self.samples.pop_front();
            removed += 1;
        }
        removed
    }

    pub fn latest(&self) -> Option<&Sample> {
        self.samples.back()
    }

    pub fn oldest(&self) -> Option<&Sample> {
        self.samples.front()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    /// Plot points `[x, y]` of line `index`. Samples without that value are skipped.
    pub fn line_points(&self, index: usize) -> Vec<[f64; 2]> {
        self.samples
            .iter()
            .filter_map(|s| s.values.get(index).map(|&y| [s.x(), y]))
            .collect()
    }

    /// Y range covering every finite buffered value, widened by `margin * span`
    /// on both sides.
    ///
    /// A flat series (zero span) is widened by `margin` around its value.
    /// Returns `None` while no finite value is buffered.
    pub fn value_bounds(&self, margin: f64) -> Option<(f64, f64)> {
        let mut min_y = f64::INFINITY;
        let mut max_y = f64::NEG_INFINITY;
        for v in self.samples.iter().flat_map(|s| s.values.iter()) {
            if !v.is_finite() {
                continue;
            }
            min_y = min_y.min(*v);
            max_y = max_y.max(*v);
        }
        if min_y > max_y {
            return None;
        }
        let span = max_y - min_y;
        let pad = if span > 0.0 { span * margin } else { margin };
        Some((min_y - pad, max_y + pad))
    }
}
