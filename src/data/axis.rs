//! Visible time range and the policy that scrolls it.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, TimeDelta};

use crate::error::TimePlotError;
use crate::source::to_plot_x;

/// Seconds the view moves per step under [`UpdateStyle::Jump`].
pub const JUMP_STEP_SECS: i64 = 60;

/// How the visible window follows new ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum UpdateStyle {
    /// Move the window one minute at a time once the newest tick gets within
    /// `padding` of the right edge.
    #[default]
    Jump,
    /// Re-anchor the window on every tick that reaches the padding zone.
    Continuous,
    /// Never move the window.
    Frozen,
}

impl UpdateStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdateStyle::Jump => "jump",
            UpdateStyle::Continuous => "cont",
            UpdateStyle::Frozen => "frozen",
        }
    }
}

impl fmt::Display for UpdateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UpdateStyle {
    type Err = TimePlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "jump" => Ok(UpdateStyle::Jump),
            "cont" | "continuous" => Ok(UpdateStyle::Continuous),
            "frozen" | "none" => Ok(UpdateStyle::Frozen),
            _ => Err(TimePlotError::UnknownUpdateStyle(s.to_string())),
        }
    }
}

/// The visible time interval `[xmin, xmax)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewRange {
    pub xmin: NaiveDateTime,
    pub xmax: NaiveDateTime,
}

impl ViewRange {
    /// Initial range for a plot whose first tick is at `t0`.
    pub fn starting_at(
        t0: NaiveDateTime,
        period: TimeDelta,
        padding: TimeDelta,
    ) -> Result<Self, TimePlotError> {
        let xmax = shift(t0, period)
            .and_then(|t| shift(t, padding))
            .ok_or(TimePlotError::TimeOverflow(t0))?;
        Ok(Self { xmin: t0, xmax })
    }

    pub fn width(&self) -> TimeDelta {
        self.xmax - self.xmin
    }

    /// `(xmin, xmax)` as plot X coordinates.
    pub fn plot_bounds(&self) -> (f64, f64) {
        (to_plot_x(self.xmin), to_plot_x(self.xmax))
    }

    /// Move the range for a tick at `t`. Returns `true` if the range changed.
    ///
    /// Nothing happens unless `xmax < t + padding`. The range is left as it
    /// was if the new bounds fall outside the calendar.
    pub fn advance(
        &mut self,
        t: NaiveDateTime,
        period: TimeDelta,
        padding: TimeDelta,
        style: UpdateStyle,
    ) -> Result<bool, TimePlotError> {
        let overflow = || TimePlotError::TimeOverflow(t);
        let edge = shift(t, padding).ok_or_else(overflow)?;
        if self.xmax >= edge {
            return Ok(false);
        }
        match style {
            UpdateStyle::Jump => {
                let step = TimeDelta::seconds(JUMP_STEP_SECS);
                let xmin = shift(self.xmin, step).ok_or_else(overflow)?;
                let xmax = shift(self.xmax, step).ok_or_else(overflow)?;
                *self = Self { xmin, xmax };
                Ok(true)
            }
            UpdateStyle::Continuous => {
                let xmin = shift(t, -period).ok_or_else(overflow)?;
                *self = Self { xmin, xmax: edge };
                Ok(true)
            }
            UpdateStyle::Frozen => Ok(false),
        }
    }
}

fn shift(t: NaiveDateTime, by: TimeDelta) -> Option<NaiveDateTime> {
    t.checked_add_signed(by)
}
