//! `RouteDelta` — one segment of straight-line motion over a positive duration.

/// A relative motion segment: shift by `(x_shift, y_shift)` over
/// `time_shift` seconds of simulated time, at constant velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteDelta {
    pub x_shift: f64,
    pub y_shift: f64,
    pub time_shift: f64,
}

impl RouteDelta {
    pub fn new(x_shift: f64, y_shift: f64, time_shift: f64) -> Self {
        Self { x_shift, y_shift, time_shift }
    }

    /// `true` when `time_shift` is positive, as every scheduled delta must be.
    pub fn is_valid(&self) -> bool {
        self.time_shift > 0.0
    }
}
