//! Axis domains and linear mapping.

use std::fmt;

/// Smallest domain span a manual drag may produce.
pub const MIN_SPAN: f64 = 1e-9;

/// Plot axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// Data-space interval mapped onto a pixel axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Domain {
    pub min: f64,
    pub max: f64,
}

impl Default for Domain {
    fn default() -> Self {
        Self { min: 0.0, max: 1.0 }
    }
}

impl Domain {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Signed span `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Both bounds finite, `min` below `max`, and at least [`MIN_SPAN`] apart.
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.span() >= MIN_SPAN
    }

    /// Shift both bounds by `delta`.
    pub fn shifted(&self, delta: f64) -> Self {
        Self::new(self.min + delta, self.max + delta)
    }

    /// Grow (or shrink, for negative `delta`) the domain symmetrically.
    pub fn widened(&self, delta: f64) -> Self {
        Self::new(self.min - delta, self.max + delta)
    }

    /// Map a data value onto `[r0, r1]`.
    ///
    /// A zero-span domain maps everything onto the middle of the range.
    pub fn map(&self, value: f64, r0: f64, r1: f64) -> f64 {
        let span = self.span();
        if span == 0.0 {
            return (r0 + r1) * 0.5;
        }
        r0 + (value - self.min) / span * (r1 - r0)
    }

    /// Inverse of [`Domain::map`].
    pub fn invert(&self, pixel: f64, r0: f64, r1: f64) -> f64 {
        let range = r1 - r0;
        if range == 0.0 || self.span() == 0.0 {
            return self.min;
        }
        self.min + (pixel - r0) / range * self.span()
    }
}
