//! Points and datasets: the data-space side of the plot.
//!
//! Input files are JSON arrays of `{"X": number, "Y": number}` objects. The
//! capitalised field names only exist on the wire; internally points use
//! lowercase `x`/`y`.

use serde::Deserialize;

use crate::data::domain::Domain;
use crate::error::{Result, ScatterError};

/// A point in data space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another data point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

/// A point in plot-area pixel space. `(0, 0)` is the top-left corner of the
/// plot area, y grows downwards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelPoint {
    pub x: f32,
    pub y: f32,
}

impl PixelPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &PixelPoint) -> f32 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

/// Wire representation of a single input record.
#[derive(Debug, Deserialize)]
struct RawPoint {
    #[serde(rename = "X")]
    x: f64,
    #[serde(rename = "Y")]
    y: f64,
}

impl From<RawPoint> for Point {
    fn from(raw: RawPoint) -> Self {
        Point::new(raw.x, raw.y)
    }
}

/// Ordered collection of plotted points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    points: Vec<Point>,
}

impl Dataset {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Parse the `[{"X": .., "Y": ..}, ..]` input format.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let raw: Vec<RawPoint> = serde_json::from_str(text)?;
        let points: Vec<Point> = raw.into_iter().map(Point::from).collect();
        if let Some(bad) = points
            .iter()
            .position(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(ScatterError::malformed(format!(
                "record {bad} has a non-finite coordinate"
            )));
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Load-time domains for both axes: `[min, max + padding]`.
    ///
    /// Returns `None` for an empty dataset.
    pub fn padded_extent(&self, padding: f64) -> Option<(Domain, Domain)> {
        let first = self.points.first()?;
        let (mut x_min, mut x_max) = (first.x, first.x);
        let (mut y_min, mut y_max) = (first.y, first.y);
        for p in &self.points[1..] {
            x_min = x_min.min(p.x);
            x_max = x_max.max(p.x);
            y_min = y_min.min(p.y);
            y_max = y_max.max(p.y);
        }
        Some((
            Domain::new(x_min, x_max + padding),
            Domain::new(y_min, y_max + padding),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_capitalised_fields() {
        let ds = Dataset::from_json_str(r#"[{"X": 1, "Y": 2.5}, {"X": -3, "Y": 0, "label": "a"}]"#)
            .unwrap();
        assert_eq!(ds.points(), &[Point::new(1.0, 2.5), Point::new(-3.0, 0.0)]);
    }

    #[test]
    fn lowercase_fields_are_rejected() {
        let err = Dataset::from_json_str(r#"[{"x": 1, "y": 2}]"#).unwrap_err();
        assert!(matches!(err, ScatterError::MalformedInput { .. }));
    }

    #[test]
    fn extent_pads_the_max_side_only() {
        let ds = Dataset::new(vec![Point::new(0.0, 5.0), Point::new(4.0, -1.0)]);
        let (x, y) = ds.padded_extent(10.0).unwrap();
        assert_eq!(x, Domain::new(0.0, 14.0));
        assert_eq!(y, Domain::new(-1.0, 15.0));
        assert!(Dataset::default().padded_extent(10.0).is_none());
    }
}
