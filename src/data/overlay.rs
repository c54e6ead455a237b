//! Measurement overlay artifacts.
//!
//! Geometry is in data coordinates so the chart can place it like any other
//! plot item. Label anchors are laid out in plot-area pixels (midpoints and a
//! fixed upward offset) and then mapped back through the projection.
//!
//! The overlay is derived state: it is rebuilt from the pick buffer and the
//! current projection on every render, so nothing from a previous
//! measurement survives a clear or a new pick.

use egui::Color32;

use crate::config::OverlayStyle;
use crate::data::dataset::{PixelPoint, Point};
use crate::data::measurement::{CompletedMeasurement, MeasurementState, Tool};
use crate::data::viewport::Projection;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayLine {
    pub from: Point,
    pub to: Point,
    pub color: Color32,
    pub width: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayMarker {
    pub center: Point,
    /// Pixels.
    pub radius: f32,
    pub color: Color32,
}

/// Text centred horizontally on `pos`, bottom edge at `pos.y`.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLabel {
    pub pos: Point,
    pub text: String,
    pub color: Color32,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overlay {
    pub lines: Vec<OverlayLine>,
    pub markers: Vec<OverlayMarker>,
    pub labels: Vec<OverlayLabel>,
}

impl Overlay {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.markers.is_empty() && self.labels.is_empty()
    }

    fn push_markers(&mut self, points: &[Point], color: Color32, style: &OverlayStyle) {
        self.markers.extend(points.iter().map(|&center| OverlayMarker {
            center,
            radius: style.marker_radius,
            color,
        }));
    }

    fn push_line(&mut self, from: Point, to: Point, color: Color32, style: &OverlayStyle) {
        self.lines.push(OverlayLine {
            from,
            to,
            color,
            width: style.line_width,
        });
    }
}

/// Build the overlay for the current measurement state.
///
/// Picks of an incomplete measurement show up as markers in the colour of
/// the primary tool; completed measurements add lines and a value label.
pub fn build_overlay(
    state: &MeasurementState,
    projection: &dyn Projection,
    style: &OverlayStyle,
) -> Overlay {
    let mut overlay = Overlay::default();
    if state.picks().is_empty() {
        return overlay;
    }
    let completed = state.completed();
    if completed.is_empty() {
        if let Some(tool) = state.primary_tool() {
            overlay.push_markers(state.picks(), tool.color(), style);
        }
        return overlay;
    }
    for measurement in &completed {
        add_measurement(&mut overlay, measurement, projection, style);
    }
    overlay
}

fn add_measurement(
    overlay: &mut Overlay,
    measurement: &CompletedMeasurement,
    projection: &dyn Projection,
    style: &OverlayStyle,
) {
    let color = measurement.tool.color();
    let picks = measurement.picks.as_slice();
    let label_px = match (measurement.tool, picks) {
        (Tool::Ruler, &[a, b]) => {
            overlay.push_line(a, b, color, style);
            let (p1, p2) = (projection.project(a), projection.project(b));
            PixelPoint::new((p1.x + p2.x) / 2.0, (p1.y + p2.y) / 2.0 - style.label_offset)
        }
        (Tool::Protractor, &[a, b, c]) => {
            overlay.push_line(a, b, color, style);
            overlay.push_line(b, c, color, style);
            let (p1, p2, p3) = (projection.project(a), projection.project(b), projection.project(c));
            PixelPoint::new(
                p2.x + (p2.x - p1.x) / 2.0,
                p2.y + (p3.y - p2.y) / 2.0 - style.label_offset,
            )
        }
        _ => return,
    };
    overlay.labels.push(OverlayLabel {
        pos: projection.unproject(label_px),
        text: measurement.label(),
        color,
    });
    overlay.push_markers(picks, color, style);
}
