//! Axis drag gestures.
//!
//! A [`DragSession`] lives from pointer press to pointer release over an axis.
//! Moves update the working domain only; [`DragSession::end`] commits the
//! result as the axis reset target. Nothing from one drag carries into the next.

use crate::config::DragSensitivity;
use crate::data::dataset::PixelPoint;
use crate::data::domain::{Axis, Domain};
use crate::data::viewport::{DomainChange, Viewport};

/// What a drag on an axis does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    /// Widen/narrow the domain symmetrically in proportion to the displacement.
    Rescale,
    /// Slide the domain so the axis follows the pointer.
    Pan,
}

/// State of one in-progress axis drag.
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    axis: Axis,
    kind: DragKind,
    anchor: f32,
    last: f32,
    start_domain: Domain,
}

fn along(axis: Axis, pointer: PixelPoint) -> f32 {
    match axis {
        Axis::X => pointer.x,
        Axis::Y => pointer.y,
    }
}

impl DragSession {
    /// Start a gesture at `pointer` (plot-area pixels).
    pub fn begin(viewport: &Viewport, axis: Axis, kind: DragKind, pointer: PixelPoint) -> Self {
        let anchor = along(axis, pointer);
        tracing::debug!(%axis, ?kind, anchor, "axis drag started");
        Self {
            axis,
            kind,
            anchor,
            last: anchor,
            start_domain: viewport.domain(axis),
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn kind(&self) -> DragKind {
        self.kind
    }

    /// Domain of the axis when the gesture started.
    pub fn start_domain(&self) -> Domain {
        self.start_domain
    }

    /// Apply a pointer move. Returns `true` if the domain changed.
    ///
    /// Moves that would collapse the domain below
    /// [`MIN_SPAN`](crate::data::domain::MIN_SPAN) are ignored.
    pub fn on_move(
        &mut self,
        viewport: &mut Viewport,
        pointer: PixelPoint,
        sensitivity: &DragSensitivity,
    ) -> bool {
        let pos = along(self.axis, pointer);
        let next = match self.kind {
            DragKind::Rescale => {
                let displacement = (pos - self.anchor) as f64;
                self.start_domain
                    .widened(displacement * sensitivity.for_axis(self.axis))
            }
            DragKind::Pan => {
                let length = viewport.axis_length(self.axis) as f64;
                if length <= 0.0 {
                    return false;
                }
                let current = viewport.domain(self.axis);
                let fraction = (pos - self.last) as f64 / length;
                let delta = fraction * current.span();
                match self.axis {
                    Axis::X => current.shifted(-delta),
                    Axis::Y => current.shifted(delta),
                }
            }
        };
        self.last = pos;
        if !next.is_valid() {
            return false;
        }
        viewport.rescale_domain(self.axis, next, DomainChange::Live);
        true
    }

    /// Finish the gesture: the final domain becomes the axis reset target.
    pub fn end(self, viewport: &mut Viewport) -> Domain {
        let domain = viewport.domain(self.axis);
        viewport.rescale_domain(self.axis, domain, DomainChange::Drag);
        tracing::debug!(axis = %self.axis, min = domain.min, max = domain.max, "axis drag ended");
        domain
    }
}
