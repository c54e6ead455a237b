//! Coordinate transforms between data and plot-area pixel space.
//!
//! The projection is `(k * lin(x, x_domain, [0, w]) + tx, lin(y, y_domain, [h, 0]))`.
//! Zoom (`k`, `tx`) only ever acts on the horizontal component; the vertical
//! scale changes exclusively through the y domain.

use crate::config::{PlotSize, ZoomLimits};
use crate::data::dataset::{PixelPoint, Point};
use crate::data::domain::{Axis, Domain};

/// Pan/zoom transform. Identity is `{scale: 1, translate_x: 0, translate_y: 0}`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomTransform {
    pub scale: f64,
    pub translate_x: f64,
    /// Tracked so pans and resets keep it, but never used by the projection.
    pub translate_y: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ZoomTransform {
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate_x: 0.0,
        translate_y: 0.0,
    };

    pub fn new(scale: f64, translate_x: f64, translate_y: f64) -> Self {
        Self {
            scale,
            translate_x,
            translate_y,
        }
    }

    pub fn apply_x(&self, x: f64) -> f64 {
        x * self.scale + self.translate_x
    }

    pub fn invert_x(&self, x: f64) -> f64 {
        (x - self.translate_x) / self.scale
    }
}

/// How a domain change affects the axis reset target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainChange {
    /// Finished manual drag: the new domain becomes the axis reset target.
    Drag,
    /// Intermediate update while a gesture is still open: the reset target is kept.
    Live,
}

/// Per-axis domain bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisDomains {
    /// Domain currently used by the projection.
    pub working: Domain,
    /// Target of `reset_axis`; follows manual drags.
    pub original: Domain,
    /// Value computed at load; target of a full reset.
    pub loaded: Domain,
}

impl AxisDomains {
    fn new(domain: Domain) -> Self {
        Self {
            working: domain,
            original: domain,
            loaded: domain,
        }
    }
}

/// Mapping between data points and plot-area pixels.
pub trait Projection {
    fn project(&self, point: Point) -> PixelPoint;
    fn unproject(&self, pixel: PixelPoint) -> Point;
}

/// The current pan/zoom state plus both axis domains.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    size: PlotSize,
    x: AxisDomains,
    y: AxisDomains,
    zoom: ZoomTransform,
    limits: ZoomLimits,
}

impl Viewport {
    pub fn new(size: PlotSize, limits: ZoomLimits) -> Self {
        Self {
            size,
            x: AxisDomains::default(),
            y: AxisDomains::default(),
            zoom: ZoomTransform::IDENTITY,
            limits,
        }
    }

    pub fn size(&self) -> PlotSize {
        self.size
    }

    pub fn set_size(&mut self, size: PlotSize) {
        self.size = size;
    }

    pub fn zoom(&self) -> ZoomTransform {
        self.zoom
    }

    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    pub fn axis(&self, axis: Axis) -> &AxisDomains {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut AxisDomains {
        match axis {
            Axis::X => &mut self.x,
            Axis::Y => &mut self.y,
        }
    }

    /// Working domain of an axis.
    pub fn domain(&self, axis: Axis) -> Domain {
        self.axis(axis).working
    }

    /// Pixel length of an axis.
    pub fn axis_length(&self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.size.width,
            Axis::Y => self.size.height,
        }
    }

    /// Install freshly loaded domains: working, original and load-time values
    /// all start equal and zoom returns to identity.
    pub fn set_loaded_domains(&mut self, x: Domain, y: Domain) {
        self.x = AxisDomains::new(x);
        self.y = AxisDomains::new(y);
        self.zoom = ZoomTransform::IDENTITY;
    }

    /// Replace the working domain of one axis. The other axis is untouched.
    pub fn rescale_domain(&mut self, axis: Axis, domain: Domain, change: DomainChange) {
        let state = self.axis_mut(axis);
        state.working = domain;
        if change == DomainChange::Drag {
            state.original = domain;
        }
    }

    /// Store a zoom transform, clamping its scale. Domains are never touched.
    pub fn apply_zoom(&mut self, transform: ZoomTransform) {
        self.zoom = ZoomTransform {
            scale: self.limits.clamp_scale(transform.scale),
            ..transform
        };
    }

    /// Zoom by `factor` keeping the content under `anchor` in place.
    pub fn zoom_at(&mut self, anchor: PixelPoint, factor: f64) {
        let current = self.zoom;
        let scale = self.limits.clamp_scale(current.scale * factor);
        let ratio = scale / current.scale;
        let ax = anchor.x as f64;
        let ay = anchor.y as f64;
        self.zoom = ZoomTransform {
            scale,
            translate_x: ax - (ax - current.translate_x) * ratio,
            translate_y: ay - (ay - current.translate_y) * ratio,
        };
    }

    /// Translate the zoom transform by a pixel delta.
    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.zoom.translate_x += dx as f64;
        self.zoom.translate_y += dy as f64;
    }

    /// Restore an axis to its recorded original domain. Resetting X also drops
    /// the horizontal zoom component, keeping `translate_y`.
    pub fn reset_axis(&mut self, axis: Axis) {
        let state = self.axis_mut(axis);
        state.working = state.original;
        if axis == Axis::X {
            self.zoom = ZoomTransform {
                scale: 1.0,
                translate_x: 0.0,
                translate_y: self.zoom.translate_y,
            };
        }
    }

    /// Back to the state right after load.
    pub fn reset(&mut self) {
        for state in [&mut self.x, &mut self.y] {
            state.working = state.loaded;
            state.original = state.loaded;
        }
        self.zoom = ZoomTransform::IDENTITY;
    }

    /// Data point to plot-area pixel.
    pub fn project(&self, point: Point) -> PixelPoint {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        let x = self.zoom.apply_x(self.x.working.map(point.x, 0.0, w));
        let y = self.y.working.map(point.y, h, 0.0);
        PixelPoint::new(x as f32, y as f32)
    }

    /// Plot-area pixel to data point; exact inverse of [`Viewport::project`].
    pub fn inverse_project(&self, pixel: PixelPoint) -> Point {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        let x = self
            .x
            .working
            .invert(self.zoom.invert_x(pixel.x as f64), 0.0, w);
        let y = self.y.working.invert(pixel.y as f64, h, 0.0);
        Point::new(x, y)
    }

    /// Data interval currently visible along an axis.
    pub fn visible_domain(&self, axis: Axis) -> Domain {
        match axis {
            Axis::X => {
                let w = self.size.width as f64;
                let domain = self.x.working;
                Domain::new(
                    domain.invert(self.zoom.invert_x(0.0), 0.0, w),
                    domain.invert(self.zoom.invert_x(w), 0.0, w),
                )
            }
            Axis::Y => self.y.working,
        }
    }
}

impl Projection for Viewport {
    fn project(&self, point: Point) -> PixelPoint {
        Viewport::project(self, point)
    }

    fn unproject(&self, pixel: PixelPoint) -> Point {
        self.inverse_project(pixel)
    }
}

/// Animated move from one zoom transform to another.
///
/// Scale is interpolated geometrically so zooming in and out feel symmetric;
/// translations are interpolated linearly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomTransition {
    from: ZoomTransform,
    to: ZoomTransform,
    start: f64,
    duration: f64,
}

impl ZoomTransition {
    pub fn new(from: ZoomTransform, to: ZoomTransform, start: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            start,
            duration,
        }
    }

    pub fn target(&self) -> ZoomTransform {
        self.to
    }

    pub fn is_finished(&self, now: f64) -> bool {
        self.duration <= 0.0 || now >= self.start + self.duration
    }

    /// Transform at time `now`, using a cubic ease-in-out.
    pub fn sample(&self, now: f64) -> ZoomTransform {
        if self.is_finished(now) {
            return self.to;
        }
        let t = ((now - self.start) / self.duration).clamp(0.0, 1.0);
        let eased = if t < 0.5 {
            4.0 * t * t * t
        } else {
            1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
        };
        let lerp = |a: f64, b: f64| a + (b - a) * eased;
        let scale = if self.from.scale > 0.0 && self.to.scale > 0.0 {
            (self.from.scale.ln() + (self.to.scale.ln() - self.from.scale.ln()) * eased).exp()
        } else {
            lerp(self.from.scale, self.to.scale)
        };
        ZoomTransform {
            scale,
            translate_x: lerp(self.from.translate_x, self.to.translate_x),
            translate_y: lerp(self.from.translate_y, self.to.translate_y),
        }
    }
}
