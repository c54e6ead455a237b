//! Configuration types shared by the plot session and the native UI.

use crate::color_scheme::ColorScheme;
use crate::data::domain::Axis;

// ─────────────────────────────────────────────────────────────────────────────
// Plot geometry
// ─────────────────────────────────────────────────────────────────────────────

/// Thickness of the axis strips under and left of the plot frame, in pixels.
///
/// Drags and double-clicks inside a strip act on that axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisStrips {
    pub bottom: f32,
    pub left: f32,
}

impl Default for AxisStrips {
    fn default() -> Self {
        Self {
            bottom: 30.0,
            left: 40.0,
        }
    }
}

/// Size of the plot frame (the area points are drawn in), in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotSize {
    pub width: f32,
    pub height: f32,
}

impl Default for PlotSize {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 450.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Interaction tuning
// ─────────────────────────────────────────────────────────────────────────────

/// Domain units added per dragged pixel when rescaling an axis.
///
/// The axes use different values; by default x reacts five times stronger
/// than y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSensitivity {
    pub x: f64,
    pub y: f64,
}

impl Default for DragSensitivity {
    fn default() -> Self {
        Self { x: 0.5, y: 0.1 }
    }
}

impl DragSensitivity {
    pub fn for_axis(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }
}

/// Bounds and wheel response of the horizontal zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    /// Smallest allowed zoom scale.
    pub min_scale: f64,
    /// Largest allowed zoom scale.
    pub max_scale: f64,
    /// Exponent per scrolled pixel: one wheel notch multiplies the scale by
    /// `2^(delta * wheel_sensitivity)`.
    pub wheel_sensitivity: f64,
    /// Duration of animated zoom resets, in seconds. `0.0` disables animation.
    pub reset_duration_secs: f64,
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self {
            min_scale: 0.0001,
            max_scale: 50.0,
            wheel_sensitivity: 0.002,
            reset_duration_secs: 0.75,
        }
    }
}

impl ZoomLimits {
    /// Clamping range in ascending order. A bound that is not a finite
    /// positive number falls back to its default.
    pub fn scale_range(&self) -> (f64, f64) {
        let defaults = Self::default();
        let usable = |v: f64| v.is_finite() && v > 0.0;
        let min = if usable(self.min_scale) {
            self.min_scale
        } else {
            defaults.min_scale
        };
        let max = if usable(self.max_scale) {
            self.max_scale
        } else {
            defaults.max_scale
        };
        if min <= max {
            (min, max)
        } else {
            (max, min)
        }
    }

    /// Clamp `scale` into [`ZoomLimits::scale_range`]; a non-finite scale
    /// becomes 1 (clamped).
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        let (min, max) = self.scale_range();
        if !scale.is_finite() {
            return 1.0f64.clamp(min, max);
        }
        scale.clamp(min, max)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Appearance
// ─────────────────────────────────────────────────────────────────────────────

/// Sizes used when drawing points and measurement overlays.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OverlayStyle {
    /// Radius of plotted data points.
    pub point_radius: f32,
    /// Radius of measurement endpoint markers.
    pub marker_radius: f32,
    /// Stroke width of measurement lines.
    pub line_width: f32,
    /// Vertical offset of measurement labels above their anchor.
    pub label_offset: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            point_radius: 5.0,
            marker_radius: 8.0,
            line_width: 2.0,
            label_offset: 10.0,
        }
    }
}

/// Toggle individual UI features on or off.
#[derive(Clone, Debug)]
pub struct FeatureFlags {
    /// Show the top button bar.
    pub top_bar: bool,
    /// Draw grid lines behind the points.
    pub grid: bool,
    /// Show a tooltip with the coordinates of the hovered point.
    pub tooltips: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            top_bar: true,
            grid: true,
            tooltips: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ScatterConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration.
///
/// | Field          | Purpose |
/// |----------------|---------|
/// | `plot_size`    | Initial plot area size (the UI updates it every frame) |
/// | `axis_strips`  | Axis drag areas next to the plot frame |
/// | `domain_padding` | Units added to the max side of each axis at load |
/// | `drag`         | Per-axis rescale sensitivity |
/// | `zoom`         | Zoom clamping and wheel response |
/// | `overlay`      | Point and measurement sizes |
/// | `color_scheme` | Initial theme |
/// | `features`     | UI feature toggles |
#[derive(Clone)]
pub struct ScatterConfig {
    /// Native window title.
    pub title: String,
    pub plot_size: PlotSize,
    pub axis_strips: AxisStrips,
    pub domain_padding: f64,
    pub drag: DragSensitivity,
    pub zoom: ZoomLimits,
    pub overlay: OverlayStyle,
    pub color_scheme: ColorScheme,
    pub features: FeatureFlags,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            title: "Scatterscope".to_string(),
            plot_size: PlotSize::default(),
            axis_strips: AxisStrips::default(),
            domain_padding: 10.0,
            drag: DragSensitivity::default(),
            zoom: ZoomLimits::default(),
            overlay: OverlayStyle::default(),
            color_scheme: ColorScheme::default(),
            features: FeatureFlags::default(),
            native_options: None,
        }
    }
}
