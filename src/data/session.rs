//! `PlotSession`: the single owner of everything the plot displays.
//!
//! All mutation goes through this type on the UI thread. Each mutating call
//! bumps [`PlotSession::revision`], which the UI uses as its "needs a full
//! redraw" signal.

use crate::color_scheme::{ColorScheme, ThemeColors};
use crate::config::{PlotSize, ScatterConfig};
use crate::data::dataset::{Dataset, PixelPoint, Point};
use crate::data::domain::{Axis, Domain};
use crate::data::drag::{DragKind, DragSession};
use crate::data::measurement::{ClickOutcome, CompletedMeasurement, MeasurementState, Tool};
use crate::data::overlay::{build_overlay, Overlay};
use crate::data::viewport::{Viewport, ZoomTransform, ZoomTransition};
use crate::error::Result;

pub struct PlotSession {
    config: ScatterConfig,
    dataset: Dataset,
    initial_data: Dataset,
    viewport: Viewport,
    measurement: MeasurementState,
    color_scheme: ColorScheme,
    drag: Option<DragSession>,
    transition: Option<ZoomTransition>,
    revision: u64,
}

impl Default for PlotSession {
    fn default() -> Self {
        Self::new(ScatterConfig::default())
    }
}

impl PlotSession {
    pub fn new(config: ScatterConfig) -> Self {
        let viewport = Viewport::new(config.plot_size, config.zoom);
        let color_scheme = config.color_scheme;
        Self {
            config,
            dataset: Dataset::default(),
            initial_data: Dataset::default(),
            viewport,
            measurement: MeasurementState::new(),
            color_scheme,
            drag: None,
            transition: None,
            revision: 0,
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    pub fn config(&self) -> &ScatterConfig {
        &self.config
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn initial_data(&self) -> &Dataset {
        &self.initial_data
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn measurement(&self) -> &MeasurementState {
        &self.measurement
    }

    pub fn color_scheme(&self) -> ColorScheme {
        self.color_scheme
    }

    pub fn colors(&self) -> &'static ThemeColors {
        self.color_scheme.colors()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn active_drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    // ── Data ─────────────────────────────────────────────────────────────────

    /// Replace the dataset. Domains are recomputed from the new points and
    /// zoom returns to identity.
    pub fn load_dataset(&mut self, dataset: Dataset) {
        let (x, y) = dataset
            .padded_extent(self.config.domain_padding)
            .unwrap_or((Domain::default(), Domain::default()));
        self.viewport.set_loaded_domains(x, y);
        tracing::info!(points = dataset.len(), x_min = x.min, x_max = x.max, y_min = y.min, y_max = y.max, "dataset loaded");
        self.initial_data = dataset.clone();
        self.dataset = dataset;
        self.drag = None;
        self.transition = None;
        self.touch();
    }

    /// Parse and load `[{"X": .., "Y": ..}]` text. On error the current
    /// dataset is kept.
    pub fn load_json(&mut self, text: &str) -> Result<()> {
        match Dataset::from_json_str(text) {
            Ok(dataset) => {
                self.load_dataset(dataset);
                Ok(())
            }
            Err(err) => {
                tracing::warn!("rejected input: {err}");
                Err(err)
            }
        }
    }

    // ── Viewport ─────────────────────────────────────────────────────────────

    pub fn set_plot_size(&mut self, size: PlotSize) {
        if self.viewport.size() != size {
            self.viewport.set_size(size);
            self.touch();
        }
    }

    /// Restore the dataset, both axes and the zoom to their load-time state.
    /// Does nothing before the first load.
    pub fn reset_all(&mut self) {
        if self.initial_data.is_empty() {
            return;
        }
        self.dataset = self.initial_data.clone();
        self.viewport.reset();
        self.transition = None;
        tracing::debug!("view reset");
        self.touch();
    }

    /// Restore one axis to its recorded original domain.
    pub fn reset_axis(&mut self, axis: Axis) {
        self.viewport.reset_axis(axis);
        if axis == Axis::X {
            self.transition = None;
        }
        tracing::debug!(%axis, "axis reset");
        self.touch();
    }

    pub fn apply_zoom(&mut self, transform: ZoomTransform) {
        self.transition = None;
        self.viewport.apply_zoom(transform);
        self.touch();
    }

    /// Wheel zoom around `anchor` (plot-area pixels).
    pub fn zoom_at(&mut self, anchor: PixelPoint, factor: f64) {
        self.transition = None;
        self.viewport.zoom_at(anchor, factor);
        self.touch();
    }

    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.transition = None;
        self.viewport.pan_by(dx, dy);
        self.touch();
    }

    /// Animate from `previous` to the current zoom transform.
    ///
    /// Call right after a reset with the transform that was shown before it.
    pub fn animate_zoom_from(&mut self, previous: ZoomTransform, now: f64) {
        let target = self.viewport.zoom();
        let duration = self.config.zoom.reset_duration_secs;
        if duration <= 0.0 || previous == target {
            return;
        }
        self.viewport.apply_zoom(previous);
        self.transition = Some(ZoomTransition::new(previous, target, now, duration));
        self.touch();
    }

    /// Step a running zoom animation. Returns `true` while it is still running.
    pub fn advance(&mut self, now: f64) -> bool {
        let Some(transition) = self.transition else {
            return false;
        };
        self.viewport.apply_zoom(transition.sample(now));
        self.touch();
        if transition.is_finished(now) {
            self.transition = None;
            false
        } else {
            true
        }
    }

    // ── Axis drags ───────────────────────────────────────────────────────────

    /// Start an axis drag. Any gesture still open is closed first.
    pub fn begin_axis_drag(&mut self, axis: Axis, kind: DragKind, pointer: PixelPoint) {
        self.end_drag();
        self.drag = Some(DragSession::begin(&self.viewport, axis, kind, pointer));
    }

    /// Feed a pointer move into the open drag. Returns `true` if a domain changed.
    pub fn drag_to(&mut self, pointer: PixelPoint) -> bool {
        let sensitivity = self.config.drag;
        let changed = match self.drag.as_mut() {
            Some(drag) => drag.on_move(&mut self.viewport, pointer, &sensitivity),
            None => false,
        };
        if changed {
            self.touch();
        }
        changed
    }

    /// Close the open drag, if any, returning the axis's final domain.
    pub fn end_drag(&mut self) -> Option<Domain> {
        self.drag.take().map(|drag| drag.end(&mut self.viewport))
    }

    // ── Theme & tools ────────────────────────────────────────────────────────

    pub fn toggle_theme(&mut self) -> ColorScheme {
        self.color_scheme = self.color_scheme.toggled();
        tracing::debug!(scheme = self.color_scheme.label(), "theme toggled");
        self.touch();
        self.color_scheme
    }

    pub fn toggle_tool(&mut self, tool: Tool) -> bool {
        let active = self.measurement.toggle(tool);
        self.touch();
        active
    }

    /// A click on the plot surface at `pixel` (plot-area pixels).
    pub fn click(&mut self, pixel: PixelPoint) -> ClickOutcome {
        let point = self.viewport.inverse_project(pixel);
        let outcome = self.measurement.on_click(point);
        if outcome != ClickOutcome::Ignored {
            tracing::debug!(x = point.x, y = point.y, ?outcome, "measurement click");
            self.touch();
        }
        outcome
    }

    pub fn clear_measurements(&mut self) {
        self.measurement.clear();
        self.touch();
    }

    pub fn completed_measurements(&self) -> Vec<CompletedMeasurement> {
        self.measurement.completed()
    }

    pub fn overlay(&self) -> Overlay {
        build_overlay(&self.measurement, &self.viewport, &self.config.overlay)
    }

    // ── Queries ──────────────────────────────────────────────────────────────

    pub fn project(&self, point: Point) -> PixelPoint {
        self.viewport.project(point)
    }

    /// Nearest data point drawn under `pixel`, if any.
    pub fn point_at(&self, pixel: PixelPoint) -> Option<Point> {
        let radius = self.config.overlay.point_radius;
        self.dataset
            .points()
            .iter()
            .map(|p| (*p, self.viewport.project(*p).distance_to(&pixel)))
            .filter(|(_, d)| *d <= radius)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(p, _)| p)
    }
}
