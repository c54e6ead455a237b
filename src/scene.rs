//! Scene orchestration and the renderer boundary.
//!
//! The core never draws anything itself. [`render_scene`] walks the session
//! state and calls into a [`Renderer`]. The app records into a [`RenderList`]
//! and replays it onto an `egui_plot` chart, which owns tick placement, tick
//! labels and grid lines for the bounds the scene hands it. Tests inspect the
//! same list.

use egui::Color32;

use crate::data::dataset::Point;
use crate::data::domain::{Axis, Domain};
use crate::data::overlay::{OverlayLabel, OverlayLine, OverlayMarker};
use crate::data::session::PlotSession;

/// Styling of plotted data points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointStyle {
    /// Pixels.
    pub radius: f32,
    pub color: Color32,
}

/// Narrow drawing interface the core renders through. Geometry is in data
/// coordinates.
pub trait Renderer {
    fn set_background(&mut self, color: Color32);
    /// Grid line colour, or `None` to hide the grid.
    fn set_grid(&mut self, color: Option<Color32>);
    /// Visible interval of one axis; ticks are laid out over it.
    fn draw_axis_ticks(&mut self, axis: Axis, domain: Domain);
    fn set_points(&mut self, points: &[Point], style: PointStyle);
    fn draw_overlay_line(&mut self, line: &OverlayLine);
    fn draw_overlay_marker(&mut self, marker: &OverlayMarker);
    fn draw_overlay_label(&mut self, label: &OverlayLabel);
    /// Drop every overlay artifact drawn so far.
    fn clear_overlay(&mut self);
}

/// Render the whole scene. An empty dataset renders nothing.
pub fn render_scene(session: &PlotSession, renderer: &mut dyn Renderer) {
    if session.dataset().is_empty() {
        return;
    }
    let config = session.config();
    let colors = session.colors();
    let viewport = session.viewport();

    renderer.set_background(colors.background);
    renderer.clear_overlay();
    renderer.set_grid(config.features.grid.then_some(colors.grid));

    for axis in [Axis::X, Axis::Y] {
        renderer.draw_axis_ticks(axis, viewport.visible_domain(axis));
    }

    renderer.set_points(
        session.dataset().points(),
        PointStyle {
            radius: config.overlay.point_radius,
            color: colors.point,
        },
    );

    let overlay = session.overlay();
    for line in &overlay.lines {
        renderer.draw_overlay_line(line);
    }
    for marker in &overlay.markers {
        renderer.draw_overlay_marker(marker);
    }
    for label in &overlay.labels {
        renderer.draw_overlay_label(label);
    }
}

/// A recorded renderer call.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    Background(Color32),
    Grid(Option<Color32>),
    AxisTicks { axis: Axis, domain: Domain },
    Points { points: Vec<Point>, style: PointStyle },
    OverlayLine(OverlayLine),
    OverlayMarker(OverlayMarker),
    OverlayLabel(OverlayLabel),
}

impl RenderCommand {
    fn is_overlay(&self) -> bool {
        matches!(
            self,
            RenderCommand::OverlayLine(_)
                | RenderCommand::OverlayMarker(_)
                | RenderCommand::OverlayLabel(_)
        )
    }
}

/// Renderer that records commands instead of drawing.
#[derive(Debug, Default, Clone)]
pub struct RenderList {
    commands: Vec<RenderCommand>,
}

impl RenderList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn background(&self) -> Option<Color32> {
        self.commands.iter().rev().find_map(|c| match c {
            RenderCommand::Background(color) => Some(*color),
            _ => None,
        })
    }

    /// Grid colour of the latest `set_grid`; `None` if hidden or never set.
    pub fn grid(&self) -> Option<Color32> {
        self.commands.iter().rev().find_map(|c| match c {
            RenderCommand::Grid(color) => Some(*color),
            _ => None,
        })?
    }

    /// Most recent tick interval of an axis.
    pub fn axis_domain(&self, axis: Axis) -> Option<Domain> {
        self.commands.iter().rev().find_map(|c| match c {
            RenderCommand::AxisTicks { axis: a, domain } if *a == axis => Some(*domain),
            _ => None,
        })
    }

    /// The most recently set points.
    pub fn points(&self) -> Option<&[Point]> {
        self.commands.iter().rev().find_map(|c| match c {
            RenderCommand::Points { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }

    pub fn point_style(&self) -> Option<PointStyle> {
        self.commands.iter().rev().find_map(|c| match c {
            RenderCommand::Points { style, .. } => Some(*style),
            _ => None,
        })
    }

    pub fn overlay_labels(&self) -> Vec<&OverlayLabel> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                RenderCommand::OverlayLabel(label) => Some(label),
                _ => None,
            })
            .collect()
    }

    pub fn overlay_count(&self) -> usize {
        self.commands.iter().filter(|c| c.is_overlay()).count()
    }
}

impl Renderer for RenderList {
    fn set_background(&mut self, color: Color32) {
        self.commands.push(RenderCommand::Background(color));
    }

    fn set_grid(&mut self, color: Option<Color32>) {
        self.commands.push(RenderCommand::Grid(color));
    }

    fn draw_axis_ticks(&mut self, axis: Axis, domain: Domain) {
        self.commands.push(RenderCommand::AxisTicks { axis, domain });
    }

    fn set_points(&mut self, points: &[Point], style: PointStyle) {
        self.commands.push(RenderCommand::Points {
            points: points.to_vec(),
            style,
        });
    }

    fn draw_overlay_line(&mut self, line: &OverlayLine) {
        self.commands.push(RenderCommand::OverlayLine(*line));
    }

    fn draw_overlay_marker(&mut self, marker: &OverlayMarker) {
        self.commands.push(RenderCommand::OverlayMarker(*marker));
    }

    fn draw_overlay_label(&mut self, label: &OverlayLabel) {
        self.commands.push(RenderCommand::OverlayLabel(label.clone()));
    }

    fn clear_overlay(&mut self) {
        self.commands.retain(|c| !c.is_overlay());
    }
}
