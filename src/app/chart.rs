//! Replays a recorded scene onto an [`egui_plot::Plot`].
//!
//! egui_plot lays out ticks, tick labels and grid lines for the bounds the
//! scene sets. Its own pan, zoom and reset handling is switched off: those
//! gestures go through the session so the projection stays the one used for
//! hit-testing.

use eframe::egui::{self, Align2, RichText};
use egui_plot::{Line, Plot, PlotPoint, PlotResponse, PlotUi, Points, Text};

use crate::data::dataset::Point;
use crate::data::domain::Axis;
use crate::scene::{RenderCommand, RenderList};

const LABEL_SIZE: f32 = 14.0;

fn xy(p: Point) -> [f64; 2] {
    [p.x, p.y]
}

/// Show `scene` in a plot filling the available space.
pub(super) fn show_scene(ui: &mut egui::Ui, scene: &RenderList) -> PlotResponse<()> {
    let grid = scene.grid();
    let plot = Plot::new("scatter_plot")
        .show_grid(grid.is_some())
        .show_x(false)
        .show_y(false)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false);

    ui.scope(|ui| {
        let visuals = ui.visuals_mut();
        if let Some(background) = scene.background() {
            visuals.extreme_bg_color = background;
        }
        // egui_plot derives grid and tick label colours from the text colour.
        if let Some(color) = grid {
            visuals.override_text_color = Some(color);
        }
        plot.show(ui, |plot_ui| replay(plot_ui, scene))
    })
    .inner
}

fn replay(plot_ui: &mut PlotUi, scene: &RenderList) {
    for command in scene.commands() {
        match command {
            RenderCommand::AxisTicks { axis: Axis::X, domain } => {
                plot_ui.set_plot_bounds_x(domain.min..=domain.max);
            }
            RenderCommand::AxisTicks { axis: Axis::Y, domain } => {
                plot_ui.set_plot_bounds_y(domain.min..=domain.max);
            }
            RenderCommand::Points { points, style } => {
                let series: Vec<[f64; 2]> = points.iter().copied().map(xy).collect();
                plot_ui.points(
                    Points::new("points", series)
                        .radius(style.radius)
                        .color(style.color),
                );
            }
            RenderCommand::OverlayLine(line) => {
                plot_ui.line(
                    Line::new("measurement", vec![xy(line.from), xy(line.to)])
                        .color(line.color)
                        .width(line.width),
                );
            }
            RenderCommand::OverlayMarker(marker) => {
                plot_ui.points(
                    Points::new("measurement", vec![xy(marker.center)])
                        .radius(marker.radius)
                        .color(marker.color),
                );
            }
            RenderCommand::OverlayLabel(label) => {
                let text = RichText::new(&label.text)
                    .size(LABEL_SIZE)
                    .color(label.color);
                plot_ui.text(
                    Text::new("measurement", PlotPoint::new(label.pos.x, label.pos.y), text)
                        .anchor(Align2::CENTER_BOTTOM),
                );
            }
            // Applied to the plot's visuals before it is shown.
            RenderCommand::Background(_) | RenderCommand::Grid(_) => {}
        }
    }
}
