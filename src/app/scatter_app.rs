//! [`ScatterApp`]: the eframe application wrapping a [`PlotSession`].

use std::path::PathBuf;

use eframe::egui::{self, Color32, CursorIcon, PointerButton, Pos2, Rect, Sense};
use egui_phosphor::regular as icons;

use crate::color_scheme::ColorScheme;
use crate::config::{PlotSize, ScatterConfig};
use crate::data::dataset::PixelPoint;
use crate::data::domain::Axis;
use crate::data::drag::DragKind;
use crate::data::loader::{DatasetLoader, LoadOutcome};
use crate::data::measurement::Tool;
use crate::data::session::PlotSession;
use crate::scene::{render_scene, RenderList};

use super::{chart, export};

/// Message shown under the buttons.
enum Status {
    Idle,
    Info(String),
    Error(String),
}

pub struct ScatterApp {
    pub session: PlotSession,
    loader: DatasetLoader,
    status: Status,
    /// Scheme last pushed into egui's visuals.
    applied_scheme: Option<ColorScheme>,
    screenshot_requested: bool,
}

impl ScatterApp {
    pub fn new(config: ScatterConfig) -> Self {
        Self {
            session: PlotSession::new(config),
            loader: DatasetLoader::new(),
            status: Status::Idle,
            applied_scheme: None,
            screenshot_requested: false,
        }
    }

    /// Queue a dataset file for loading.
    pub fn open(&mut self, path: PathBuf) {
        self.status = Status::Idle;
        self.loader.request(path);
    }

    fn poll_loader(&mut self, ctx: &egui::Context) {
        if let Some(LoadOutcome {
            path,
            generation,
            result,
        }) = self.loader.poll()
        {
            match result {
                Ok(dataset) => {
                    let count = dataset.len();
                    tracing::debug!(path = %path.display(), generation, "load finished");
                    self.session.load_dataset(dataset);
                    self.status = Status::Info(format!("{}: {count} points", path.display()));
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), generation, "load failed: {err}");
                    self.status = Status::Error(err.to_string());
                }
            }
        }
        if self.loader.is_pending() {
            ctx.request_repaint();
        }
    }

    fn apply_theme(&mut self, ctx: &egui::Context) {
        let scheme = self.session.color_scheme();
        if self.applied_scheme != Some(scheme) {
            scheme.apply(ctx);
            self.applied_scheme = Some(scheme);
        }
    }

    /// Save the screenshot egui delivered for our earlier request, if any.
    fn handle_screenshot(&mut self, ctx: &egui::Context) {
        if !self.screenshot_requested {
            return;
        }
        let shot = ctx.input(|i| {
            i.events.iter().rev().find_map(|e| match e {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        });
        let Some(shot) = shot else {
            return;
        };
        self.screenshot_requested = false;
        match export::prompt_and_save(&shot) {
            Ok(Some(path)) => self.status = Status::Info(format!("Saved {}", path.display())),
            Ok(None) => {}
            Err(err) => {
                tracing::warn!("screenshot export failed: {err}");
                self.status = Status::Error(err.to_string());
            }
        }
    }

    fn reset_view(&mut self, now: f64) {
        let previous = self.session.viewport().zoom();
        self.session.reset_all();
        self.session.animate_zoom_from(previous, now);
    }

    fn reset_axis(&mut self, axis: Axis, now: f64) {
        let previous = self.session.viewport().zoom();
        self.session.reset_axis(axis);
        if axis == Axis::X {
            self.session.animate_zoom_from(previous, now);
        }
    }

    // ── Top bar ──────────────────────────────────────────────────────────────

    fn top_bar(&mut self, ui: &mut egui::Ui) {
        let now = ui.input(|i| i.time);
        ui.horizontal(|ui| {
            if ui
                .button(format!("{} Open", icons::FOLDER_OPEN))
                .on_hover_text("Load a JSON dataset")
                .clicked()
            {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("JSON", &["json"])
                    .pick_file()
                {
                    self.open(path);
                }
            }

            if ui
                .button(format!("{} Reset", icons::ARROW_COUNTER_CLOCKWISE))
                .on_hover_text("Restore the data, axes and zoom")
                .clicked()
            {
                self.reset_view(now);
            }

            let theme_icon = if self.session.color_scheme().is_dark() {
                icons::SUN
            } else {
                icons::MOON
            };
            if ui
                .button(theme_icon)
                .on_hover_text("Toggle light/dark theme")
                .clicked()
            {
                self.session.toggle_theme();
            }

            ui.separator();

            for (tool, icon) in [(Tool::Ruler, icons::RULER), (Tool::Protractor, icons::COMPASS)] {
                let active = self.session.measurement().is_active(tool);
                if ui
                    .selectable_label(active, format!("{icon} {tool}"))
                    .clicked()
                {
                    self.session.toggle_tool(tool);
                }
            }

            if ui
                .button(format!("{} Clear", icons::ERASER))
                .on_hover_text("Remove measurement picks")
                .clicked()
            {
                self.session.clear_measurements();
            }

            if ui
                .button(format!("{} Save PNG", icons::CAMERA))
                .on_hover_text("Save a screenshot of the window")
                .clicked()
            {
                self.screenshot_requested = true;
                ui.ctx()
                    .send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()));
            }

            ui.separator();

            if let Some(path) = self.loader.pending_path() {
                ui.spinner();
                ui.label(format!("Loading {}…", path.display()));
            }
            match &self.status {
                Status::Idle => {}
                Status::Info(text) => {
                    ui.label(text);
                }
                Status::Error(text) => {
                    ui.colored_label(Color32::from_rgb(220, 60, 60), text);
                }
            }
            for m in self.session.completed_measurements() {
                ui.colored_label(m.tool.color(), m.label());
            }
        });
    }

    // ── Plot ─────────────────────────────────────────────────────────────────

    fn plot(&mut self, ui: &mut egui::Ui) {
        let now = ui.input(|i| i.time);
        if self.session.advance(now) {
            ui.ctx().request_repaint();
        }

        let shown = self.session.revision();
        let mut scene = RenderList::new();
        render_scene(&self.session, &mut scene);
        let plot_resp = chart::show_scene(ui, &scene);

        // Plot-area pixels are relative to the chart frame.
        let frame = *plot_resp.transform.frame();
        if frame.width() <= 0.0 || frame.height() <= 0.0 {
            return;
        }
        self.session.set_plot_size(PlotSize {
            width: frame.width(),
            height: frame.height(),
        });
        let to_plot = |pos: Pos2| PixelPoint::new(pos.x - frame.min.x, pos.y - frame.min.y);

        // Plot surface.
        let response = ui.interact(frame, ui.id().with("plot_surface"), Sense::click_and_drag());
        if response.clicked_by(PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                self.session.click(to_plot(pos));
            }
        }
        if self.session.active_drag().is_none() && response.dragged_by(PointerButton::Primary) {
            let delta = response.drag_delta();
            self.session.pan_by(delta.x, delta.y);
        }
        if let Some(hover) = response.hover_pos() {
            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                let sensitivity = self.session.config().zoom.wheel_sensitivity;
                let factor = 2f64.powf(scroll as f64 * sensitivity);
                self.session.zoom_at(to_plot(hover), factor);
            }
        }

        // Axis strips.
        let strips = self.session.config().axis_strips;
        let x_strip = Rect::from_min_max(
            frame.left_bottom(),
            Pos2::new(frame.max.x, frame.max.y + strips.bottom),
        );
        let y_strip = Rect::from_min_max(
            Pos2::new(frame.min.x - strips.left, frame.min.y),
            frame.left_bottom(),
        );
        for (axis, strip) in [(Axis::X, x_strip), (Axis::Y, y_strip)] {
            let id = ui.id().with(("axis_strip", axis.to_string()));
            let strip_resp = ui.interact(strip, id, Sense::click_and_drag());
            self.axis_strip(axis, &strip_resp, to_plot, now);
        }

        // Mouse released anywhere ends the gesture.
        if self.session.active_drag().is_some() && !ui.input(|i| i.pointer.any_down()) {
            self.session.end_drag();
        }

        if self.session.config().features.tooltips {
            let hovered = response
                .hover_pos()
                .and_then(|p| self.session.point_at(to_plot(p)));
            if let Some(point) = hovered {
                response.on_hover_text_at_pointer(format!("X: {}, Y: {}", point.x, point.y));
            }
        }

        // Input handled after the chart was shown lands on the next frame.
        if self.session.revision() != shown {
            ui.ctx().request_repaint();
        }
    }

    fn axis_strip(
        &mut self,
        axis: Axis,
        resp: &egui::Response,
        to_plot: impl Fn(Pos2) -> PixelPoint,
        now: f64,
    ) {
        if resp.double_clicked() {
            self.reset_axis(axis, now);
            return;
        }
        if resp.drag_started() {
            let kind = if resp.dragged_by(PointerButton::Secondary) {
                DragKind::Rescale
            } else {
                DragKind::Pan
            };
            let origin = resp
                .ctx
                .input(|i| i.pointer.press_origin())
                .or_else(|| resp.interact_pointer_pos());
            if let Some(pos) = origin {
                self.session.begin_axis_drag(axis, kind, to_plot(pos));
            }
        }
        let own_drag = self
            .session
            .active_drag()
            .is_some_and(|d| d.axis() == axis);
        if own_drag && resp.dragged() {
            if let Some(pos) = resp.interact_pointer_pos() {
                self.session.drag_to(to_plot(pos));
            }
        }
        if own_drag && resp.drag_stopped() {
            self.session.end_drag();
        }
        if own_drag {
            resp.ctx.set_cursor_icon(CursorIcon::Grabbing);
        } else if resp.hovered() {
            resp.ctx.set_cursor_icon(CursorIcon::Grab);
        }
    }
}

impl eframe::App for ScatterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_loader(ctx);
        self.handle_screenshot(ctx);

        let dropped: Option<PathBuf> =
            ctx.input(|i| i.raw.dropped_files.iter().find_map(|f| f.path.clone()));
        if let Some(path) = dropped {
            self.open(path);
        }

        self.apply_theme(ctx);

        if self.session.config().features.top_bar {
            egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
                self.top_bar(ui);
            });
        }

        let background = self.session.colors().background;
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(background))
            .show(ctx, |ui| {
                if self.session.dataset().is_empty() {
                    ui.centered_and_justified(|ui| {
                        ui.label("Open a JSON file of {\"X\", \"Y\"} points to begin.");
                    });
                    return;
                }
                self.plot(ui);
            });
    }
}
