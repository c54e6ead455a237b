//! Native window entry point.

use eframe::egui;

use crate::config::ScatterConfig;

use super::scatter_app::ScatterApp;

/// Open the scatter plot in a native window.
///
/// Blocks until the window is closed.
pub fn run_scatter(mut cfg: ScatterConfig) -> eframe::Result<()> {
    let title = cfg.title.clone();
    let mut opts = cfg.native_options.take().unwrap_or_default();

    if opts.viewport.icon.is_none() {
        if let Some(icon) = app_icon(64) {
            opts.viewport = opts.viewport.clone().with_icon(icon);
        }
    }

    // Room for the default plot frame plus axis labels and the top bar.
    if opts.viewport.inner_size.is_none() {
        let strips = cfg.axis_strips;
        let size = egui::vec2(
            cfg.plot_size.width + strips.left + 36.0,
            cfg.plot_size.height + strips.bottom + 76.0,
        );
        opts.viewport = opts.viewport.clone().with_inner_size(size);
    }

    let app = ScatterApp::new(cfg);
    tracing::info!(%title, "starting native window");
    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}

/// Rasterize the bundled `icon.svg` into a square `size`×`size` icon.
fn app_icon(size: u32) -> Option<egui::IconData> {
    let svg = include_bytes!("../../icon.svg");
    let tree = usvg::Tree::from_data(svg, &usvg::Options::default()).ok()?;
    let natural = tree.size();
    let scale = size as f32 / natural.width().max(natural.height());
    let mut pixmap = tiny_skia::Pixmap::new(size, size)?;
    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Some(egui::IconData {
        rgba: pixmap.take(),
        width: size,
        height: size,
    })
}
