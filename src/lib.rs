//! Scatterscope crate root: re-exports and module wiring.
//!
//! An interactive 2D scatter plot built on egui/eframe and egui_plot, with horizontal
//! pan/zoom, per-axis drag rescaling, a light/dark theme and ruler/protractor
//! measurement tools.
//!
//! The crate is split into:
//! - `data`: dataset, viewport transform, drag gestures, measurements, session
//! - `scene`: the `Renderer` boundary and scene orchestration
//! - `config`: shared configuration
//! - `color_scheme`: theme colour tables
//! - `app`: the native egui frontend

pub mod app;
pub mod color_scheme;
pub mod config;
pub mod data;
pub mod error;
pub mod scene;

// Public re-exports for a compact external API
pub use app::{run_scatter, ScatterApp};
pub use color_scheme::{ColorScheme, ThemeColors};
pub use config::{
    AxisStrips, DragSensitivity, FeatureFlags, OverlayStyle, PlotSize, ScatterConfig, ZoomLimits,
};
pub use data::dataset::{Dataset, PixelPoint, Point};
pub use data::domain::{Axis, Domain};
pub use data::measurement::{Measurement, Tool};
pub use data::session::PlotSession;
pub use error::{Result, ScatterError};
pub use scene::{render_scene, RenderList, Renderer};
