//! Native egui frontend.
//!
//! | Sub-module      | Responsibility |
//! | --------------- | -------------- |
//! | [`scatter_app`] | [`ScatterApp`]: top bar, pointer handling, loader polling |
//! | [`export`]      | PNG screenshot export |
//! | [`chart`]       | Replays the recorded scene onto an `egui_plot` chart |
//! | [`run`]         | [`run_scatter()`] native window entry point |

mod chart;
pub mod export;
mod run;
mod scatter_app;

pub use run::run_scatter;
pub use scatter_app::ScatterApp;
