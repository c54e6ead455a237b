//! Color scheme definitions for the scatter plot.
//!
//! Theme state is a single dark/light flag. Everything colour-related the
//! renderer needs is looked up from a static table keyed by that flag, so
//! toggling never touches data, domains or measurements.

use eframe::egui::{Color32, Context, Visuals};

/// Visual theme for the plot UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ColorScheme {
    /// Dark background, light grey points (initial theme).
    #[default]
    Dark,
    /// White background, steel-blue points.
    Light,
}

/// Presentation colours for one theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeColors {
    /// Fill of plotted data points.
    pub point: Color32,
    /// Grid lines and tick labels.
    pub grid: Color32,
    /// Plot surface background.
    pub background: Color32,
}

const DARK: ThemeColors = ThemeColors {
    point: Color32::from_rgb(0xcc, 0xcc, 0xcc),
    grid: Color32::from_rgb(0x88, 0x88, 0x88),
    background: Color32::from_rgb(0x44, 0x44, 0x44),
};

const LIGHT: ThemeColors = ThemeColors {
    // steelblue
    point: Color32::from_rgb(70, 130, 180),
    grid: Color32::from_rgb(0x66, 0x66, 0x66),
    background: Color32::from_rgb(0xff, 0xff, 0xff),
};

impl ColorScheme {
    /// All built-in schemes (useful for combo-box UIs).
    pub fn all() -> &'static [ColorScheme] {
        &[ColorScheme::Dark, ColorScheme::Light]
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ColorScheme::Dark => "Dark",
            ColorScheme::Light => "Light",
        }
    }

    pub fn is_dark(&self) -> bool {
        *self == ColorScheme::Dark
    }

    /// The other scheme.
    pub fn toggled(&self) -> Self {
        match self {
            ColorScheme::Dark => ColorScheme::Light,
            ColorScheme::Light => ColorScheme::Dark,
        }
    }

    /// Colour table entry for this scheme.
    pub fn colors(&self) -> &'static ThemeColors {
        match self {
            ColorScheme::Dark => &DARK,
            ColorScheme::Light => &LIGHT,
        }
    }

    /// Apply this scheme's visuals to an egui context.
    pub fn apply(&self, ctx: &Context) {
        let mut v = match self {
            ColorScheme::Dark => Visuals::dark(),
            ColorScheme::Light => Visuals::light(),
        };
        let colors = self.colors();
        v.extreme_bg_color = colors.background;
        ctx.set_visuals(v);
    }
}
