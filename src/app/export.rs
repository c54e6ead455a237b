//! PNG export of window screenshots.

use std::path::{Path, PathBuf};

use eframe::egui::ColorImage;
use image::RgbaImage;

use crate::error::{Result, ScatterError};

/// Suggested file name for a screenshot taken now.
pub fn default_file_name() -> String {
    chrono::Local::now()
        .format("scatterscope_%Y%m%d_%H%M%S.png")
        .to_string()
}

/// Encode an egui screenshot as PNG at `path`.
pub fn save_png(shot: &ColorImage, path: &Path) -> Result<()> {
    let [w, h] = shot.size;
    let mut out = RgbaImage::new(w as u32, h as u32);
    for (i, px) in shot.pixels.iter().enumerate() {
        let (x, y) = (i % w, i / w);
        out.put_pixel(x as u32, y as u32, image::Rgba(px.to_srgba_unmultiplied()));
    }
    out.save(path).map_err(|source| ScatterError::Export {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), width = w, height = h, "screenshot saved");
    Ok(())
}

/// Ask where to save, then write the PNG. `Ok(None)` when the dialog was cancelled.
pub(super) fn prompt_and_save(shot: &ColorImage) -> Result<Option<PathBuf>> {
    let Some(path) = rfd::FileDialog::new()
        .add_filter("PNG", &["png"])
        .set_file_name(default_file_name())
        .save_file()
    else {
        return Ok(None);
    };
    save_png(shot, &path)?;
    Ok(Some(path))
}
