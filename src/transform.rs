use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageBuffer, Rgba, RgbaImage};

/// Edge length of the square output canvas, in pixels.
pub const CANVAS_SIZE: u32 = 1024;

/// Fraction of the canvas edge reserved for the icon content. Android
/// adaptive icons get masked aggressively, so the foreground layer
/// needs generous transparent padding around it.
pub const CONTENT_RATIO: f32 = 0.60;

/// Sizing parameters for the fit-and-center transform.
#[derive(Debug, Clone, Copy)]
pub struct PadParams {
    pub canvas_size: u32,
    pub content_ratio: f32,
}

impl Default for PadParams {
    fn default() -> Self {
        Self {
            canvas_size: CANVAS_SIZE,
            content_ratio: CONTENT_RATIO,
        }
    }
}

impl PadParams {
    /// Largest pixel dimension the (possibly scaled) source may occupy
    /// on the canvas. Truncates, so the content never exceeds the ratio.
    pub fn max_content(&self) -> u32 {
        (self.canvas_size as f32 * self.content_ratio) as u32
    }
}

/// Fits the source image within `max_content` pixels (downscaling only,
/// never upscaling) and centers it on a fresh transparent canvas of
/// `canvas_size × canvas_size`.
///
/// Scaling is uniform, so the aspect ratio is preserved exactly. Scaled
/// dimensions and centering offsets truncate toward zero; when the
/// leftover padding is odd the image sits one pixel off true center.
pub fn fit_and_center(img: &DynamicImage, params: PadParams) -> RgbaImage {
    let max_content = params.max_content();
    let (w, h) = (img.width(), img.height());

    let scaled;
    let content = if w > max_content || h > max_content {
        let scale = max_content as f32 / w.max(h) as f32;
        let new_w = (w as f32 * scale) as u32;
        let new_h = (h as f32 * scale) as u32;
        log::debug!("downscaling {}x{} -> {}x{} (scale {:.4})", w, h, new_w, new_h, scale);
        scaled = img.resize_exact(new_w, new_h, FilterType::Lanczos3);
        &scaled
    } else {
        img
    };
    let content = content.to_rgba8();

    // New ImageBuffer is zero-filled, i.e. transparent black.
    let mut canvas: RgbaImage =
        ImageBuffer::<Rgba<u8>, Vec<u8>>::new(params.canvas_size, params.canvas_size);

    let dx = (params.canvas_size - content.width()) / 2;
    let dy = (params.canvas_size - content.height()) / 2;
    log::debug!("compositing at offset ({}, {})", dx, dy);

    imageops::overlay(&mut canvas, &content, dx as i64, dy as i64);

    canvas
}
