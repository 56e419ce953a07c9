use image::{ImageBuffer, Rgb, Rgba, RgbaImage};

use crate::error::{Result, TintError};

// --- multiply tint ---

/// Multiply `colour` into a grayscale mask.
///
/// Only the red channel of the mask is read. Alpha is copied through, so
/// transparent areas of an overlay stay transparent.
pub fn tint(mask: &RgbaImage, colour: Rgb<u8>) -> RgbaImage {
    let (w, h) = mask.dimensions();
    let mut out: RgbaImage = ImageBuffer::new(w, h);
    let [cr, cg, cb] = colour.0;

    for (x, y, p) in mask.enumerate_pixels() {
        let [gray, _, _, a] = p.0;
        out.put_pixel(
            x,
            y,
            Rgba([
                multiply(gray, cr),
                multiply(gray, cg),
                multiply(gray, cb),
                a,
            ]),
        );
    }

    out
}

// g * c / 255 never lands on .5, so the rounding mode cannot matter here.
fn multiply(gray: u8, channel: u8) -> u8 {
    (gray as f32 * channel as f32 / 255.0).round().clamp(0.0, 255.0) as u8
}

// --- alpha compositing ---

/// Blend `overlay` over `base` using the overlay's alpha. The result is
/// fully opaque.
pub fn composite(base: &RgbaImage, overlay: &RgbaImage) -> Result<RgbaImage> {
    TintError::check_dimensions("side overlay", base.dimensions(), overlay.dimensions())?;

    let (w, h) = base.dimensions();
    let mut out: RgbaImage = ImageBuffer::new(w, h);

    for (x, y, px) in base.enumerate_pixels() {
        let under = px.0;
        let over = overlay.get_pixel(x, y).0;
        let a = (over[3] as f32) / 255.0;

        let r = (under[0] as f32 * (1.0 - a) + over[0] as f32 * a).round() as u8;
        let g = (under[1] as f32 * (1.0 - a) + over[1] as f32 * a).round() as u8;
        let b = (under[2] as f32 * (1.0 - a) + over[2] as f32 * a).round() as u8;

        out.put_pixel(x, y, Rgba([r, g, b, 255]));
    }

    Ok(out)
}
