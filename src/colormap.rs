use image::{Rgb, RgbaImage};

use crate::biome::BiomeCoordinate;
use crate::error::{Result, TintError};

/// Colormaps are always this many pixels on each side.
pub const COLORMAP_SIZE: u32 = 256;

const MAX_INDEX: f64 = (COLORMAP_SIZE - 1) as f64;

/// Pixel `(x, y)` that a biome reads from the colormap.
///
/// Temperature runs right to left and adjusted downfall bottom to top, so
/// the origin of the climate axes is the bottom-right corner.
pub fn colormap_coordinates(coordinate: BiomeCoordinate) -> (u32, u32) {
    let x = axis_index(1.0 - coordinate.temperature());
    let y = axis_index(1.0 - coordinate.adjusted_downfall());
    (x, y)
}

fn axis_index(v: f64) -> u32 {
    (v * MAX_INDEX).floor().clamp(0.0, MAX_INDEX) as u32
}

/// Sample the biome colour for `coordinate`. Alpha is dropped.
pub fn sample(colormap: &RgbaImage, coordinate: BiomeCoordinate) -> Result<Rgb<u8>> {
    TintError::check_dimensions(
        "colormap",
        (COLORMAP_SIZE, COLORMAP_SIZE),
        colormap.dimensions(),
    )?;

    let (x, y) = colormap_coordinates(coordinate);
    let [r, g, b, _] = colormap.get_pixel(x, y).0;
    log::debug!(
        "colormap sample t={} d={} -> ({x}, {y}) = [{r}, {g}, {b}]",
        coordinate.temperature(),
        coordinate.downfall()
    );
    Ok(Rgb([r, g, b]))
}
