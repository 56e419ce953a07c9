//! Biome tinting for grayscale Minecraft grass textures.
//!
//! A colour is sampled from a grass colormap at the biome's
//! temperature/downfall, multiplied into the grayscale top and side-overlay
//! masks, and the tinted overlay is composited onto the side base.

use image::{DynamicImage, ImageFormat, Rgb, RgbaImage};
use std::path::{Path, PathBuf};

pub mod biome;
pub mod blend;
pub mod colormap;
pub mod error;

pub use biome::BiomeCoordinate;
pub use blend::{composite, tint};
pub use colormap::{colormap_coordinates, sample, COLORMAP_SIZE};
pub use error::{Result, TintError};

// --- pipeline ---

/// Decoded inputs for a single run.
#[derive(Debug, Clone)]
pub struct TintInputs {
    pub top: RgbaImage,
    pub side_overlay: RgbaImage,
    pub side_base: RgbaImage,
    pub colormap: RgbaImage,
    pub coordinate: BiomeCoordinate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TintedTextures {
    pub colour: Rgb<u8>,
    pub top: RgbaImage,
    pub side: RgbaImage,
}

/// Sample once, tint both masks, composite the side.
pub fn run(inputs: &TintInputs) -> Result<TintedTextures> {
    let colour = colormap::sample(&inputs.colormap, inputs.coordinate)?;
    let top = blend::tint(&inputs.top, colour);
    let overlay = blend::tint(&inputs.side_overlay, colour);
    let side = blend::composite(&inputs.side_base, &overlay)?;

    Ok(TintedTextures { colour, top, side })
}

// --- file front end ---

/// Input texture paths. Defaults match the vanilla 512px resource pack names.
#[derive(Debug, Clone)]
pub struct TextureSet {
    pub top: PathBuf,
    pub side_overlay: PathBuf,
    pub side_base: PathBuf,
    pub colormap: PathBuf,
}

impl Default for TextureSet {
    fn default() -> Self {
        Self {
            top: PathBuf::from("grass_block_top_512.png"),
            side_overlay: PathBuf::from("grass_block_side_overlay_512.png"),
            side_base: PathBuf::from("grass_block_side_512.png"),
            colormap: PathBuf::from("grass_colourmap.png"),
        }
    }
}

/// Where outputs go. Explicit paths win over names derived from `dir`.
#[derive(Debug, Clone)]
pub struct OutputTargets {
    pub dir: PathBuf,
    pub top: Option<PathBuf>,
    pub side: Option<PathBuf>,
}

impl Default for OutputTargets {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("out"),
            top: None,
            side: None,
        }
    }
}

impl OutputTargets {
    /// Resolve `(top, side)` output paths for `coordinate`.
    pub fn resolve(&self, coordinate: BiomeCoordinate) -> (PathBuf, PathBuf) {
        let suffix = format!(
            "{}_{}",
            format_coordinate(coordinate.temperature()),
            format_coordinate(coordinate.downfall())
        );
        let top = self
            .top
            .clone()
            .unwrap_or_else(|| self.dir.join(format!("grass_block_top_{suffix}.png")));
        let side = self
            .side
            .clone()
            .unwrap_or_else(|| self.dir.join(format!("grass_block_side_{suffix}.png")));
        (top, side)
    }
}

/// Two decimals with trailing zeros and dot stripped: `0.50` -> `0.5`, `1.00` -> `1`.
pub fn format_coordinate(value: f64) -> String {
    let s = format!("{value:.2}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[derive(Debug, Clone, PartialEq)]
pub struct TintReport {
    pub colour: Rgb<u8>,
    pub top: PathBuf,
    pub side: PathBuf,
}

/// Load the textures, tint them and write both outputs.
///
/// The coordinate is checked before any file is touched, and nothing is
/// left on disk unless both outputs were written.
pub fn tint_files(
    textures: &TextureSet,
    temperature: f64,
    downfall: f64,
    outputs: &OutputTargets,
) -> Result<TintReport> {
    let coordinate = BiomeCoordinate::new(temperature, downfall)?;
    let (top_path, side_path) = outputs.resolve(coordinate);
    if top_path == side_path {
        return Err(TintError::OutputCollision { path: top_path });
    }

    let inputs = TintInputs {
        top: load_rgba(&textures.top)?,
        side_overlay: load_rgba(&textures.side_overlay)?,
        side_base: load_rgba(&textures.side_base)?,
        colormap: load_rgba(&textures.colormap)?,
        coordinate,
    };

    let tinted = run(&inputs)?;
    let [r, g, b] = tinted.colour.0;
    log::info!(
        "biome RGB ({r}, {g}, {b}) from temperature={:.3}, downfall={:.3}",
        coordinate.temperature(),
        coordinate.downfall()
    );

    let top_png = encode_png(tinted.top)?;
    let side_png = encode_png(tinted.side)?;

    ensure_parent_dir(&top_path)?;
    ensure_parent_dir(&side_path)?;

    write_file(&top_path, &top_png)?;
    if let Err(e) = write_file(&side_path, &side_png) {
        remove_partial(&top_path);
        return Err(e);
    }

    Ok(TintReport {
        colour: tinted.colour,
        top: top_path,
        side: side_path,
    })
}

// --- in-memory front end ---

/// Tint encoded images (png/jpg/webp/etc) and return `(top, side)` as PNG bytes.
///
/// The coordinate is checked before anything is decoded.
pub fn tint_encoded(
    top: &[u8],
    side_overlay: &[u8],
    side_base: &[u8],
    colormap: &[u8],
    temperature: f64,
    downfall: f64,
) -> Result<(Vec<u8>, Vec<u8>)> {
    let coordinate = BiomeCoordinate::new(temperature, downfall)?;
    let inputs = TintInputs {
        top: decode_rgba("top", top)?,
        side_overlay: decode_rgba("side overlay", side_overlay)?,
        side_base: decode_rgba("side base", side_base)?,
        colormap: decode_rgba("colormap", colormap)?,
        coordinate,
    };

    let tinted = run(&inputs)?;
    Ok((encode_png(tinted.top)?, encode_png(tinted.side)?))
}

// --- codec helpers ---

pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path)
        .map_err(|source| TintError::Read {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();
    log::debug!("loaded {} ({}x{})", path.display(), img.width(), img.height());
    Ok(img)
}

fn decode_rgba(what: &'static str, bytes: &[u8]) -> Result<RgbaImage> {
    Ok(image::load_from_memory(bytes)
        .map_err(|source| TintError::Decode { what, source })?
        .to_rgba8())
}

pub fn encode_png(img: RgbaImage) -> Result<Vec<u8>> {
    let mut out: Vec<u8> = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut std::io::Cursor::new(&mut out), ImageFormat::Png)
        .map_err(|source| TintError::Encode { source })?;
    Ok(out)
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            std::fs::create_dir_all(dir).map_err(|source| TintError::CreateDir {
                path: dir.to_path_buf(),
                source,
            })
        }
        _ => Ok(()),
    }
}

// Removes any truncated file on failure.
fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Err(source) = std::fs::write(path, bytes) {
        remove_partial(path);
        return Err(TintError::Write {
            path: path.to_path_buf(),
            source,
        });
    }
    log::info!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

fn remove_partial(path: &Path) {
    if !path.is_file() {
        return;
    }
    if let Err(e) = std::fs::remove_file(path) {
        log::warn!("failed to remove partial output {}: {e}", path.display());
    }
}
