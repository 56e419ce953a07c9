use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use grass_tint::{OutputTargets, TextureSet};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Tint Minecraft grass top + side overlay with a biome colormap, then composite onto side base"
)]
struct Args {
    /// Biome temperature (0..1)
    #[arg(long, allow_negative_numbers = true)]
    temperature: f64,

    /// Biome downfall (0..1)
    #[arg(long, allow_negative_numbers = true)]
    downfall: f64,

    /// Top texture (grayscale) [default: grass_block_top_512.png]
    #[arg(long)]
    top: Option<PathBuf>,

    /// Side overlay (grass only, transparent dirt) [default: grass_block_side_overlay_512.png]
    #[arg(long)]
    side_overlay: Option<PathBuf>,

    /// Side base (dirt + grass) [default: grass_block_side_512.png]
    #[arg(long)]
    side_base: Option<PathBuf>,

    /// 256x256 grass colormap [default: grass_colourmap.png]
    #[arg(long)]
    colormap: Option<PathBuf>,

    /// Directory for outputs without an explicit path [default: out]
    #[arg(long)]
    out_dir: Option<PathBuf>,

    /// Output path for the coloured top [default: <out-dir>/grass_block_top_<temp>_<downfall>.png]
    #[arg(long)]
    out_top: Option<PathBuf>,

    /// Output path for the coloured side [default: <out-dir>/grass_block_side_<temp>_<downfall>.png]
    #[arg(long)]
    out_side: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let defaults = TextureSet::default();
    let textures = TextureSet {
        top: args.top.unwrap_or(defaults.top),
        side_overlay: args.side_overlay.unwrap_or(defaults.side_overlay),
        side_base: args.side_base.unwrap_or(defaults.side_base),
        colormap: args.colormap.unwrap_or(defaults.colormap),
    };
    let outputs = OutputTargets {
        dir: args.out_dir.unwrap_or_else(|| OutputTargets::default().dir),
        top: args.out_top,
        side: args.out_side,
    };

    let report = grass_tint::tint_files(&textures, args.temperature, args.downfall, &outputs)?;

    println!("Wrote: {}", report.top.display());
    println!("Wrote: {}", report.side.display());
    Ok(())
}
