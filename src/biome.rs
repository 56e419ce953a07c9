use crate::error::{Result, TintError};

/// Biome climate values used to index a colormap.
///
/// Both components are guaranteed to lie in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BiomeCoordinate {
    temperature: f64,
    downfall: f64,
}

impl BiomeCoordinate {
    pub fn new(temperature: f64, downfall: f64) -> Result<Self> {
        check_unit("temperature", temperature)?;
        check_unit("downfall", downfall)?;
        Ok(Self {
            temperature,
            downfall,
        })
    }

    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    pub fn downfall(&self) -> f64 {
        self.downfall
    }

    /// Downfall scaled by temperature. This is what keeps real biomes inside
    /// the lower-left triangle of the colormap.
    pub fn adjusted_downfall(&self) -> f64 {
        self.downfall * self.temperature
    }
}

// NaN fails the range check too.
fn check_unit(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(TintError::InvalidCoordinate { name, value })
    }
}
