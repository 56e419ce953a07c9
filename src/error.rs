use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TintError {
    #[error("{name} must be within [0.0, 1.0], got {value}")]
    InvalidCoordinate { name: &'static str, value: f64 },

    #[error("{what} must be {expected_width}x{expected_height}, got {width}x{height}")]
    DimensionMismatch {
        what: &'static str,
        expected_width: u32,
        expected_height: u32,
        width: u32,
        height: u32,
    },

    #[error("failed to open input image: {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to decode {what} bytes as an image")]
    Decode {
        what: &'static str,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode output PNG")]
    Encode {
        #[source]
        source: image::ImageError,
    },

    #[error("top and side outputs both resolve to {}", .path.display())]
    OutputCollision { path: PathBuf },

    #[error("failed to create output directory: {}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to save output image: {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, TintError>;

impl TintError {
    /// Size check shared by the colormap and paired-image validations.
    pub(crate) fn check_dimensions(
        what: &'static str,
        (expected_width, expected_height): (u32, u32),
        (width, height): (u32, u32),
    ) -> Result<()> {
        if (width, height) == (expected_width, expected_height) {
            return Ok(());
        }
        Err(TintError::DimensionMismatch {
            what,
            expected_width,
            expected_height,
            width,
            height,
        })
    }
}
