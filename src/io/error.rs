//! Error types for rearrangement operations

use std::fmt;
use std::path::PathBuf;

/// User-facing message for a rejected tile size or ordering
pub const VALIDATION_MESSAGE: &str =
    "The tile size or ordering are not valid for the given image";

/// Main error type for all rearrangement operations
#[derive(Debug)]
pub enum RearrangeError {
    /// Tile size or ordering rejected for the given image
    ///
    /// Raised when the tile size does not divide the image evenly, a tile
    /// dimension is zero, or the ordering is not a permutation of the tile
    /// index space. No output file exists when this is returned.
    Validation,

    /// Failed to load the source image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to encode or write the output image
    ImageExport {
        /// Path where the export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// Tile index exceeds the extracted tile set
    ///
    /// Unreachable through a validated ordering; kept so the reassembly
    /// lookup stays total instead of panicking.
    TileIndex {
        /// The out-of-bounds tile index
        index: usize,
        /// Number of extracted tiles
        tile_count: usize,
    },
}

impl fmt::Display for RearrangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation => f.write_str(VALIDATION_MESSAGE),
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::TileIndex { index, tile_count } => {
                write!(
                    f,
                    "Tile index {index} is out of bounds ({tile_count} tiles extracted)"
                )
            }
        }
    }
}

impl std::error::Error for RearrangeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for rearrangement results
pub type Result<T> = std::result::Result<T, RearrangeError>;
