//! Deterministic rearrangement of an image's rectangular tiles
//!
//! The crate cuts a source image into a grid of equally sized tiles,
//! reorders the tiles according to a caller-supplied permutation, and
//! stitches them back into a new image of the same size and color mode.

#![forbid(unsafe_code)]

/// Validation and slice-permute-stitch execution
pub mod arrangement;
/// Input/output operations and error handling
pub mod io;
/// Dimension, grid, and permutation value types
pub mod spatial;

pub use arrangement::{permute_tiles, rearrange_tiles, valid_input};
pub use io::error::{RearrangeError, Result};
pub use spatial::{Dimensions, TileGrid, TilePermutation};
