//! Tile rearrangement pipeline
//!
//! This module contains the two components used in sequence:
//! - A pure validation predicate over image size, tile size, and ordering
//! - The slice, permute, and stitch execution that produces the output image

/// Slice, permute, and stitch execution
pub mod rearrange;
/// Pure validation predicate
pub mod validation;

pub use rearrange::{permute_tiles, rearrange_tiles};
pub use validation::valid_input;
