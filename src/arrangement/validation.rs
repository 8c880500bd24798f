//! Validation of tile size and ordering against image dimensions

use crate::spatial::{Dimensions, TileGrid, TilePermutation};

/// Test whether an image of the given size can be rearranged
///
/// Passes only when the tile size is positive and divides both image
/// dimensions without remainder, and `ordering` is a permutation of the
/// resulting tile index space: one entry per tile, no duplicate, no
/// out-of-range value. Total over arbitrary input, with no side effects.
pub fn valid_input(image_size: Dimensions, tile_size: Dimensions, ordering: &[usize]) -> bool {
    TileGrid::from_dimensions(image_size, tile_size)
        .and_then(|grid| TilePermutation::new(ordering, grid.tile_count()))
        .is_some()
}
