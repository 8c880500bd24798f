//! Validates divisibility and permutation checking over image and tile sizes

use retile::spatial::Dimensions;
use retile::valid_input;

#[test]
fn test_exact_tiling_with_identity_ordering() {
    // 256x256 cut into 128x128 tiles: a 2x2 grid of four tiles
    assert!(valid_input(
        Dimensions::new(256, 256),
        Dimensions::new(128, 128),
        &[0, 1, 2, 3]
    ));
}

#[test]
fn test_tile_size_must_divide_image_evenly() {
    let identity: Vec<usize> = (0..4).collect();
    assert!(!valid_input(
        Dimensions::new(256, 256),
        Dimensions::new(127, 127),
        &identity
    ));
    assert!(!valid_input(
        Dimensions::new(256, 256),
        Dimensions::new(129, 129),
        &identity
    ));

    // 100 mod 30 != 0, so no ordering can make this tiling valid
    let nine: Vec<usize> = (0..9).collect();
    assert!(!valid_input(
        Dimensions::new(100, 100),
        Dimensions::new(30, 30),
        &nine
    ));
}

#[test]
fn test_ordering_must_not_repeat_tiles() {
    assert!(!valid_input(
        Dimensions::new(256, 256),
        Dimensions::new(128, 128),
        &[0, 1, 2, 2]
    ));
}

#[test]
fn test_ordering_must_cover_every_tile() {
    let image = Dimensions::new(256, 256);
    let tile = Dimensions::new(128, 128);
    assert!(!valid_input(image, tile, &[0, 1, 2]));
    assert!(!valid_input(image, tile, &[0, 1, 2, 3, 4]));
    assert!(!valid_input(image, tile, &[]));
}

#[test]
fn test_ordering_values_must_be_in_range() {
    // Correct length and no duplicates, but 4 names a tile that does not exist
    assert!(!valid_input(
        Dimensions::new(256, 256),
        Dimensions::new(128, 128),
        &[0, 1, 2, 4]
    ));
}

#[test]
fn test_zero_tile_dimension_is_rejected_not_a_fault() {
    let image = Dimensions::new(256, 256);
    assert!(!valid_input(image, Dimensions::new(0, 128), &[0]));
    assert!(!valid_input(image, Dimensions::new(128, 0), &[0]));
    assert!(!valid_input(image, Dimensions::new(0, 0), &[]));
}

#[test]
fn test_rectangular_tiles_and_grids() {
    // 256x256 cut into full-width strips: a 4x1 grid
    assert!(valid_input(
        Dimensions::new(256, 256),
        Dimensions::new(256, 64),
        &[3, 1, 2, 0]
    ));

    // 6x2 grid from rectangular tiles on a rectangular image
    let reversed: Vec<usize> = (0..12).rev().collect();
    assert!(valid_input(
        Dimensions::new(300, 100),
        Dimensions::new(50, 50),
        &reversed
    ));
}
