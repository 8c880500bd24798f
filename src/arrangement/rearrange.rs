//! Slice, permute, and stitch execution

use std::path::Path;

use image::{DynamicImage, ImageBuffer, Pixel, imageops};

use crate::io::error::{RearrangeError, Result};
use crate::io::image::{load_image, save_image};
use crate::spatial::{Dimensions, TileGrid, TilePermutation};

/// Rearrange the tiles of an image file and write the result
///
/// Cuts the image at `image_path` into `tile_size` tiles, reorders them so
/// that destination cell `i` receives source tile `ordering[i]`, and encodes
/// the stitched result to `out_path` in the format implied by its extension.
/// The output keeps the source's pixel dimensions and color mode.
///
/// # Errors
///
/// Returns [`RearrangeError::Validation`] when the tile size or ordering are
/// not valid for the image; no output file is created in that case. Failures
/// while decoding the source or encoding the result surface as
/// [`RearrangeError::ImageLoad`] and [`RearrangeError::ImageExport`].
pub fn rearrange_tiles<P, Q>(
    image_path: P,
    tile_size: Dimensions,
    ordering: &[usize],
    out_path: Q,
) -> Result<()>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let source = load_image(image_path.as_ref())?;
    let image_size = Dimensions::new(source.width(), source.height());

    let grid =
        TileGrid::from_dimensions(image_size, tile_size).ok_or(RearrangeError::Validation)?;
    let permutation = TilePermutation::new(ordering, grid.tile_count())
        .ok_or(RearrangeError::Validation)?;

    let canvas = permute_image(&source, grid, tile_size, &permutation)?;
    save_image(&canvas, out_path.as_ref())
}

/// Rearrange the tiles of a decoded image in memory
///
/// The filesystem-free core of [`rearrange_tiles`], exposed so the
/// transformation can be exercised and composed without touching disk.
///
/// # Errors
///
/// Returns [`RearrangeError::Validation`] when `tile_size` does not tile
/// `source` exactly or `permutation` covers a different number of tiles.
pub fn permute_tiles(
    source: &DynamicImage,
    tile_size: Dimensions,
    permutation: &TilePermutation,
) -> Result<DynamicImage> {
    let image_size = Dimensions::new(source.width(), source.height());
    let grid =
        TileGrid::from_dimensions(image_size, tile_size).ok_or(RearrangeError::Validation)?;
    if permutation.len() != grid.tile_count() {
        return Err(RearrangeError::Validation);
    }
    permute_image(source, grid, tile_size, permutation)
}

// Dispatch on the concrete pixel buffer so every color mode round-trips
// losslessly. DynamicImage is non-exhaustive; unknown variants fall back
// to RGBA8.
fn permute_image(
    source: &DynamicImage,
    grid: TileGrid,
    tile: Dimensions,
    permutation: &TilePermutation,
) -> Result<DynamicImage> {
    match source {
        DynamicImage::ImageLuma8(buffer) => {
            permute_buffer(buffer, grid, tile, permutation).map(DynamicImage::ImageLuma8)
        }
        DynamicImage::ImageLumaA8(buffer) => {
            permute_buffer(buffer, grid, tile, permutation).map(DynamicImage::ImageLumaA8)
        }
        DynamicImage::ImageRgb8(buffer) => {
            permute_buffer(buffer, grid, tile, permutation).map(DynamicImage::ImageRgb8)
        }
        DynamicImage::ImageRgba8(buffer) => {
            permute_buffer(buffer, grid, tile, permutation).map(DynamicImage::ImageRgba8)
        }
        DynamicImage::ImageLuma16(buffer) => {
            permute_buffer(buffer, grid, tile, permutation).map(DynamicImage::ImageLuma16)
        }
        DynamicImage::ImageLumaA16(buffer) => {
            permute_buffer(buffer, grid, tile, permutation).map(DynamicImage::ImageLumaA16)
        }
        DynamicImage::ImageRgb16(buffer) => {
            permute_buffer(buffer, grid, tile, permutation).map(DynamicImage::ImageRgb16)
        }
        DynamicImage::ImageRgba16(buffer) => {
            permute_buffer(buffer, grid, tile, permutation).map(DynamicImage::ImageRgba16)
        }
        DynamicImage::ImageRgb32F(buffer) => {
            permute_buffer(buffer, grid, tile, permutation).map(DynamicImage::ImageRgb32F)
        }
        DynamicImage::ImageRgba32F(buffer) => {
            permute_buffer(buffer, grid, tile, permutation).map(DynamicImage::ImageRgba32F)
        }
        _ => permute_buffer(&source.to_rgba8(), grid, tile, permutation)
            .map(DynamicImage::ImageRgba8),
    }
}

// Extraction and reassembly both walk the grid in row-major order, so the
// tile at vector position r * cols + c is the source cell (r, c).
fn permute_buffer<P>(
    source: &ImageBuffer<P, Vec<P::Subpixel>>,
    grid: TileGrid,
    tile: Dimensions,
    permutation: &TilePermutation,
) -> Result<ImageBuffer<P, Vec<P::Subpixel>>>
where
    P: Pixel + 'static,
    P::Subpixel: 'static,
{
    let mut tiles = Vec::with_capacity(grid.tile_count());
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let region = imageops::crop_imm(
                source,
                col * tile.width,
                row * tile.height,
                tile.width,
                tile.height,
            );
            tiles.push(region.to_image());
        }
    }

    let mut canvas = ImageBuffer::new(source.width(), source.height());
    for (destination, source_index) in permutation.iter().enumerate() {
        let patch = tiles.get(source_index).ok_or(RearrangeError::TileIndex {
            index: source_index,
            tile_count: tiles.len(),
        })?;
        let (row, col) = grid.position_of(destination);
        imageops::replace(
            &mut canvas,
            patch,
            i64::from(col * tile.width),
            i64::from(row * tile.height),
        );
    }

    Ok(canvas)
}
