//! Command-line interface for rearranging the tiles of a single image

use std::path::PathBuf;

use clap::Parser;

use crate::arrangement::rearrange_tiles;
use crate::io::error::Result;
use crate::spatial::Dimensions;

/// Command-line arguments for the tile rearrangement tool
#[derive(Parser, Debug)]
#[command(name = "retile")]
#[command(
    author,
    version,
    about = "Rearrange the tiles of an image by a permutation"
)]
pub struct Cli {
    /// Source image file
    #[arg(value_name = "IMAGE")]
    pub input: PathBuf,

    /// Tile size as WxH (e.g. 128x128)
    #[arg(short, long, value_parser = parse_tile_size)]
    pub tile_size: Dimensions,

    /// Source tile index for each destination position in row-major order,
    /// comma separated (e.g. 3,2,1,0)
    #[arg(long, value_delimiter = ',', required = true)]
    pub ordering: Vec<usize>,

    /// Output image file; the format follows the extension
    #[arg(short, long)]
    pub output: PathBuf,
}

impl Cli {
    /// Execute the rearrangement described by the arguments
    ///
    /// # Errors
    ///
    /// Returns a validation error when the tile size or ordering do not fit
    /// the input image, or an I/O error from loading the source or writing
    /// the output.
    // Allow print for user feedback when the result is written
    #[allow(clippy::print_stderr)]
    pub fn run(&self) -> Result<()> {
        rearrange_tiles(&self.input, self.tile_size, &self.ordering, &self.output)?;
        eprintln!("Wrote {}", self.output.display());
        Ok(())
    }
}

/// Parse a "WxH" tile size argument into [`Dimensions`]
fn parse_tile_size(value: &str) -> std::result::Result<Dimensions, String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WxH (e.g. 128x128), got '{value}'"))?;

    let width = width
        .parse::<u32>()
        .map_err(|error| format!("invalid tile width '{width}': {error}"))?;
    let height = height
        .parse::<u32>()
        .map_err(|error| format!("invalid tile height '{height}': {error}"))?;

    Ok(Dimensions::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_size_parsing() {
        assert_eq!(parse_tile_size("128x128"), Ok(Dimensions::new(128, 128)));
        assert_eq!(parse_tile_size("32X64"), Ok(Dimensions::new(32, 64)));
        assert!(parse_tile_size("128").is_err());
        assert!(parse_tile_size("ax128").is_err());
        assert!(parse_tile_size("128x-1").is_err());
    }
}
