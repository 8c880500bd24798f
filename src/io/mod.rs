//! Input/output operations and error handling
//!
//! This module contains the crate's outer surfaces:
//! - Command-line interface for the binary
//! - Error types shared across all operations
//! - Image file loading and saving

/// Command-line interface
pub mod cli;
/// Error types for rearrangement operations
pub mod error;
/// Image file loading and saving
pub mod image;
