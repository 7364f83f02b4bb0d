//! Mask writing module
//!
//! This module serializes mask volumes into multi-page TIFF containers with
//! embedded metadata, with various compression options.

mod writer;
mod ome_tiff_writer;
pub mod types;

pub use writer::MaskWriter;
pub use ome_tiff_writer::OmeTiffWriter;
pub use types::{MaskConfig, MaskConfigBuilder, TiffCompression};
