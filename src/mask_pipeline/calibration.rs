//! Companion-image calibration reading module
//!
//! This module recovers the output raster's pixel dimensions and physical
//! pixel size from the metadata embedded in a companion microscopy image.

mod reader;
mod ome_tiff_reader;
pub mod ome_xml;
pub mod types;

pub use reader::CalibrationReader;
pub use ome_tiff_reader::OmeTiffReader;
pub use types::ImageCalibration;
