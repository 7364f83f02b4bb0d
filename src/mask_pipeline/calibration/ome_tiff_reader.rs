//! Calibration reader for OME-TIFF companion images.
//!
//! Pixel dimensions and physical pixel sizes are taken from the OME-XML
//! document embedded in the TIFF `ImageDescription` tag, which is where
//! acquisition software records the calibration the mask grid must match.
//! Any failure along the way (missing file, unreadable container, absent or
//! unparsable metadata block) is reported as `MetadataUnavailable` so the
//! caller can skip the affected file instead of aborting.

use std::fs::File;
use std::path::Path;

use tracing::debug;

use crate::mask_pipeline::calibration::ome_xml::parse_ome_xml;
use crate::mask_pipeline::calibration::reader::CalibrationReader;
use crate::mask_pipeline::calibration::types::ImageCalibration;
use crate::mask_pipeline::common::error::{MaskError, Result};

pub struct OmeTiffReader;

impl CalibrationReader for OmeTiffReader {
    fn read_calibration(&self, image_path: &Path) -> Result<ImageCalibration> {
        debug!("Reading calibration metadata from {}", image_path.display());

        let file = File::open(image_path).map_err(|e| {
            MaskError::MetadataUnavailable(format!("{}: {}", image_path.display(), e))
        })?;

        let mut decoder = tiff::decoder::Decoder::new(file).map_err(|e| {
            MaskError::MetadataUnavailable(format!("{}: {}", image_path.display(), e))
        })?;

        let description = decoder
            .get_tag_ascii_string(tiff::tags::Tag::ImageDescription)
            .map_err(|e| {
                MaskError::MetadataUnavailable(format!("{}: {}", image_path.display(), e))
            })?;

        let calibration = parse_ome_xml(&description)?;

        debug!(
            "Calibration: {}x{} px, pixel size {} {} x {} {}",
            calibration.width,
            calibration.height,
            calibration.physical_size_x,
            calibration.physical_size_x_unit,
            calibration.physical_size_y,
            calibration.physical_size_y_unit,
        );

        Ok(calibration)
    }
}
