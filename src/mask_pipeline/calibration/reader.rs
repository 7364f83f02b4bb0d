use std::path::Path;

use crate::mask_pipeline::calibration::types::ImageCalibration;
use crate::mask_pipeline::common::error::Result;

pub trait CalibrationReader {
    fn read_calibration(&self, image_path: &Path) -> Result<ImageCalibration>;
}
