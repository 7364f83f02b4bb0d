use std::io::Write;

use crate::mask_pipeline::common::error::Result;
use crate::mask_pipeline::output::types::MaskConfig;
use crate::mask_pipeline::raster::types::MaskVolume;

pub trait MaskWriter {
    fn write_mask(
        &self,
        volume: &MaskVolume,
        metadata_json: &str,
        output: &mut dyn Write,
        config: &MaskConfig,
    ) -> Result<()>;
}
