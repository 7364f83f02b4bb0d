use std::io::Write;
use std::path::Path;

use tracing::{info, instrument};

use crate::mask_pipeline::{
    annotations::{AnnotationReader, GeoJsonReader},
    calibration::{CalibrationReader, ImageCalibration, OmeTiffReader},
    channels::classifier::partition_channels,
    common::error::{MaskError, Result},
    metadata::MaskMetadata,
    output::{MaskConfig, MaskWriter, OmeTiffWriter},
    raster::compositor::compose_mask,
};

pub struct AnnotationsToMaskPipeline<C: CalibrationReader, L: AnnotationReader, W: MaskWriter> {
    calibration: C,
    loader: L,
    writer: W,
    config: MaskConfig,
}

impl AnnotationsToMaskPipeline<OmeTiffReader, GeoJsonReader, OmeTiffWriter> {
    pub fn new(config: MaskConfig) -> Self {
        Self {
            calibration: OmeTiffReader,
            loader: GeoJsonReader,
            writer: OmeTiffWriter,
            config,
        }
    }
}

impl<C: CalibrationReader, L: AnnotationReader, W: MaskWriter> AnnotationsToMaskPipeline<C, L, W> {
    pub fn with_custom(calibration: C, loader: L, writer: W, config: MaskConfig) -> Self {
        Self {
            calibration,
            loader,
            writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: u32, height: u32) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(MaskError::InvalidDimensions(width as usize, height as usize));
        }

        Ok(())
    }

    /// Converts one annotation source against a known calibration. The mask
    /// container goes to `mask_out` and the metadata record to
    /// `sidecar_out`; both sinks receive the same serialized record.
    #[instrument(skip(self, annotation_data, calibration, mask_out, sidecar_out), fields(input_size = annotation_data.len()))]
    pub fn convert(
        &self,
        annotation_data: &[u8],
        calibration: &ImageCalibration,
        mask_out: &mut dyn Write,
        sidecar_out: &mut dyn Write,
    ) -> Result<()> {
        info!("Starting annotation to mask conversion");

        let annotations = {
            let _span = tracing::info_span!("load_annotations").entered();
            self.loader.read_annotations(annotation_data)?
        };

        {
            let _span = tracing::info_span!("validate_dimensions",
                width = calibration.width,
                height = calibration.height
            ).entered();
            self.validate_dimensions(calibration.width, calibration.height)?;
        }

        let volume = {
            let _span = tracing::info_span!("rasterize_channels").entered();
            let channel_sets = partition_channels(&annotations, &self.config.channel_table);
            compose_mask(calibration.width, calibration.height, &channel_sets)
        };

        let metadata_json = {
            let _span = tracing::info_span!("build_metadata").entered();
            MaskMetadata::new(calibration, &self.config.channel_table).to_json()?
        };

        {
            let _span = tracing::info_span!("encode_mask").entered();
            self.writer
                .write_mask(&volume, &metadata_json, mask_out, &self.config)?;
        }

        sidecar_out
            .write_all(metadata_json.as_bytes())
            .map_err(|e| MaskError::OutputWriteError(e.to_string()))?;

        info!(
            channels = volume.channels(),
            width = calibration.width,
            height = calibration.height,
            "Conversion complete"
        );
        Ok(())
    }

    /// File-level conversion: reads the companion's calibration, converts,
    /// and persists the container plus sidecar. Both outputs are encoded in
    /// memory first; if the sidecar cannot be written after the container,
    /// the container file is removed so the pair is never half-visible.
    #[instrument(skip(self, annotation_path, image_path, mask_path, sidecar_path))]
    pub fn convert_file(
        &self,
        annotation_path: impl AsRef<Path>,
        image_path: impl AsRef<Path>,
        mask_path: impl AsRef<Path>,
        sidecar_path: impl AsRef<Path>,
    ) -> Result<()> {
        let annotation_path = annotation_path.as_ref();
        let image_path = image_path.as_ref();
        let mask_path = mask_path.as_ref();
        let sidecar_path = sidecar_path.as_ref();

        info!(
            annotation = %annotation_path.display(),
            image = %image_path.display(),
            mask = %mask_path.display(),
            "Converting file"
        );

        let calibration = {
            let _span = tracing::info_span!("read_calibration").entered();
            self.calibration.read_calibration(image_path)?
        };

        let annotation_data = {
            let _span = tracing::info_span!("read_annotation_file").entered();
            std::fs::read(annotation_path).map_err(|e| {
                MaskError::InputReadError(format!("{}: {}", annotation_path.display(), e))
            })?
        };

        let mut mask_bytes = Vec::new();
        let mut sidecar_bytes = Vec::new();
        self.convert(
            &annotation_data,
            &calibration,
            &mut mask_bytes,
            &mut sidecar_bytes,
        )?;

        std::fs::write(mask_path, &mask_bytes).map_err(|e| {
            MaskError::OutputWriteError(format!("{}: {}", mask_path.display(), e))
        })?;

        if let Err(e) = std::fs::write(sidecar_path, &sidecar_bytes) {
            let _ = std::fs::remove_file(mask_path);
            return Err(MaskError::OutputWriteError(format!(
                "{}: {}",
                sidecar_path.display(),
                e
            )));
        }

        Ok(())
    }

    pub fn config(&self) -> &MaskConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: MaskConfig) {
        self.config = config;
    }
}
