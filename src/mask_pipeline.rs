//! Annotation-to-mask pipeline module
//!
//! This module converts vector tissue annotations into multi-channel label
//! masks aligned with a companion image's pixel grid, with separate modules
//! for calibration reading, annotation loading, channel classification,
//! rasterization, metadata assembly, mask writing, and batch orchestration.

pub mod common;
pub mod calibration;
pub mod annotations;
pub mod channels;
pub mod raster;
pub mod metadata;
pub mod output;
pub mod conversions;
pub mod batch;

pub use common::{
    MaskError,
    Result,
};

pub use calibration::{
    ImageCalibration,
    CalibrationReader,
    OmeTiffReader,
};

pub use annotations::{
    Annotation,
    Geometry,
    AnnotationReader,
    GeoJsonReader,
};

pub use channels::{
    ChannelSpec,
    ChannelTable,
};

pub use raster::MaskVolume;

pub use metadata::MaskMetadata;

pub use output::{
    TiffCompression,
    MaskConfig,
    MaskConfigBuilder,
    MaskWriter,
    OmeTiffWriter,
};

pub use conversions::AnnotationsToMaskPipeline;

pub use batch::{
    BatchConfig,
    BatchSummary,
    FailurePolicy,
    FileOutcome,
    SkipReason,
    run_batch,
};
