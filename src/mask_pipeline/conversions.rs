//! Pipeline conversions module
//!
//! This module contains the orchestration logic turning one annotation
//! source plus one companion image into a mask container and its sidecar.

mod annotations_to_mask;

pub use annotations_to_mask::AnnotationsToMaskPipeline;
