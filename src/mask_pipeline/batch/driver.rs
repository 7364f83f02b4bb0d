//! Sequential batch driver: discovery, companion pairing, per-file runs.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::mask_pipeline::annotations::AnnotationReader;
use crate::mask_pipeline::batch::types::{
    BatchConfig, BatchSummary, FailurePolicy, FileOutcome, SkipReason,
};
use crate::mask_pipeline::calibration::CalibrationReader;
use crate::mask_pipeline::common::error::{MaskError, Result};
use crate::mask_pipeline::conversions::AnnotationsToMaskPipeline;
use crate::mask_pipeline::output::MaskWriter;

const ANNOTATION_EXTENSION: &str = "geojson";
const MASK_SUFFIX: &str = "-mask.ome.tiff";
const SIDECAR_SUFFIX: &str = "-mask.json";

/// Runs the pipeline over every annotation file in the configured
/// directory, sequentially. Returns the summary, or the first error when
/// the policy is [`FailurePolicy::FailFast`].
pub fn run_batch<C, L, W>(
    pipeline: &AnnotationsToMaskPipeline<C, L, W>,
    config: &BatchConfig,
) -> Result<BatchSummary>
where
    C: CalibrationReader,
    L: AnnotationReader,
    W: MaskWriter,
{
    let annotation_files = discover_annotations(&config.annotation_dir)?;
    if annotation_files.is_empty() {
        warn!(
            "No annotation files found in {}",
            config.annotation_dir.display()
        );
        return Ok(BatchSummary::default());
    }

    info!("Processing {} annotation file(s)", annotation_files.len());

    let mut summary = BatchSummary::default();
    for annotation_path in &annotation_files {
        info!("====== Processing {}", annotation_path.display());
        match process_file(pipeline, config, annotation_path) {
            Ok(FileOutcome::Written { mask_path, .. }) => {
                summary.written += 1;
                info!("Mask saved as {}", mask_path.display());
            }
            Ok(FileOutcome::Skipped { reason }) => {
                summary.skipped += 1;
                match reason {
                    SkipReason::CompanionNotFound => warn!(
                        "No corresponding companion image found for {}",
                        annotation_path.display()
                    ),
                    SkipReason::CalibrationUnavailable(detail) => warn!(
                        "Skipping {}: calibration unavailable ({})",
                        annotation_path.display(),
                        detail
                    ),
                }
            }
            Err(e) => {
                summary.failed += 1;
                error!("Error processing {}: {}", annotation_path.display(), e);
                if config.failure_policy == FailurePolicy::FailFast {
                    return Err(e);
                }
            }
        }
    }

    info!(
        written = summary.written,
        skipped = summary.skipped,
        failed = summary.failed,
        "Batch complete"
    );
    Ok(summary)
}

/// Processes one annotation file into a typed outcome. Missing companions
/// and unusable calibration are skips; everything else propagates.
pub fn process_file<C, L, W>(
    pipeline: &AnnotationsToMaskPipeline<C, L, W>,
    config: &BatchConfig,
    annotation_path: &Path,
) -> Result<FileOutcome>
where
    C: CalibrationReader,
    L: AnnotationReader,
    W: MaskWriter,
{
    let base_name = annotation_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_string())
        .ok_or_else(|| {
            MaskError::InputReadError(format!("{}: no file name", annotation_path.display()))
        })?;

    let Some(image_path) = find_companion(&config.image_dir, &base_name)? else {
        return Ok(FileOutcome::Skipped {
            reason: SkipReason::CompanionNotFound,
        });
    };

    let mask_path = config.mask_dir.join(format!("{base_name}{MASK_SUFFIX}"));
    let metadata_path = config
        .metadata_dir
        .join(format!("{base_name}{SIDECAR_SUFFIX}"));

    match pipeline.convert_file(annotation_path, &image_path, &mask_path, &metadata_path) {
        Ok(()) => Ok(FileOutcome::Written {
            mask_path,
            metadata_path,
        }),
        Err(MaskError::MetadataUnavailable(detail)) => Ok(FileOutcome::Skipped {
            reason: SkipReason::CalibrationUnavailable(detail),
        }),
        Err(e) => Err(e),
    }
}

/// Annotation sources in sorted name order, for reproducible runs.
fn discover_annotations(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .map_err(|e| MaskError::InputReadError(format!("{}: {}", dir.display(), e)))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry =
            entry.map_err(|e| MaskError::InputReadError(format!("{}: {}", dir.display(), e)))?;
        let path = entry.path();
        if path
            .extension()
            .is_some_and(|ext| ext == ANNOTATION_EXTENSION)
        {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// First companion image whose file name starts with `base_name`.
///
/// Several candidates are possible (resolution levels, re-exports); the
/// directory listing is sorted so the first-match tie-break is
/// deterministic.
fn find_companion(dir: &Path, base_name: &str) -> Result<Option<PathBuf>> {
    let entries = fs::read_dir(dir)
        .map_err(|e| MaskError::InputReadError(format!("{}: {}", dir.display(), e)))?;

    let mut candidates = Vec::new();
    for entry in entries {
        let entry =
            entry.map_err(|e| MaskError::InputReadError(format!("{}: {}", dir.display(), e)))?;
        if entry
            .file_name()
            .to_string_lossy()
            .starts_with(base_name)
        {
            candidates.push(entry.path());
        }
    }
    candidates.sort();
    Ok(candidates.into_iter().next())
}
