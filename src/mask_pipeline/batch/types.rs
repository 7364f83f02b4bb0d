//! Batch configuration and per-file outcome types

use std::path::PathBuf;

/// What the driver does when one file's conversion fails.
///
/// Skips (no companion image, no usable calibration) are outcomes, not
/// failures; the policy only governs real errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Abort the whole batch on the first failed file.
    FailFast,
    /// Record the failure and keep processing the remaining files.
    ContinueOnError,
}

/// Directory layout and policy of one batch run.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// Directory scanned for annotation sources
    pub annotation_dir: PathBuf,
    /// Directory holding companion images, matched by base-name prefix
    pub image_dir: PathBuf,
    /// Output directory for mask containers
    pub mask_dir: PathBuf,
    /// Output directory for sidecar metadata records
    pub metadata_dir: PathBuf,
    /// What to do when a file fails
    pub failure_policy: FailurePolicy,
}

/// Why a file was skipped without producing outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// No companion image name starts with the annotation's base name.
    CompanionNotFound,
    /// The companion image carries no usable calibration metadata.
    CalibrationUnavailable(String),
}

/// Result of processing one annotation file.
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    Written {
        mask_path: PathBuf,
        metadata_path: PathBuf,
    },
    Skipped {
        reason: SkipReason,
    },
}

/// Counts reported after a batch run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
}
