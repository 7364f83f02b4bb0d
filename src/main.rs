use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, ValueEnum};
use tracing::{error, info};

use geomask_rs::logger;
use geomask_rs::mask_pipeline::{
    AnnotationsToMaskPipeline, BatchConfig, FailurePolicy, MaskConfig, TiffCompression, run_batch,
};

#[derive(Parser, Debug)]
#[command(
    name = "geomask",
    version,
    about = "Rasterize vector tissue annotations into multi-channel OME-TIFF label masks"
)]
struct Cli {
    /// Directory containing GeoJSON annotation files.
    #[arg(long, default_value = "./geojson")]
    annotations: PathBuf,

    /// Directory containing companion OME-TIFF images.
    #[arg(long, default_value = "./ome_tiff")]
    images: PathBuf,

    /// Output directory for mask containers.
    #[arg(long, default_value = "./ome_tiff_masks")]
    masks: PathBuf,

    /// Output directory for sidecar metadata records.
    #[arg(long, default_value = "./mask_meta_json")]
    metadata: PathBuf,

    /// Compression for mask container pages.
    #[arg(long, value_enum, default_value_t = CompressionChoice::None)]
    compression: CompressionChoice,

    /// Keep processing remaining files when one file fails.
    #[arg(long)]
    keep_going: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CompressionChoice {
    None,
    Lzw,
    Deflate,
}

impl From<CompressionChoice> for TiffCompression {
    fn from(choice: CompressionChoice) -> Self {
        match choice {
            CompressionChoice::None => TiffCompression::None,
            CompressionChoice::Lzw => TiffCompression::Lzw,
            CompressionChoice::Deflate => TiffCompression::DeflateBalanced,
        }
    }
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let cli = Cli::parse();

    info!("Starting geomask batch run...");

    std::fs::create_dir_all(&cli.masks)
        .with_context(|| format!("creating mask output directory {}", cli.masks.display()))?;
    std::fs::create_dir_all(&cli.metadata)
        .with_context(|| format!("creating metadata output directory {}", cli.metadata.display()))?;

    let config = MaskConfig::builder()
        .compression(cli.compression.into())
        .build();
    let pipeline = AnnotationsToMaskPipeline::new(config);

    info!("Annotation to mask pipeline initialized");
    info!("Compression: {:?}", pipeline.config().compression);
    info!("Channels: {}", pipeline.config().channel_table.len());

    let batch = BatchConfig {
        annotation_dir: cli.annotations,
        image_dir: cli.images,
        mask_dir: cli.masks,
        metadata_dir: cli.metadata,
        failure_policy: if cli.keep_going {
            FailurePolicy::ContinueOnError
        } else {
            FailurePolicy::FailFast
        },
    };

    match run_batch(&pipeline, &batch) {
        Ok(summary) if summary.failed > 0 => {
            error!("Batch finished with {} failed file(s)", summary.failed);
            std::process::exit(1);
        }
        Ok(summary) => {
            info!(
                "Batch successful: {} written, {} skipped",
                summary.written, summary.skipped
            );
            Ok(())
        }
        Err(e) => {
            error!("Batch failed: {}", e);
            std::process::exit(1);
        }
    }
}
