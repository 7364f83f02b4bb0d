use thiserror::Error;

#[derive(Error, Debug)]
pub enum MaskError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Calibration metadata unavailable: {0}")]
    MetadataUnavailable(String),

    #[error("Failed to parse annotation source: {0}")]
    AnnotationParseError(String),

    #[error("Failed to encode mask container: {0}")]
    EncodeError(String),

    #[error("Invalid raster dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MaskError>;
