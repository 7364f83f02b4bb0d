//! Mask conversion configuration types

use crate::mask_pipeline::channels::types::ChannelTable;

/// TIFF compression methods
#[derive(Debug, Clone, Copy)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    None,
    /// LZW compression (slow, good compression)
    Lzw,
    /// Deflate compression - fast level (good speed/size balance)
    DeflateFast,
    /// Deflate compression - best compression (slower)
    DeflateBest,
    /// Deflate compression - balanced (default)
    DeflateBalanced,
}

/// Configuration for annotation to mask conversion
#[derive(Debug, Clone)]
pub struct MaskConfig {
    /// Compression method for mask container pages
    pub compression: TiffCompression,
    /// Predictor value for compression (typically 2 for horizontal differencing)
    /// Note: Predictor adds processing time, set to None for maximum speed
    pub predictor: Option<u16>,
    /// Whether to reject zero-sized pixel grids before rasterizing
    pub validate_dimensions: bool,
    /// Ordered mapping from classification value to output channel
    pub channel_table: ChannelTable,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self {
            compression: TiffCompression::None,
            predictor: None,
            validate_dimensions: true,
            channel_table: ChannelTable::default(),
        }
    }
}

impl MaskConfig {
    pub fn builder() -> MaskConfigBuilder {
        MaskConfigBuilder::default()
    }
}

/// Builder for MaskConfig
#[derive(Default)]
pub struct MaskConfigBuilder {
    compression: Option<TiffCompression>,
    predictor: Option<Option<u16>>,
    validate_dimensions: Option<bool>,
    channel_table: Option<ChannelTable>,
}

impl MaskConfigBuilder {
    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn predictor(mut self, predictor: Option<u16>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn channel_table(mut self, table: ChannelTable) -> Self {
        self.channel_table = Some(table);
        self
    }

    pub fn build(self) -> MaskConfig {
        let default = MaskConfig::default();
        MaskConfig {
            compression: self.compression.unwrap_or(default.compression),
            predictor: self.predictor.unwrap_or(default.predictor),
            validate_dimensions: self
                .validate_dimensions
                .unwrap_or(default.validate_dimensions),
            channel_table: self.channel_table.unwrap_or(default.channel_table),
        }
    }
}
