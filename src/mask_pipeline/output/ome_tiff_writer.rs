use std::io::Write;

use tracing::debug;

use crate::mask_pipeline::common::error::{MaskError, Result};
use crate::mask_pipeline::output::types::{MaskConfig, TiffCompression};
use crate::mask_pipeline::output::writer::MaskWriter;
use crate::mask_pipeline::raster::types::MaskVolume;

pub struct OmeTiffWriter;

impl MaskWriter for OmeTiffWriter {
    fn write_mask(
        &self,
        volume: &MaskVolume,
        metadata_json: &str,
        output: &mut dyn Write,
        config: &MaskConfig,
    ) -> Result<()> {
        let (channels, height, width) = volume.shape();
        debug!(
            "Encoding mask container: {} channel(s), {}x{}",
            channels, width, height
        );

        let mut buffer = Vec::new();

        let compression = match config.compression {
            TiffCompression::None => tiff::encoder::Compression::Uncompressed,
            TiffCompression::Lzw => tiff::encoder::Compression::Lzw,
            TiffCompression::DeflateFast => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Fast),
            TiffCompression::DeflateBalanced => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Balanced),
            TiffCompression::DeflateBest => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Best),
        };

        let mut encoder = tiff::encoder::TiffEncoder::new(std::io::Cursor::new(&mut buffer))
            .map_err(|e| MaskError::EncodeError(e.to_string()))?
            .with_compression(compression);

        if let Some(predictor_val) = config.predictor {
            let predictor = match predictor_val {
                2 => tiff::tags::Predictor::Horizontal,
                _ => tiff::tags::Predictor::None,
            };
            encoder = encoder.with_predictor(predictor);
        }

        // One grayscale page per channel, channel axis first. The metadata
        // record rides on the first page's ImageDescription tag.
        for channel in 0..channels {
            let mut image = encoder
                .new_image::<tiff::encoder::colortype::Gray8>(width as u32, height as u32)
                .map_err(|e| MaskError::EncodeError(e.to_string()))?;

            if channel == 0 {
                image
                    .encoder()
                    .write_tag(tiff::tags::Tag::ImageDescription, metadata_json)
                    .map_err(|e| MaskError::EncodeError(e.to_string()))?;
            }

            image
                .write_data(volume.plane(channel))
                .map_err(|e| MaskError::EncodeError(e.to_string()))?;
        }

        output.write_all(&buffer)?;

        debug!("Mask container encoding complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::mask_pipeline::raster::types::FOREGROUND;

    fn sample_volume() -> MaskVolume {
        let mut volume = MaskVolume::new(2, 3, 4);
        for value in volume.plane_mut(1) {
            *value = FOREGROUND;
        }
        volume.plane_mut(0)[0] = FOREGROUND;
        volume
    }

    fn encode(volume: &MaskVolume, metadata: &str, config: &MaskConfig) -> Vec<u8> {
        let mut buffer = Cursor::new(Vec::new());
        OmeTiffWriter
            .write_mask(volume, metadata, &mut buffer, config)
            .unwrap();
        buffer.into_inner()
    }

    #[test]
    fn writes_one_page_per_channel_with_embedded_metadata() {
        let volume = sample_volume();
        let metadata = r#"{"axes":"CYX","SizeC":2}"#;
        let bytes = encode(&volume, metadata, &MaskConfig::default());

        let mut decoder = tiff::decoder::Decoder::new(Cursor::new(&bytes)).unwrap();
        assert_eq!(decoder.dimensions().unwrap(), (4, 3));
        assert_eq!(
            decoder
                .get_tag_ascii_string(tiff::tags::Tag::ImageDescription)
                .unwrap(),
            metadata
        );

        let first = decoder.read_image().unwrap();
        let tiff::decoder::DecodingResult::U8(first) = first else {
            panic!("expected 8-bit mask page");
        };
        assert_eq!(first.as_slice(), volume.plane(0));

        assert!(decoder.more_images());
        decoder.next_image().unwrap();
        let second = decoder.read_image().unwrap();
        let tiff::decoder::DecodingResult::U8(second) = second else {
            panic!("expected 8-bit mask page");
        };
        assert_eq!(second.as_slice(), volume.plane(1));

        assert!(!decoder.more_images());
    }

    #[test]
    fn deflate_compressed_container_round_trips() {
        let volume = sample_volume();
        let config = MaskConfig::builder()
            .compression(TiffCompression::DeflateBalanced)
            .build();
        let bytes = encode(&volume, "{}", &config);

        let mut decoder = tiff::decoder::Decoder::new(Cursor::new(&bytes)).unwrap();
        let tiff::decoder::DecodingResult::U8(first) = decoder.read_image().unwrap() else {
            panic!("expected 8-bit mask page");
        };
        assert_eq!(first.as_slice(), volume.plane(0));
    }

    #[test]
    fn encoding_is_deterministic() {
        let volume = sample_volume();
        let first = encode(&volume, "{}", &MaskConfig::default());
        let second = encode(&volume, "{}", &MaskConfig::default());
        assert_eq!(first, second);
    }
}
