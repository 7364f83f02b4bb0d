//! OME-XML calibration parsing.
//!
//! The OME schema stores pixel geometry as attributes of the `Pixels`
//! element: `SizeX`/`SizeY` in pixels plus optional `PhysicalSize{X,Y,Z}`
//! and `PhysicalSize{X,Y,Z}Unit`. Only that element is read here; the rest
//! of the document (channels, planes, acquisition blocks) is skipped.

use quick_xml::Reader;
use quick_xml::events::Event;

use crate::mask_pipeline::calibration::types::ImageCalibration;
use crate::mask_pipeline::common::error::{MaskError, Result};

/// Parses an OME-XML document into an [`ImageCalibration`].
///
/// Missing attributes fall back to the documented defaults (0 for sizes,
/// `"mm"` for units). A document without a `Pixels` element, or one that is
/// not well-formed XML, yields [`MaskError::MetadataUnavailable`].
pub fn parse_ome_xml(xml: &str) -> Result<ImageCalibration> {
    let mut reader = Reader::from_str(xml);

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) | Ok(Event::Empty(e))
                if e.local_name().as_ref() == b"Pixels" =>
            {
                let mut calibration = ImageCalibration::default();

                for attr in e.attributes() {
                    let attr = attr
                        .map_err(|e| MaskError::MetadataUnavailable(e.to_string()))?;
                    let value = attr
                        .unescape_value()
                        .map_err(|e| MaskError::MetadataUnavailable(e.to_string()))?;

                    match attr.key.local_name().as_ref() {
                        b"SizeX" => calibration.width = parse_dimension(&value),
                        b"SizeY" => calibration.height = parse_dimension(&value),
                        b"PhysicalSizeX" => {
                            calibration.physical_size_x = value.parse().unwrap_or(0.0)
                        }
                        b"PhysicalSizeXUnit" => {
                            calibration.physical_size_x_unit = value.to_string()
                        }
                        b"PhysicalSizeY" => {
                            calibration.physical_size_y = value.parse().unwrap_or(0.0)
                        }
                        b"PhysicalSizeYUnit" => {
                            calibration.physical_size_y_unit = value.to_string()
                        }
                        b"PhysicalSizeZ" => {
                            calibration.physical_size_z = value.parse().unwrap_or(0.0)
                        }
                        b"PhysicalSizeZUnit" => {
                            calibration.physical_size_z_unit = value.to_string()
                        }
                        _ => {}
                    }
                }

                return Ok(calibration);
            }
            Ok(Event::Eof) => {
                return Err(MaskError::MetadataUnavailable(
                    "no Pixels element in OME-XML document".to_string(),
                ));
            }
            Ok(_) => {}
            Err(e) => return Err(MaskError::MetadataUnavailable(e.to_string())),
        }
    }
}

// Acquisition software occasionally writes dimensions as floats ("1024.0").
fn parse_dimension(raw: &str) -> u32 {
    raw.parse::<f64>().map(|v| v.max(0.0) as u32).unwrap_or(0)
}
