//! Output metadata record types

use serde::{Deserialize, Serialize};

use crate::mask_pipeline::calibration::types::ImageCalibration;
use crate::mask_pipeline::channels::types::ChannelTable;
use crate::mask_pipeline::common::error::{MaskError, Result};

/// Channel-before-spatial axis order of the mask container.
const MASK_AXES: &str = "CYX";

/// Masks are single-plane label layers even when the source volume has depth.
const MASK_SIZE_Z: u32 = 1;

/// Channel naming entry of the metadata record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelEntry {
    #[serde(rename = "Name")]
    pub name: String,
}

/// Calibration and channel-naming record written with every mask: once
/// embedded in the container and once as a sidecar. Field names follow the
/// OME pixel-metadata vocabulary so downstream viewers pick them up.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaskMetadata {
    pub axes: String,
    #[serde(rename = "Channel")]
    pub channels: Vec<ChannelEntry>,
    #[serde(rename = "PhysicalSizeX")]
    pub physical_size_x: f64,
    #[serde(rename = "PhysicalSizeXUnit")]
    pub physical_size_x_unit: String,
    #[serde(rename = "PhysicalSizeY")]
    pub physical_size_y: f64,
    #[serde(rename = "PhysicalSizeYUnit")]
    pub physical_size_y_unit: String,
    #[serde(rename = "PhysicalSizeZ")]
    pub physical_size_z: f64,
    #[serde(rename = "PhysicalSizeZUnit")]
    pub physical_size_z_unit: String,
    #[serde(rename = "SizeC")]
    pub size_c: u32,
    #[serde(rename = "SizeX")]
    pub size_x: u32,
    #[serde(rename = "SizeY")]
    pub size_y: u32,
    #[serde(rename = "SizeZ")]
    pub size_z: u32,
}

impl MaskMetadata {
    /// Derives the record from the companion calibration and channel table.
    ///
    /// Physical sizes and units propagate unchanged (no unit conversion);
    /// `SizeZ` is always 1 regardless of the source volume's depth.
    pub fn new(calibration: &ImageCalibration, table: &ChannelTable) -> Self {
        Self {
            axes: MASK_AXES.to_string(),
            channels: table
                .iter()
                .map(|channel| ChannelEntry {
                    name: channel.name.clone(),
                })
                .collect(),
            physical_size_x: calibration.physical_size_x,
            physical_size_x_unit: calibration.physical_size_x_unit.clone(),
            physical_size_y: calibration.physical_size_y,
            physical_size_y_unit: calibration.physical_size_y_unit.clone(),
            physical_size_z: calibration.physical_size_z,
            physical_size_z_unit: calibration.physical_size_z_unit.clone(),
            size_c: table.len() as u32,
            size_x: calibration.width,
            size_y: calibration.height,
            size_z: MASK_SIZE_Z,
        }
    }

    /// The single serialization used for both the embedded and the sidecar
    /// copy, which keeps the two byte-for-byte identical.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| MaskError::EncodeError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calibration() -> ImageCalibration {
        ImageCalibration {
            width: 100,
            height: 50,
            physical_size_x: 0.5,
            physical_size_x_unit: "µm".to_string(),
            physical_size_y: 0.25,
            physical_size_y_unit: "µm".to_string(),
            physical_size_z: 3.0,
            physical_size_z_unit: "mm".to_string(),
        }
    }

    #[test]
    fn propagates_calibration_unchanged() {
        let record = MaskMetadata::new(&calibration(), &ChannelTable::default());
        assert_eq!(record.size_x, 100);
        assert_eq!(record.size_y, 50);
        assert_eq!(record.physical_size_x, 0.5);
        assert_eq!(record.physical_size_x_unit, "µm");
        assert_eq!(record.physical_size_y, 0.25);
        assert_eq!(record.physical_size_z, 3.0);
        assert_eq!(record.physical_size_z_unit, "mm");
    }

    #[test]
    fn size_z_is_always_one() {
        let record = MaskMetadata::new(&calibration(), &ChannelTable::default());
        assert_eq!(record.size_z, 1);
    }

    #[test]
    fn channel_names_follow_table_order() {
        let record = MaskMetadata::new(&calibration(), &ChannelTable::default());
        assert_eq!(record.size_c, 4);
        assert_eq!(record.axes, "CYX");
        assert_eq!(record.channels[1].name, "antimesosalpinx muscularus");
        assert_eq!(record.channels[3].name, "mesosalpinx muscularus");
    }

    #[test]
    fn json_uses_ome_field_names() {
        let record = MaskMetadata::new(&calibration(), &ChannelTable::default());
        let json = record.to_json().unwrap();
        assert!(json.contains(r#""axes":"CYX""#));
        assert!(json.contains(r#""Channel":[{"Name":"#));
        assert!(json.contains(r#""PhysicalSizeX":0.5"#));
        assert!(json.contains(r#""SizeC":4"#));
        assert!(json.contains(r#""SizeZ":1"#));
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = MaskMetadata::new(&calibration(), &ChannelTable::default());
        let json = record.to_json().unwrap();
        let parsed: MaskMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
