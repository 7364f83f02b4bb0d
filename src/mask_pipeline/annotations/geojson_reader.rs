//! GeoJSON annotation reader.
//!
//! Parses a GeoJSON `FeatureCollection` into annotations. Each feature's
//! `properties.measurements` payload is carried along untyped; extracting a
//! classification value from it is the classifier's job, so a feature with a
//! broken payload still loads. A structurally invalid container is an error.

use tracing::debug;

use crate::mask_pipeline::annotations::reader::AnnotationReader;
use crate::mask_pipeline::annotations::types::{Annotation, FeatureCollection};
use crate::mask_pipeline::common::error::{MaskError, Result};

pub struct GeoJsonReader;

impl AnnotationReader for GeoJsonReader {
    fn read_annotations(&self, data: &[u8]) -> Result<Vec<Annotation>> {
        debug!("Parsing GeoJSON annotation source, {} bytes", data.len());

        let collection: FeatureCollection = serde_json::from_slice(data)
            .map_err(|e| MaskError::AnnotationParseError(e.to_string()))?;

        let annotations: Vec<Annotation> = collection
            .features
            .into_iter()
            .map(|feature| Annotation {
                geometry: feature.geometry,
                payload: feature.properties.and_then(|p| p.measurements),
            })
            .collect();

        debug!("Loaded {} annotation(s)", annotations.len());

        Ok(annotations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask_pipeline::annotations::types::Geometry;

    #[test]
    fn reads_polygon_features_in_file_order() {
        let data = br#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 0.0]]]
                    },
                    "properties": {"measurements": "{\"Value\": 2}"}
                },
                {
                    "type": "Feature",
                    "geometry": {
                        "type": "MultiPolygon",
                        "coordinates": [[[[0.0, 0.0], [5.0, 0.0], [5.0, 5.0], [0.0, 0.0]]]]
                    },
                    "properties": {"measurements": "{\"Value\": 4}"}
                }
            ]
        }"#;

        let annotations = GeoJsonReader.read_annotations(data).unwrap();
        assert_eq!(annotations.len(), 2);
        assert!(matches!(annotations[0].geometry, Geometry::Polygon { .. }));
        assert!(matches!(annotations[1].geometry, Geometry::MultiPolygon { .. }));
        assert_eq!(
            annotations[0].payload.as_ref().unwrap().as_str().unwrap(),
            r#"{"Value": 2}"#
        );
    }

    #[test]
    fn missing_properties_are_tolerated() {
        let data = br#"{
            "features": [
                {
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 0.0]]]
                    }
                }
            ]
        }"#;

        let annotations = GeoJsonReader.read_annotations(data).unwrap();
        assert_eq!(annotations.len(), 1);
        assert!(annotations[0].payload.is_none());
    }

    #[test]
    fn invalid_container_is_a_parse_error() {
        let result = GeoJsonReader.read_annotations(b"not geojson at all");
        assert!(matches!(result, Err(MaskError::AnnotationParseError(_))));
    }

    #[test]
    fn object_without_features_is_a_parse_error() {
        let result = GeoJsonReader.read_annotations(br#"{"type": "FeatureCollection"}"#);
        assert!(matches!(result, Err(MaskError::AnnotationParseError(_))));
    }
}
