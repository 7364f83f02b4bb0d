//! Annotation geometry and payload types

use serde::Deserialize;

/// One linear ring of coordinates in image pixel space.
pub type Ring = Vec<[f64; 2]>;

/// Polygonal annotation geometry.
///
/// Coordinates are already expressed in the companion image's pixel
/// coordinate space; no reprojection is performed anywhere downstream.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// The first ring is the exterior boundary; any further rings are holes.
    Polygon { coordinates: Vec<Ring> },
    MultiPolygon { coordinates: Vec<Vec<Ring>> },
}

#[derive(Debug, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
pub struct Feature {
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: Option<Properties>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Properties {
    /// Free-form measurement payload attached by the annotation tool.
    /// Kept generic here so one malformed payload cannot fail the whole
    /// container parse; typed extraction happens at classification time.
    #[serde(default)]
    pub measurements: Option<serde_json::Value>,
}

/// A geometry together with its raw measurement payload, in file order.
#[derive(Debug, Clone)]
pub struct Annotation {
    pub geometry: Geometry,
    pub payload: Option<serde_json::Value>,
}
