//! Annotation loading module
//!
//! This module reads vector annotation sources into geometry/payload pairs,
//! preserving file order.

mod reader;
mod geojson_reader;
pub mod types;

pub use reader::AnnotationReader;
pub use geojson_reader::GeoJsonReader;
pub use types::{Annotation, Feature, FeatureCollection, Geometry, Properties, Ring};
