//! Classification of annotations into channel geometry sets.

use serde_json::Value;
use tracing::debug;

use crate::mask_pipeline::annotations::types::{Annotation, Geometry};
use crate::mask_pipeline::channels::types::ChannelTable;

/// Key of the classification value inside the measurement payload.
const CLASSIFICATION_KEY: &str = "Value";

/// Extracts the integer classification value from a measurement payload.
///
/// Two payload shapes are accepted: a JSON object, or a string containing a
/// serialized JSON object (the form the annotation tool exports). Returns
/// `None` when the payload is missing, unparsable, or lacks an integer
/// classification key. Classification is a pure function of the payload.
pub fn classification_value(payload: Option<&Value>) -> Option<i64> {
    match payload? {
        Value::String(raw) => serde_json::from_str::<Value>(raw)
            .ok()?
            .get(CLASSIFICATION_KEY)?
            .as_i64(),
        Value::Object(map) => map.get(CLASSIFICATION_KEY)?.as_i64(),
        _ => None,
    }
}

/// Assigns each annotation's geometry to the channel its classification
/// value maps to, returning one geometry set per channel in table order.
///
/// Annotations with an unusable payload or a value outside the table are
/// dropped silently; they are not errors.
pub fn partition_channels<'a>(
    annotations: &'a [Annotation],
    table: &ChannelTable,
) -> Vec<Vec<&'a Geometry>> {
    let mut sets: Vec<Vec<&Geometry>> = vec![Vec::new(); table.len()];
    let mut dropped = 0usize;

    for annotation in annotations {
        let index = classification_value(annotation.payload.as_ref())
            .and_then(|value| table.index_of(value));
        match index {
            Some(index) => sets[index].push(&annotation.geometry),
            None => dropped += 1,
        }
    }

    if dropped > 0 {
        debug!("{} annotation(s) matched no channel", dropped);
    }

    sets
}
