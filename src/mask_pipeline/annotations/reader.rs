use crate::mask_pipeline::annotations::types::Annotation;
use crate::mask_pipeline::common::error::Result;

pub trait AnnotationReader {
    fn read_annotations(&self, data: &[u8]) -> Result<Vec<Annotation>>;
}
