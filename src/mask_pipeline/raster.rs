//! Mask rasterization module
//!
//! This module turns per-channel geometry sets into a stacked multi-channel
//! label raster on the companion image's pixel grid.

pub mod compositor;
pub mod types;

pub use compositor::compose_mask;
pub use types::MaskVolume;
