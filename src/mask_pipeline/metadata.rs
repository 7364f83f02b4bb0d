//! Output metadata module
//!
//! This module derives the self-describing calibration and channel-naming
//! record that accompanies every written mask.

pub mod types;

pub use types::{ChannelEntry, MaskMetadata};
