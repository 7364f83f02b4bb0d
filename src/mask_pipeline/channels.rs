//! Channel classification module
//!
//! This module maps annotation classification values onto fixed output
//! channels via an ordered, explicitly configured channel table.

pub mod classifier;
pub mod types;

pub use classifier::{classification_value, partition_channels};
pub use types::{ChannelSpec, ChannelTable};
