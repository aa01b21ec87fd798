//! Descriptor schema and runtime beats.

pub mod beats;
pub mod descriptors;
pub mod easing;
pub mod events;
