//! Courtship headless playthrough library.
//!
//! Exposes configuration, a renderer-free world, and the frame loop so the
//! binary and the integration tests drive sequences the same way.

pub mod config;
pub mod error;
pub mod headless;
pub mod playthrough;
