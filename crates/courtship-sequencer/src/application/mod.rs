//! Loading scripts and running them.

pub mod loader;
pub mod runner;
