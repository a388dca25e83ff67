//! CLI utilities for vectorhub.
//!
//! This crate provides config file handling and output formatting shared by
//! the vectorhub command line tools.

pub mod config;
pub mod output;

pub use config::{Config, load_config};
pub use output::{Output, OutputFormat};
