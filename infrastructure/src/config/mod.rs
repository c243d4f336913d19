//! Configuration loading for the scoring engine

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, FilePolicyConfig};
pub use loader::ConfigLoader;
