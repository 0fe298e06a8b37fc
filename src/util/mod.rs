// Utility Module
// Configuration shared by the transform operations

pub mod config;

pub use config::TransformConfig;
