// Configuration module
// Public interface for run configuration

pub mod constants;
mod settings;

pub use settings::Config;
