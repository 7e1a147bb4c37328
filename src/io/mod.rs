/// Command line interface and generation runner
pub mod cli;
/// Generation constants and runtime defaults
pub mod configuration;
/// Error types shared by every module
pub mod error;
/// Progress reporting for long generations
pub mod progress;
