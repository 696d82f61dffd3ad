pub mod config;
pub mod error;
pub mod generator;

pub use config::Config;
pub use error::GeneratorError;
pub use generator::{Depth, ThreadGenerator};
