pub mod config;
pub mod error;
pub mod footprint;
pub mod geometry;
pub mod logo;
pub mod math;
pub mod operations;
pub mod tessellation;

pub use error::{ConfigError, FootprintError, Result};
