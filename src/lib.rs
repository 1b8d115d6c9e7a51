//! WLDS - species classification service for audio, image and fused input

pub mod config;
pub mod error;
pub mod types;

pub mod pipeline;
pub mod api;

pub use config::Config;
pub use error::{Error, Result};
pub use types::*;
