#[cfg(feature = "cli")]
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use crate::core::{engine::ConvertEngine, pipeline::SwapPipeline};
pub use utils::error::{Result, SwapError};
