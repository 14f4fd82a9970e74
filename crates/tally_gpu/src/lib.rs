pub mod config;
pub mod context;
pub mod error;
pub mod pipeline;

pub use config::GpuConfig;
pub use context::GpuContext;
pub use error::{GpuError, Result};
pub use pipeline::{ColorPipeline, ColorVertex};
