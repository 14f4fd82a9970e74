mod color;

pub use color::{ColorPipeline, ColorVertex};
