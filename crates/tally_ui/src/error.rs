use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error(transparent)]
    Gpu(#[from] tally_gpu::GpuError),
}
