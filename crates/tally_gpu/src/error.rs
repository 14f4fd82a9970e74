use thiserror::Error;

#[derive(Debug, Error)]
pub enum GpuError {
    #[error("failed to request adapter: {0}")]
    AdapterRequest(#[from] wgpu::RequestAdapterError),

    #[error("failed to request device: {0}")]
    DeviceRequest(#[from] wgpu::RequestDeviceError),

    #[error("failed to create surface: {0}")]
    SurfaceCreation(#[from] wgpu::CreateSurfaceError),
}

pub type Result<T> = std::result::Result<T, GpuError>;
