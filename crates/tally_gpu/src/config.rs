//! Configuration for GPU context initialization.

/// Options controlling adapter selection and presentation.
#[derive(Debug, Clone)]
pub struct GpuConfig {
    /// Power preference for adapter selection.
    pub power_preference: wgpu::PowerPreference,
    /// Present mode (VSync behavior).
    pub present_mode: wgpu::PresentMode,
    /// Maximum frames in flight.
    pub max_frame_latency: u32,
}

impl Default for GpuConfig {
    fn default() -> Self {
        Self {
            power_preference: wgpu::PowerPreference::default(),
            present_mode: wgpu::PresentMode::Fifo, // VSync on
            max_frame_latency: 2,
        }
    }
}

impl GpuConfig {
    /// Config optimized for power efficiency. A tally counter spends most
    /// of its life idle, so this is what the application uses.
    pub fn power_saving() -> Self {
        Self {
            power_preference: wgpu::PowerPreference::LowPower,
            present_mode: wgpu::PresentMode::Fifo,
            max_frame_latency: 2,
        }
    }

    /// Set power preference.
    pub fn with_power_preference(mut self, pref: wgpu::PowerPreference) -> Self {
        self.power_preference = pref;
        self
    }

    /// Set present mode.
    pub fn with_present_mode(mut self, mode: wgpu::PresentMode) -> Self {
        self.present_mode = mode;
        self
    }

    /// Set maximum frame latency.
    pub fn with_max_frame_latency(mut self, latency: u32) -> Self {
        self.max_frame_latency = latency;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_vsync() {
        let config = GpuConfig::default();
        assert_eq!(config.present_mode, wgpu::PresentMode::Fifo);
        assert_eq!(config.max_frame_latency, 2);
    }

    #[test]
    fn test_builder_overrides() {
        let config = GpuConfig::power_saving()
            .with_max_frame_latency(1)
            .with_present_mode(wgpu::PresentMode::Mailbox);
        assert_eq!(config.power_preference, wgpu::PowerPreference::LowPower);
        assert_eq!(config.present_mode, wgpu::PresentMode::Mailbox);
        assert_eq!(config.max_frame_latency, 1);
    }
}
