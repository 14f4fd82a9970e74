//! Layout and label constants for the counter screen.

/// Font sizes.
pub mod text {
    /// The tally readout under the button.
    pub const TALLY: f32 = 24.0;
    /// The congratulations line at a full tally.
    pub const CONGRATS: f32 = 20.0;
    /// The reset button label.
    pub const RESET: f32 = 14.0;
}

/// Window sizing.
pub mod window {
    pub const DEFAULT_SIZE: (u32, u32) = (420, 760);
    pub const MIN_SIZE: (u32, u32) = (320, 560);
}

/// Fixed element dimensions, in logical pixels.
pub mod layout {
    /// The red dome tap button.
    pub const TAP_BUTTON_WIDTH: f32 = 150.0;
    pub const TAP_BUTTON_HEIGHT: f32 = 75.0;

    /// The white box the dome sits on.
    pub const BASE_WIDTH: f32 = 170.0;
    pub const BASE_HEIGHT: f32 = 120.0;

    /// How far the glow circle extends past the button assembly.
    pub const HALO_MARGIN: f32 = 50.0;

    /// Reserved height for the congratulations line, so the layout does
    /// not shift when it appears.
    pub const MESSAGE_AREA_HEIGHT: f32 = 80.0;

    /// The reset button in the top corner.
    pub const RESET_WIDTH: f32 = 80.0;
    pub const RESET_HEIGHT: f32 = 40.0;

    /// Vertical gap between the major screen sections.
    pub const SECTION_SPACING: f32 = 20.0;
}

/// User-facing strings.
pub mod labels {
    /// Suffix appended to the tally readout, e.g. "20へぇ～".
    pub const TALLY_SUFFIX: &str = "へぇ～";
    /// Shown when the tally is full.
    pub const CONGRATS: &str = "満へぇ～いただきました";
    pub const RESET: &str = "リセット";
}
