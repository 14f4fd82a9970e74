//! Light and dark color themes.

use tally_ui::{Color, DisplayMode};

/// Which palette is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeChoice {
    Dark,
    Light,
}

/// Resolved colors for the counter screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub choice: ThemeChoice,
    /// Window background.
    pub background: Color,
    /// The tally readout.
    pub text: Color,
    /// Glow circle at full intensity.
    pub glow: Color,
    /// The tap button dome.
    pub tap_button: Color,
    /// The box the dome sits on.
    pub base: Color,
    /// The reset button.
    pub reset_button: Color,
    /// The congratulations line at a full tally.
    pub congrats: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            choice: ThemeChoice::Dark,
            background: Color::BLACK,
            text: Color::rgb(0.8, 0.8, 0.8),
            glow: Color::rgba(1.0, 1.0, 0.0, 0.7),
            tap_button: Color::rgb(0.86, 0.12, 0.12),
            base: Color::WHITE,
            reset_button: Color::rgba(0.0, 1.0, 1.0, 0.56),
            congrats: Color::rgb(1.0, 0.84, 0.0),
        }
    }

    pub fn light() -> Self {
        Self {
            choice: ThemeChoice::Light,
            background: Color::WHITE,
            text: Color::rgb(0.5, 0.5, 0.5),
            glow: Color::rgba(1.0, 1.0, 0.39, 0.5),
            ..Self::dark()
        }
    }

    pub fn from_display_mode(mode: DisplayMode) -> Self {
        match mode {
            DisplayMode::Dark => Self::dark(),
            DisplayMode::Light => Self::light(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_contrasts_with_background() {
        for theme in [Theme::dark(), Theme::light()] {
            let bg_luma = 0.299 * theme.background.r
                + 0.587 * theme.background.g
                + 0.114 * theme.background.b;
            let text_luma =
                0.299 * theme.text.r + 0.587 * theme.text.g + 0.114 * theme.text.b;
            assert!(
                (bg_luma - text_luma).abs() > 0.2,
                "low contrast in {:?}",
                theme.choice
            );
        }
    }

    #[test]
    fn test_display_mode_maps_to_palette() {
        assert_eq!(
            Theme::from_display_mode(DisplayMode::Dark).choice,
            ThemeChoice::Dark
        );
        assert_eq!(
            Theme::from_display_mode(DisplayMode::Light).choice,
            ThemeChoice::Light
        );
    }

    #[test]
    fn test_accents_are_shared_across_palettes() {
        let dark = Theme::dark();
        let light = Theme::light();
        assert_eq!(dark.tap_button, light.tap_button);
        assert_eq!(dark.reset_button, light.reset_button);
        assert_eq!(dark.congrats, light.congrats);
    }
}
