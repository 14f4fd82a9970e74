//! Application state and message handling.

use std::time::Instant;

use tally_ui::{Application, DisplayMode, Element};

use crate::counter::Tally;
use crate::glow::GlowPulse;
use crate::message::{CounterMessage, Message};
use crate::theme::Theme;
use crate::views;

/// The tally counter application.
pub struct TallyApp {
    tally: Tally,
    glow: GlowPulse,
    theme: Theme,
}

impl TallyApp {
    fn handle_counter(&mut self, message: CounterMessage, now: Instant) {
        match message {
            CounterMessage::Increment => {
                self.tally.increment();
                // The glow pulses even on taps past the cap.
                self.glow.trigger(now);
                log::debug!("Tally incremented to {}", self.tally.get());
            }
            CounterMessage::Reset => {
                self.tally.reset();
                log::debug!("Tally reset");
            }
        }
    }
}

impl Application for TallyApp {
    type Message = Message;

    fn new() -> Self {
        Self {
            tally: Tally::new(),
            glow: GlowPulse::new(),
            theme: Theme::dark(),
        }
    }

    fn title(&self) -> String {
        "Tally Counter".to_string()
    }

    fn update(&mut self, message: Message) {
        let now = Instant::now();
        match message {
            Message::Counter(counter_message) => self.handle_counter(counter_message, now),
            Message::DisplayModeChanged(mode) => {
                self.theme = Theme::from_display_mode(mode);
                log::debug!("Display mode changed to {mode:?}");
            }
            Message::Tick => self.glow.advance(now),
        }
    }

    fn view(&self) -> Element<Message> {
        views::view_counter(&self.theme, self.tally, self.glow.level(Instant::now()))
    }

    fn tick(&self) -> Option<Message> {
        self.glow.is_active().then_some(Message::Tick)
    }

    fn display_mode_changed(&self, mode: DisplayMode) -> Option<Message> {
        Some(Message::DisplayModeChanged(mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeChoice;

    #[test]
    fn test_full_session() {
        let mut app = TallyApp::new();

        for _ in 0..Tally::FULL {
            app.update(Message::increment());
        }
        assert!(app.tally.is_full());

        // One more tap leaves the count at the cap but still pulses.
        app.update(Message::increment());
        assert_eq!(app.tally.get(), Tally::FULL);
        assert!(app.glow.is_active());

        app.update(Message::reset());
        assert_eq!(app.tally.get(), 0);
    }

    #[test]
    fn test_increment_triggers_glow_but_reset_does_not() {
        let mut app = TallyApp::new();
        assert!(!app.glow.is_active());

        app.update(Message::increment());
        assert!(app.glow.is_active());

        let mut app = TallyApp::new();
        app.update(Message::reset());
        assert!(!app.glow.is_active());
    }

    #[test]
    fn test_tick_runs_only_while_glow_is_active() {
        let mut app = TallyApp::new();
        assert_eq!(app.tick(), None);

        app.update(Message::increment());
        assert_eq!(app.tick(), Some(Message::Tick));
    }

    #[test]
    fn test_display_mode_switches_theme() {
        let mut app = TallyApp::new();
        assert_eq!(app.theme.choice, ThemeChoice::Dark);

        let message = app.display_mode_changed(DisplayMode::Light);
        assert_eq!(message, Some(Message::DisplayModeChanged(DisplayMode::Light)));
        app.update(message.unwrap());
        assert_eq!(app.theme.choice, ThemeChoice::Light);
    }
}
