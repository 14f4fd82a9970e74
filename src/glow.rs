//! Glow pulse animation state.
//!
//! A pulse rises from its current level to full over [`RISE`] and falls
//! back to zero over [`FALL`]. Time is passed in explicitly so the logic
//! is deterministic and testable.

use std::time::{Duration, Instant};

/// Time for the glow to reach full intensity.
const RISE: Duration = Duration::from_millis(200);

/// Time for the glow to fade back out.
const FALL: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    /// Rising from `from` toward 1.0 since `started`.
    Rising { from: f32, started: Instant },
    Falling { started: Instant },
}

/// A retriggerable glow pulse.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlowPulse {
    phase: Phase,
}

impl GlowPulse {
    pub fn new() -> Self {
        Self { phase: Phase::Idle }
    }

    /// Start a pulse. If one is already running it restarts from the
    /// current level, so rapid triggers never cause a visible jump.
    pub fn trigger(&mut self, now: Instant) {
        let from = self.level(now);
        self.phase = Phase::Rising { from, started: now };
    }

    /// Move the state machine forward to `now`.
    pub fn advance(&mut self, now: Instant) {
        match self.phase {
            Phase::Idle => {}
            Phase::Rising { started, .. } => {
                if now >= started + RISE {
                    self.phase = Phase::Falling {
                        started: started + RISE,
                    };
                    // A long stall can skip the whole fall too.
                    self.advance(now);
                }
            }
            Phase::Falling { started } => {
                if now >= started + FALL {
                    self.phase = Phase::Idle;
                }
            }
        }
    }

    /// Glow intensity in [0, 1] at the given time.
    pub fn level(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Idle => 0.0,
            Phase::Rising { from, started } => {
                let t = elapsed_fraction(started, now, RISE);
                (from + (1.0 - from) * t).clamp(0.0, 1.0)
            }
            Phase::Falling { started } => {
                let t = elapsed_fraction(started, now, FALL);
                (1.0 - t).clamp(0.0, 1.0)
            }
        }
    }

    /// Whether the pulse still needs frames.
    pub fn is_active(&self) -> bool {
        self.phase != Phase::Idle
    }
}

impl Default for GlowPulse {
    fn default() -> Self {
        Self::new()
    }
}

fn elapsed_fraction(started: Instant, now: Instant, duration: Duration) -> f32 {
    let elapsed = now.saturating_duration_since(started);
    (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero_and_inactive() {
        let glow = GlowPulse::new();
        assert_eq!(glow.level(Instant::now()), 0.0);
        assert!(!glow.is_active());
    }

    #[test]
    fn test_rises_to_full_at_rise_boundary() {
        let t0 = Instant::now();
        let mut glow = GlowPulse::new();
        glow.trigger(t0);

        assert_eq!(glow.level(t0), 0.0);
        assert!((glow.level(t0 + RISE / 2) - 0.5).abs() < 1e-4);
        assert_eq!(glow.level(t0 + RISE), 1.0);
    }

    #[test]
    fn test_falls_back_to_zero_then_idles() {
        let t0 = Instant::now();
        let mut glow = GlowPulse::new();
        glow.trigger(t0);

        glow.advance(t0 + RISE);
        assert!((glow.level(t0 + RISE + FALL / 2) - 0.5).abs() < 1e-4);
        assert_eq!(glow.level(t0 + RISE + FALL), 0.0);

        glow.advance(t0 + RISE + FALL);
        assert!(!glow.is_active());
        assert_eq!(glow.level(t0 + RISE + FALL), 0.0);
    }

    #[test]
    fn test_retrigger_restarts_from_current_level() {
        let t0 = Instant::now();
        let mut glow = GlowPulse::new();
        glow.trigger(t0);

        // Retrigger halfway up; the level is continuous at that instant.
        let mid = t0 + RISE / 2;
        let before = glow.level(mid);
        glow.trigger(mid);
        assert!((glow.level(mid) - before).abs() < 1e-4);

        // And it still tops out at full strength.
        assert_eq!(glow.level(mid + RISE), 1.0);
    }

    #[test]
    fn test_level_is_always_in_range() {
        let t0 = Instant::now();
        let mut glow = GlowPulse::new();
        glow.trigger(t0);

        let total = RISE + FALL;
        for i in 0..=50u32 {
            let now = t0 + total * i / 40; // goes past the end of the pulse
            glow.advance(now);
            let level = glow.level(now);
            assert!((0.0..=1.0).contains(&level), "level {level} out of range");
        }
        assert!(!glow.is_active());
    }

    #[test]
    fn test_long_stall_skips_to_idle() {
        let t0 = Instant::now();
        let mut glow = GlowPulse::new();
        glow.trigger(t0);

        // A single late advance crosses both phase boundaries.
        glow.advance(t0 + RISE + FALL + Duration::from_secs(1));
        assert!(!glow.is_active());
    }
}
