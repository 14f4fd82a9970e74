//! The tally value and its cap.

/// A counter that grows one step at a time and saturates at [`Tally::FULL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tally(u32);

impl Tally {
    /// Value at which the tally stops counting.
    pub const FULL: u32 = 20;

    pub fn new() -> Self {
        Tally(0)
    }

    /// Add one, never exceeding [`Tally::FULL`].
    pub fn increment(&mut self) {
        if self.0 < Self::FULL {
            self.0 += 1;
        }
    }

    /// Back to zero.
    pub fn reset(&mut self) {
        self.0 = 0;
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    pub fn is_full(&self) -> bool {
        self.0 == Self::FULL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_counts_up_to_full() {
        let mut tally = Tally::new();
        for expected in 1..=Tally::FULL {
            tally.increment();
            assert_eq!(tally.get(), expected);
        }
    }

    #[test]
    fn test_increment_saturates_at_full() {
        let mut tally = Tally::new();
        for _ in 0..Tally::FULL + 5 {
            tally.increment();
        }
        assert_eq!(tally.get(), Tally::FULL);
        assert!(tally.is_full());
    }

    #[test]
    fn test_is_full_flips_exactly_at_cap() {
        let mut tally = Tally::new();
        for _ in 0..Tally::FULL - 1 {
            tally.increment();
            assert!(!tally.is_full());
        }
        tally.increment();
        assert!(tally.is_full());
    }

    #[test]
    fn test_reset_from_any_value() {
        let mut tally = Tally::new();
        tally.reset();
        assert_eq!(tally.get(), 0);

        tally.increment();
        tally.increment();
        tally.reset();
        assert_eq!(tally.get(), 0);
        assert!(!tally.is_full());
    }
}
