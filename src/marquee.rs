//! Marquee Scroller
//!
//! Horizontal offset over a track that holds its content twice. Once one full
//! copy has scrolled past, the offset wraps to 0, which looks continuous.

/// Default advance per animation frame, in CSS pixels
pub const DEFAULT_SPEED_PX: f64 = 0.35;

#[derive(Clone, Debug, PartialEq)]
pub struct MarqueeState {
    offset: f64,
    speed: f64,
    paused: bool,
}

impl MarqueeState {
    pub fn new(speed: f64) -> Self {
        Self {
            offset: 0.0,
            speed: speed.max(0.0),
            paused: false,
        }
    }

    #[cfg(test)]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[cfg(test)]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// One frame. `half_width` is half the duplicated track's width; the
    /// offset always ends up in `[0, half_width)`, or 0 before layout.
    pub fn advance(&mut self, half_width: f64) -> f64 {
        if half_width <= 0.0 {
            self.offset = 0.0;
            return self.offset;
        }
        if !self.paused {
            self.offset += self.speed;
        }
        // Also catches a track that shrank under the current offset
        if self.offset >= half_width {
            self.offset = 0.0;
        }
        self.offset
    }
}

impl Default for MarqueeState {
    fn default() -> Self {
        Self::new(DEFAULT_SPEED_PX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advances_by_speed() {
        let mut m = MarqueeState::new(0.5);
        assert_eq!(m.advance(100.0), 0.5);
        assert_eq!(m.advance(100.0), 1.0);
    }

    #[test]
    fn test_wraps_at_half_width() {
        let mut m = MarqueeState::new(1.0);
        for _ in 0..9 {
            m.advance(10.0);
        }
        assert_eq!(m.offset(), 9.0);
        assert_eq!(m.advance(10.0), 0.0);
        assert_eq!(m.advance(10.0), 1.0);
    }

    #[test]
    fn test_offset_stays_bounded() {
        let mut m = MarqueeState::default();
        let half = 640.0;
        for _ in 0..100_000 {
            let off = m.advance(half);
            assert!((0.0..half).contains(&off));
        }
    }

    #[test]
    fn test_pause_freezes_offset() {
        let mut m = MarqueeState::new(2.0);
        m.advance(100.0);
        m.set_paused(true);
        assert!(m.is_paused());
        for _ in 0..10 {
            assert_eq!(m.advance(100.0), 2.0);
        }
        m.set_paused(false);
        assert_eq!(m.advance(100.0), 4.0);
    }

    #[test]
    fn test_shrunk_track_resets() {
        let mut m = MarqueeState::new(1.0);
        for _ in 0..50 {
            m.advance(100.0);
        }
        m.set_paused(true);
        assert_eq!(m.advance(20.0), 0.0);
    }

    #[test]
    fn test_unlaid_track_keeps_zero() {
        let mut m = MarqueeState::new(1.0);
        assert_eq!(m.advance(0.0), 0.0);
        assert_eq!(m.advance(-5.0), 0.0);
    }
}
