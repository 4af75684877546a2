//! Count-Up Machine
//!
//! Idle until the host becomes visible, then eases from 0 to the target.
//! The Idle -> Running transition happens at most once.

/// Default animation length in milliseconds
pub const DEFAULT_DURATION_MS: f64 = 1600.0;

/// `1 - (1 - p)^3`, with `p` clamped to [0, 1]
pub fn ease_out_cubic(p: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CountUpPhase {
    Idle,
    /// `origin` is the timestamp of the first frame after the trigger
    Running { origin: Option<f64> },
}

/// Result of one animation frame
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountUpFrame {
    pub value: u32,
    /// No further frames are needed
    pub finished: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CountUpMachine {
    target: u32,
    duration_ms: f64,
    phase: CountUpPhase,
    displayed: u32,
}

impl CountUpMachine {
    pub fn new(target: u32, duration_ms: f64) -> Self {
        Self {
            target,
            duration_ms: duration_ms.max(0.0),
            phase: CountUpPhase::Idle,
            displayed: 0,
        }
    }

    #[cfg(test)]
    pub fn phase(&self) -> CountUpPhase {
        self.phase
    }

    #[cfg(test)]
    pub fn displayed(&self) -> u32 {
        self.displayed
    }

    /// Visibility fired. Returns `true` only for the first call.
    pub fn trigger(&mut self) -> bool {
        match self.phase {
            CountUpPhase::Idle => {
                self.phase = CountUpPhase::Running { origin: None };
                true
            }
            CountUpPhase::Running { .. } => false,
        }
    }

    /// Advance to the frame at `timestamp` (ms). Idle machines stay at 0.
    pub fn frame(&mut self, timestamp: f64) -> CountUpFrame {
        let origin = match self.phase {
            CountUpPhase::Idle => {
                return CountUpFrame { value: self.displayed, finished: false };
            }
            CountUpPhase::Running { origin: Some(origin) } => origin,
            CountUpPhase::Running { origin: None } => {
                self.phase = CountUpPhase::Running { origin: Some(timestamp) };
                timestamp
            }
        };

        let elapsed = (timestamp - origin).max(0.0);
        let progress = if self.duration_ms > 0.0 {
            (elapsed / self.duration_ms).min(1.0)
        } else {
            1.0
        };

        let value = (f64::from(self.target) * ease_out_cubic(progress)).round() as u32;
        // Out-of-order timestamps never move the display backwards
        self.displayed = value.min(self.target).max(self.displayed);

        CountUpFrame {
            value: self.displayed,
            finished: progress >= 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_out_cubic_bounds() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert_eq!(ease_out_cubic(0.5), 0.875);
        assert_eq!(ease_out_cubic(2.0), 1.0);
        assert_eq!(ease_out_cubic(-1.0), 0.0);
    }

    #[test]
    fn test_idle_stays_at_zero() {
        let mut m = CountUpMachine::new(43, DEFAULT_DURATION_MS);
        for ts in [0.0, 1000.0, 50_000.0] {
            let f = m.frame(ts);
            assert_eq!(f.value, 0);
            assert!(!f.finished);
        }
        assert_eq!(m.phase(), CountUpPhase::Idle);
    }

    #[test]
    fn test_trigger_is_one_shot() {
        let mut m = CountUpMachine::new(6, DEFAULT_DURATION_MS);
        assert!(m.trigger());
        assert!(!m.trigger());
        m.frame(100.0);
        assert!(!m.trigger());
        assert_eq!(m.phase(), CountUpPhase::Running { origin: Some(100.0) });
    }

    #[test]
    fn test_elapsed_measured_from_first_frame() {
        let mut m = CountUpMachine::new(43, 1600.0);
        m.trigger();
        // First frame arrives long after page load
        assert_eq!(m.frame(9000.0).value, 0);
        // Half-way: 43 * 0.875 = 37.625
        assert_eq!(m.frame(9800.0).value, 38);
    }

    #[test]
    fn test_monotonic_and_reaches_target() {
        let mut m = CountUpMachine::new(43, 1600.0);
        m.trigger();
        let mut last = 0;
        let mut ts = 0.0;
        loop {
            let f = m.frame(ts);
            assert!(f.value >= last);
            assert!(f.value <= 43);
            last = f.value;
            if f.finished {
                break;
            }
            ts += 16.7;
        }
        assert_eq!(last, 43);
        assert!(ts >= 1600.0);
    }

    #[test]
    fn test_late_frame_finishes_at_target() {
        let mut m = CountUpMachine::new(6, 1600.0);
        m.trigger();
        m.frame(0.0);
        let f = m.frame(5000.0);
        assert_eq!(f, CountUpFrame { value: 6, finished: true });
    }

    #[test]
    fn test_backwards_timestamp_does_not_decrease() {
        let mut m = CountUpMachine::new(100, 1000.0);
        m.trigger();
        m.frame(0.0);
        let ahead = m.frame(500.0).value;
        assert_eq!(m.frame(200.0).value, ahead);
        assert_eq!(m.displayed(), ahead);
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        let mut m = CountUpMachine::new(9, 0.0);
        m.trigger();
        assert_eq!(m.frame(3.0), CountUpFrame { value: 9, finished: true });
    }
}
