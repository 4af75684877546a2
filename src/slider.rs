//! Reveal boundary for the before/after comparison.

pub const DEFAULT_PERCENT: f64 = 50.0;

/// Percentage of the container width showing the "after" layer, in [0, 100]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealBoundary(f64);

impl RevealBoundary {
    pub fn new(percent: f64) -> Self {
        if percent.is_nan() {
            return Self::default();
        }
        Self(percent.clamp(0.0, 100.0))
    }

    /// Parse a range input value; garbage keeps `self`
    pub fn with_input(self, raw: &str) -> Self {
        raw.trim().parse::<f64>().ok().filter(|v| !v.is_nan()).map(Self::new).unwrap_or(self)
    }

    pub fn percent(self) -> f64 {
        self.0
    }

    /// `clip-path` for the "after" layer: cut from the right so exactly
    /// `percent`% of the container width stays visible
    pub fn after_clip_css(self) -> String {
        format!("inset(0 {}% 0 0)", 100.0 - self.0)
    }

    /// Divider offset from the left edge
    pub fn css(self) -> String {
        format!("{}%", self.0)
    }
}

impl Default for RevealBoundary {
    fn default() -> Self {
        Self(DEFAULT_PERCENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_half() {
        assert_eq!(RevealBoundary::default().percent(), 50.0);
        assert_eq!(RevealBoundary::default().css(), "50%");
    }

    #[test]
    fn test_clamped() {
        assert_eq!(RevealBoundary::new(-3.0).percent(), 0.0);
        assert_eq!(RevealBoundary::new(140.0).percent(), 100.0);
        assert_eq!(RevealBoundary::new(f64::NAN).percent(), 50.0);
    }

    #[test]
    fn test_after_clip_css() {
        assert_eq!(RevealBoundary::new(0.0).after_clip_css(), "inset(0 100% 0 0)");
        assert_eq!(RevealBoundary::new(50.0).after_clip_css(), "inset(0 50% 0 0)");
        assert_eq!(RevealBoundary::new(100.0).after_clip_css(), "inset(0 0% 0 0)");
        assert_eq!(RevealBoundary::new(12.5).after_clip_css(), "inset(0 87.5% 0 0)");
    }

    #[test]
    fn test_visible_width_matches_input() {
        for v in 0..=100 {
            let b = RevealBoundary::default().with_input(&v.to_string());
            let css = b.after_clip_css();
            let right: f64 = css
                .trim_start_matches("inset(0 ")
                .trim_end_matches("% 0 0)")
                .parse()
                .unwrap();
            assert_eq!(100.0 - right, f64::from(v));
            assert_eq!(b.css(), format!("{}%", v));
        }
    }

    #[test]
    fn test_with_input() {
        let b = RevealBoundary::default();
        assert_eq!(b.with_input("73").percent(), 73.0);
        assert_eq!(b.with_input(" 12.5 ").percent(), 12.5);
        assert_eq!(b.with_input("abc").percent(), 50.0);
        assert_eq!(b.with_input("250").percent(), 100.0);
    }
}
