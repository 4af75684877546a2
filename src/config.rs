//! Site Configuration
//!
//! Tuning values and external links, embedded from `site.json` at build time.
//! Every field has a default so a partial file is enough.

use leptos::prelude::*;
use serde::Deserialize;

use crate::counter::DEFAULT_DURATION_MS;
use crate::marquee::DEFAULT_SPEED_PX;
use crate::slider::DEFAULT_PERCENT;

const EMBEDDED: &str = include_str!("../site.json");

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub count_up_duration_ms: f64,
    /// Visible fraction that starts a count-up
    pub visibility_threshold: f64,
    pub visibility_root_margin: String,
    pub marquee_speed_px: f64,
    pub slider_default_percent: f64,
    /// Payment method tag sent with the checkout payload
    pub payment_method: String,
    pub checkout_notice: String,
    pub calendar_url: String,
    pub video_url: String,
    pub messenger_url: String,
    pub instagram_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            count_up_duration_ms: DEFAULT_DURATION_MS,
            visibility_threshold: 0.25,
            visibility_root_margin: "-20% 0px".to_string(),
            marquee_speed_px: DEFAULT_SPEED_PX,
            slider_default_percent: DEFAULT_PERCENT,
            payment_method: "przelewy24".to_string(),
            checkout_notice: "Symulacja płatności Przelewy24 — payload w konsoli.".to_string(),
            calendar_url: "https://calendly.com/mateuszgarbas/45min?hide_event_type_details=1&hide_gdpr_banner=1".to_string(),
            video_url: "https://www.youtube.com/embed/8AwVRlXsxlA".to_string(),
            messenger_url: "https://m.me/61569722611144".to_string(),
            instagram_url: "https://instagram.com/mateusz.garbas".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| e.to_string())
    }

    /// Parse the embedded `site.json`
    pub fn embedded() -> Result<Self, String> {
        Self::from_json(EMBEDDED)
    }
}

/// Get the site config from context
pub fn use_site_config() -> SiteConfig {
    expect_context::<SiteConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_parses() {
        let config = SiteConfig::embedded().expect("site.json must parse");
        assert_eq!(config.payment_method, "przelewy24");
        assert_eq!(config.count_up_duration_ms, 1600.0);
    }

    #[test]
    fn test_partial_uses_defaults() {
        let config = SiteConfig::from_json(r#"{ "marqueeSpeedPx": 1.5 }"#).unwrap();
        assert_eq!(config.marquee_speed_px, 1.5);
        assert_eq!(config.visibility_threshold, 0.25);
        assert_eq!(config.visibility_root_margin, "-20% 0px");
        assert_eq!(config.slider_default_percent, 50.0);
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(SiteConfig::from_json("{ nope").is_err());
        assert!(SiteConfig::from_json(r#"{ "countUpDurationMs": "slow" }"#).is_err());
    }
}
