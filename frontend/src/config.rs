use std::rc::Rc;

use serde::Deserialize;
use yew::prelude::*;

/// Id of the optional `<script type="application/json">` block that overrides defaults.
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

/// Options handed to an `IntersectionObserver`.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ObserverConfig {
    pub root_margin: String,
    pub threshold: f64,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            root_margin: "0px".to_string(),
            threshold: 0.0,
        }
    }
}

/// Every tunable of the landing page.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct LandingConfig {
    /// Header turns "scrolled" strictly above this offset.
    pub scroll_threshold_px: f64,
    pub entrance_delay_ms: u32,
    pub counter_duration_ms: f64,
    pub feature_stagger_s: f64,
    pub lazy_observer: ObserverConfig,
    pub stats_observer: ObserverConfig,
    pub embed_base_url: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: 50.0,
            entrance_delay_ms: 100,
            counter_duration_ms: 2000.0,
            feature_stagger_s: 0.2,
            lazy_observer: ObserverConfig {
                root_margin: "0px 0px 100px 0px".to_string(),
                threshold: 0.1,
            },
            stats_observer: ObserverConfig {
                root_margin: "0px".to_string(),
                threshold: 0.5,
            },
            embed_base_url: "https://www.youtube.com/embed/".to_string(),
        }
    }
}

impl LandingConfig {
    /// Parses an override blob. Missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw)
    }
}

/// Loads the config embedded in the host page, or the defaults.
pub fn load() -> LandingConfig {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match raw {
        Some(raw) => LandingConfig::from_json(&raw).unwrap_or_else(|e| {
            log::warn!("Ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
            LandingConfig::default()
        }),
        None => LandingConfig::default(),
    }
}

/// Config provided by the app root, or the defaults outside a provider.
#[hook]
pub fn use_landing_config() -> Rc<LandingConfig> {
    use_context::<Rc<LandingConfig>>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_behaviour() {
        let config = LandingConfig::default();
        assert_eq!(config.scroll_threshold_px, 50.0);
        assert_eq!(config.entrance_delay_ms, 100);
        assert_eq!(config.counter_duration_ms, 2000.0);
        assert_eq!(config.lazy_observer.threshold, 0.1);
        assert_eq!(config.lazy_observer.root_margin, "0px 0px 100px 0px");
        assert_eq!(config.stats_observer.threshold, 0.5);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = LandingConfig::from_json(
            r#"{"scroll_threshold_px": 80, "stats_observer": {"threshold": 0.75}}"#,
        )
        .unwrap();
        assert_eq!(config.scroll_threshold_px, 80.0);
        assert_eq!(config.stats_observer.threshold, 0.75);
        assert_eq!(config.stats_observer.root_margin, "0px");
        assert_eq!(config.counter_duration_ms, 2000.0);
    }

    #[test]
    fn blank_blob_is_default() {
        assert_eq!(LandingConfig::from_json("  \n").unwrap(), LandingConfig::default());
    }

    #[test]
    fn malformed_blob_is_an_error() {
        assert!(LandingConfig::from_json("{not json").is_err());
    }
}
