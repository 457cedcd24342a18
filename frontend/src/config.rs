use log::{error, Level};
use once_cell::sync::Lazy;
use serde::Deserialize;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Local storage key holding the "light"/"dark" preference.
pub const THEME_STORAGE_KEY: &str = "theme";

const SITE_JSON: &str = include_str!("../site.json");

static SITE: Lazy<SiteConfig> = Lazy::new(|| match SiteConfig::from_json(SITE_JSON) {
    Ok(config) => config,
    Err(e) => {
        error!("Failed to parse site.json, using built-in defaults: {}", e);
        SiteConfig::default()
    }
});

/// Site configuration embedded at build time.
pub fn site() -> &'static SiteConfig {
    &SITE
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub brand: String,
    pub currency: String,
    pub plans: Vec<Plan>,
    pub rates: Rates,
    pub sliders: Sliders,
    pub timing: Timing,
    pub mobile_breakpoint_px: f64,
    pub reveal_threshold: f64,
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// The plan marked `selected` in the catalog, if any.
    pub fn preselected_plan(&self) -> Option<&Plan> {
        self.plans.iter().find(|p| p.selected)
    }

    pub fn plan(&self, id: &str) -> Option<&Plan> {
        self.plans.iter().find(|p| p.id == id)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "NovaHost".to_string(),
            currency: "€".to_string(),
            plans: builtin_plans(),
            rates: Rates::default(),
            sliders: Sliders::default(),
            timing: Timing::default(),
            mobile_breakpoint_px: 900.0,
            reveal_threshold: 0.12,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Plan {
    pub id: String,
    pub name: String,
    pub monthly: u32,
    #[serde(default)]
    pub annual: Option<u32>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub selected: bool,
}

fn plan(id: &str, name: &str, monthly: u32, annual: Option<u32>, features: &[&str]) -> Plan {
    Plan {
        id: id.to_string(),
        name: name.to_string(),
        monthly,
        annual,
        features: features.iter().map(|f| f.to_string()).collect(),
        selected: false,
    }
}

/// Catalog used when `plans` is absent or the embedded file fails to parse.
fn builtin_plans() -> Vec<Plan> {
    vec![
        plan("starter", "Starter", 5, Some(54), &["1 vCPU inclus", "2 Go RAM", "SSD NVMe 25 Go"]),
        Plan {
            selected: true,
            ..plan("pro", "Pro", 12, Some(130), &["2 vCPU inclus", "8 Go RAM", "SSD NVMe 100 Go"])
        },
        plan("business", "Business", 29, None, &["4 vCPU dédiés", "16 Go RAM", "SSD NVMe 250 Go"]),
    ]
}

/// Per-unit monthly prices of the resource calculator.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Rates {
    pub cpu: f64,
    pub ram_gb: f64,
    pub disk_gb: f64,
    /// Multiplier applied to twelve months when billing yearly.
    pub annual_factor: f64,
}

impl Default for Rates {
    fn default() -> Self {
        Self {
            cpu: 3.0,
            ram_gb: 0.5,
            disk_gb: 0.02,
            annual_factor: 0.9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: i32,
    pub max: i32,
    pub step: i32,
    pub default: i32,
}

/// A slider entry as written in the file. Missing keys keep the built-in value.
#[derive(Deserialize, Default)]
#[serde(default)]
struct SliderOverride {
    min: Option<i32>,
    max: Option<i32>,
    step: Option<i32>,
    default: Option<i32>,
}

impl SliderOverride {
    fn over(self, base: SliderRange) -> SliderRange {
        SliderRange {
            min: self.min.unwrap_or(base.min),
            max: self.max.unwrap_or(base.max),
            step: self.step.unwrap_or(base.step),
            default: self.default.unwrap_or(base.default),
        }
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct SliderOverrides {
    cpu: SliderOverride,
    ram: SliderOverride,
    disk: SliderOverride,
}

impl From<SliderOverrides> for Sliders {
    fn from(raw: SliderOverrides) -> Self {
        let base = Sliders::default();
        Self {
            cpu: raw.cpu.over(base.cpu),
            ram: raw.ram.over(base.ram),
            disk: raw.disk.over(base.disk),
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(from = "SliderOverrides")]
pub struct Sliders {
    pub cpu: SliderRange,
    pub ram: SliderRange,
    pub disk: SliderRange,
}

impl Default for Sliders {
    fn default() -> Self {
        Self {
            cpu: SliderRange { min: 1, max: 16, step: 1, default: 2 },
            ram: SliderRange { min: 1, max: 64, step: 1, default: 4 },
            disk: SliderRange { min: 10, max: 1000, step: 10, default: 100 },
        }
    }
}

/// Durations in milliseconds.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Timing {
    pub toast_ms: u32,
    pub toast_hide_ms: u32,
    pub ripple_ms: u32,
    pub count_up_ms: u32,
    pub add_cooldown_ms: u32,
    pub reveal_stagger_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            toast_ms: 3500,
            toast_hide_ms: 250,
            ripple_ms: 600,
            count_up_ms: 600,
            add_cooldown_ms: 1200,
            reveal_stagger_ms: 80,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_site_json_parses() {
        let config = SiteConfig::from_json(SITE_JSON).expect("site.json should parse");
        assert_eq!(config.brand, "NovaHost");
        assert_eq!(config.plans.len(), 3);
        assert_eq!(config.rates, Rates::default());
        assert_eq!(config.sliders, Sliders::default());
        assert_eq!(config.timing, Timing::default());
    }

    #[test]
    fn at_most_one_plan_is_preselected() {
        let config = SiteConfig::from_json(SITE_JSON).unwrap();
        assert_eq!(config.plans.iter().filter(|p| p.selected).count(), 1);
        assert_eq!(config.preselected_plan().map(|p| p.id.as_str()), Some("pro"));
    }

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config = SiteConfig::from_json(r#"{ "brand": "Test", "rates": { "cpu": 4.0 } }"#).unwrap();
        assert_eq!(config.brand, "Test");
        assert_eq!(config.currency, "€");
        assert_eq!(config.rates.cpu, 4.0);
        assert_eq!(config.rates.ram_gb, 0.5);
        assert_eq!(config.mobile_breakpoint_px, 900.0);
        assert_eq!(config.plans, builtin_plans());
    }

    #[test]
    fn partial_slider_entry_keeps_other_keys() {
        let config = SiteConfig::from_json(r#"{ "sliders": { "cpu": { "max": 32 } } }"#)
            .expect("a partial slider entry should parse");
        let defaults = Sliders::default();
        assert_eq!(config.sliders.cpu, SliderRange { max: 32, ..defaults.cpu });
        assert_eq!(config.sliders.ram, defaults.ram);
        assert_eq!(config.sliders.disk, defaults.disk);
        assert_eq!(config.plans.len(), 3);
    }

    #[test]
    fn fallback_config_still_offers_plans() {
        let config = SiteConfig::default();
        assert_eq!(config.preselected_plan().map(|p| p.id.as_str()), Some("pro"));
        assert_eq!(config.plan("business").and_then(|p| p.annual), None);
        assert_eq!(config.plan("enterprise"), None);
    }

    #[test]
    fn missing_annual_price_is_none() {
        let config = SiteConfig::from_json(SITE_JSON).unwrap();
        assert_eq!(config.plan("business").and_then(|p| p.annual), None);
        assert_eq!(config.plan("starter").and_then(|p| p.annual), Some(54));
    }

    #[test]
    fn only_catalog_ids_resolve() {
        let config = SiteConfig::from_json(SITE_JSON).unwrap();
        for id in ["starter", "pro", "business"] {
            assert_eq!(config.plan(id).map(|p| p.id.as_str()), Some(id));
        }
        assert_eq!(config.plan("enterprise"), None);
        assert_eq!(config.plan(""), None);
    }

    #[test]
    fn malformed_config_is_an_error() {
        assert!(SiteConfig::from_json("{ not json").is_err());
    }
}
