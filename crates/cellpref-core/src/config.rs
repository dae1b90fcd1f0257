use serde::Deserialize;

use crate::error::ConfigError;
use crate::mode::NetworkMode;

pub const CONFIG_VERSION: u32 = 1;

/// Number of active subscriptions at which per-SIM tabs appear.
pub const DEFAULT_TAB_THRESHOLD: usize = 2;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DeviceConfigInput {
    pub version: u32,
    pub tab_threshold: Option<usize>,
    pub default_network_mode: Option<i32>,
    pub lte_enabled: Option<bool>,
    pub support_tdscdma: bool,
    pub tdscdma_roaming_networks: Vec<String>,
    pub world_mode: Option<String>,
    pub unknown_tab_label: Option<String>,
    pub cell_broadcast_app_link: Option<bool>,
    pub enhanced_4g: Enhanced4gVariantsInput,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Enhanced4gVariantsInput {
    pub titles: Vec<String>,
    pub summaries: Vec<String>,
}

/// Title/summary strings for the Enhanced 4G LTE row, indexed by the carrier's
/// title variant. Index 0 is the default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enhanced4gVariants {
    pub titles: Vec<String>,
    pub summaries: Vec<String>,
}

impl Default for Enhanced4gVariants {
    fn default() -> Self {
        Self {
            titles: vec![
                "Enhanced 4G LTE Mode".into(),
                "VoLTE".into(),
                "Advanced Calling".into(),
                "4G Calling".into(),
            ],
            summaries: vec![
                "Use LTE services to improve voice and other communications (recommended)"
                    .into(),
                "Use 4G services to improve voice and other communications (recommended)"
                    .into(),
            ],
        }
    }
}

impl Enhanced4gVariants {
    /// Bounds-checked lookup; anything out of range falls back to index 0.
    pub fn title(&self, variant: i32) -> Option<&str> {
        pick_variant(&self.titles, variant)
    }

    pub fn summary(&self, variant: i32) -> Option<&str> {
        pick_variant(&self.summaries, variant)
    }
}

fn pick_variant(list: &[String], variant: i32) -> Option<&str> {
    usize::try_from(variant)
        .ok()
        .and_then(|idx| list.get(idx))
        .or_else(|| list.first())
        .map(String::as_str)
}

/// Device-level resources the settings screen reads alongside carrier config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceConfig {
    pub version: u32,
    pub tab_threshold: usize,
    /// Mode applied when the settings store holds no value, and forced when
    /// carrier config hides the selectors on the home network.
    pub default_network_mode: NetworkMode,
    /// LTE is offered in the enabled-networks list.
    pub lte_enabled: bool,
    pub support_tdscdma: bool,
    /// Operator numerics where TDSCDMA is offered while roaming.
    pub tdscdma_roaming_networks: Vec<String>,
    /// `"<on>;<gid1>"` world-mode switch.
    pub world_mode: String,
    pub unknown_tab_label: String,
    pub cell_broadcast_app_link: bool,
    pub enhanced_4g: Enhanced4gVariants,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            tab_threshold: DEFAULT_TAB_THRESHOLD,
            default_network_mode: NetworkMode::LteGsmWcdma,
            lte_enabled: true,
            support_tdscdma: false,
            tdscdma_roaming_networks: Vec::new(),
            world_mode: String::new(),
            unknown_tab_label: "Unknown".into(),
            cell_broadcast_app_link: true,
            enhanced_4g: Enhanced4gVariants::default(),
        }
    }
}

impl DeviceConfigInput {
    pub fn resolve(self) -> Result<DeviceConfig, ConfigError> {
        let defaults = DeviceConfig::default();

        let version = if self.version == 0 {
            CONFIG_VERSION
        } else {
            self.version
        };
        if version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion(version));
        }

        let tab_threshold = self.tab_threshold.unwrap_or(defaults.tab_threshold);
        if tab_threshold == 0 {
            return Err(ConfigError::InvalidValue {
                field: "tab_threshold",
                reason: "must be at least 1".into(),
            });
        }

        let default_network_mode = match self.default_network_mode {
            Some(raw) => NetworkMode::from_raw(raw).map_err(|e| ConfigError::InvalidValue {
                field: "default_network_mode",
                reason: e.to_string(),
            })?,
            None => defaults.default_network_mode,
        };

        let tdscdma_roaming_networks = self
            .tdscdma_roaming_networks
            .into_iter()
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();

        let unknown_tab_label = self
            .unknown_tab_label
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .unwrap_or(defaults.unknown_tab_label);

        let enhanced_4g = Enhanced4gVariants {
            titles: if self.enhanced_4g.titles.is_empty() {
                defaults.enhanced_4g.titles
            } else {
                self.enhanced_4g.titles
            },
            summaries: if self.enhanced_4g.summaries.is_empty() {
                defaults.enhanced_4g.summaries
            } else {
                self.enhanced_4g.summaries
            },
        };

        Ok(DeviceConfig {
            version,
            tab_threshold,
            default_network_mode,
            lte_enabled: self.lte_enabled.unwrap_or(defaults.lte_enabled),
            support_tdscdma: self.support_tdscdma,
            tdscdma_roaming_networks,
            world_mode: self.world_mode.unwrap_or_default(),
            unknown_tab_label,
            cell_broadcast_app_link: self
                .cell_broadcast_app_link
                .unwrap_or(defaults.cell_broadcast_app_link),
            enhanced_4g,
        })
    }
}

impl DeviceConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        if input.trim().is_empty() {
            return Ok(DeviceConfig::default());
        }
        let parsed: DeviceConfigInput = toml::from_str(input)?;
        parsed.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_toml_config_basic() {
        let toml = r#"
            version = 1
            tab_threshold = 2
            default_network_mode = 10
            lte_enabled = false
            support_tdscdma = true
            tdscdma_roaming_networks = ["46000", " ", "46007 "]
            world_mode = "true;310260"

            [enhanced_4g]
            titles = ["Enhanced 4G LTE Mode", "VoLTE"]
        "#;
        let cfg = DeviceConfig::from_toml_str(toml).unwrap();
        assert_eq!(cfg.default_network_mode, NetworkMode::LteCdmaEvdoGsmWcdma);
        assert!(!cfg.lte_enabled);
        assert!(cfg.support_tdscdma);
        assert_eq!(cfg.tdscdma_roaming_networks, vec!["46000", "46007"]);
        assert_eq!(cfg.world_mode, "true;310260");
        assert_eq!(cfg.enhanced_4g.titles.len(), 2);
        // Summaries not given: defaults kept.
        assert!(!cfg.enhanced_4g.summaries.is_empty());
    }

    #[test]
    fn world_mode_is_kept_verbatim() {
        let cfg = DeviceConfig::from_toml_str(r#"world_mode = "true; ""#).unwrap();
        assert_eq!(cfg.world_mode, "true; ");
        assert!(!crate::resolver::is_world_mode(&cfg.world_mode, ""));
    }

    #[test]
    fn empty_input_uses_defaults() {
        let cfg = DeviceConfig::from_toml_str("   ").unwrap();
        assert_eq!(cfg, DeviceConfig::default());
        assert_eq!(cfg.tab_threshold, DEFAULT_TAB_THRESHOLD);
    }

    #[test]
    fn rejects_unknown_version() {
        let err = DeviceConfig::from_toml_str("version = 7").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedVersion(7)));
    }

    #[test]
    fn rejects_invalid_default_mode() {
        let err = DeviceConfig::from_toml_str("default_network_mode = 42").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "default_network_mode",
                ..
            }
        ));
    }

    #[test]
    fn rejects_zero_tab_threshold() {
        let err = DeviceConfig::from_toml_str("tab_threshold = 0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "tab_threshold",
                ..
            }
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = DeviceConfig::from_toml_str("tab_threshold = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn variant_lookup_is_bounds_checked() {
        let variants = Enhanced4gVariants::default();
        assert_eq!(variants.title(1), Some("VoLTE"));
        assert_eq!(variants.title(-3), Some("Enhanced 4G LTE Mode"));
        assert_eq!(variants.title(99), Some("Enhanced 4G LTE Mode"));
        // Two summaries only: index 3 is out of range for summaries.
        assert_eq!(variants.summary(3), variants.summary(0));
        let empty = Enhanced4gVariants {
            titles: Vec::new(),
            summaries: Vec::new(),
        };
        assert_eq!(empty.title(0), None);
    }
}
