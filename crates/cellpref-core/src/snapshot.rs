//! Input snapshots assembled by the host before each evaluation.
//!
//! All types are plain data with `#[serde(default)]` so a partial TOML or
//! JSON document describes a realistic device; anything left out takes the
//! platform default.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Carrier Configuration ───────────────────────────────────────────

/// Capability switches from the carrier configuration of one subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapabilityFlags {
    /// Hide both mode selectors and the prepaid data service row.
    pub hide_carrier_network_settings: bool,
    /// Hide the mode selectors while camped on the home network.
    pub hide_preferred_network_type: bool,
    /// Offer CDMA and GSM options side by side.
    pub world_phone: bool,
    /// LTE-on-CDMA devices present the global choice set.
    pub show_cdma_choices: bool,
    pub prefer_2g: bool,
    /// Label LTE as "4G".
    pub show_4g_for_lte: bool,
    pub only_auto_select_in_home_network: bool,
    pub hide_enhanced_4g_lte: bool,
    pub editable_enhanced_4g_lte: bool,
    /// Data roaming can be enabled without the charges dialog.
    pub disable_charge_indication: bool,
    pub ignore_data_enabled_for_video_calls: bool,
    /// Index into the device's Enhanced 4G title/summary variants.
    pub enhanced_4g_title_variant: i32,
    pub carrier_settings_enabled: bool,
    pub apn_expand: bool,
    pub show_apn_setting_cdma: bool,
    /// Flattened component name of the carrier's SIM call manager.
    pub default_sim_call_manager: Option<String>,
}

impl Default for CapabilityFlags {
    fn default() -> Self {
        CapabilityFlags {
            hide_carrier_network_settings: false,
            hide_preferred_network_type: false,
            world_phone: false,
            show_cdma_choices: false,
            prefer_2g: true,
            show_4g_for_lte: false,
            only_auto_select_in_home_network: false,
            hide_enhanced_4g_lte: false,
            editable_enhanced_4g_lte: true,
            disable_charge_indication: false,
            ignore_data_enabled_for_video_calls: false,
            enhanced_4g_title_variant: 0,
            carrier_settings_enabled: false,
            apn_expand: true,
            show_apn_setting_cdma: false,
            default_sim_call_manager: None,
        }
    }
}

// ── Radio ───────────────────────────────────────────────────────────

/// Radio family reported by telephony.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhoneType {
    None,
    #[default]
    Gsm,
    Cdma,
    Sip,
}

impl fmt::Display for PhoneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhoneType::None => write!(f, "none"),
            PhoneType::Gsm => write!(f, "gsm"),
            PhoneType::Cdma => write!(f, "cdma"),
            PhoneType::Sip => write!(f, "sip"),
        }
    }
}

/// Live radio and service state for the subscription being shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadioState {
    pub phone_type: PhoneType,
    pub lte_on_cdma: bool,
    pub is_roaming: bool,
    pub data_reg_in_service: bool,
    pub call_idle: bool,
    pub data_enabled: bool,
    /// MCC+MNC of the serving network (e.g. "310260").
    pub operator_numeric: String,
    pub group_id_level1: String,
    pub network_country_iso: String,
    pub sim_operator_name: String,
}

impl Default for RadioState {
    fn default() -> Self {
        RadioState {
            phone_type: PhoneType::Gsm,
            lte_on_cdma: false,
            is_roaming: false,
            data_reg_in_service: true,
            call_idle: true,
            data_enabled: true,
            operator_numeric: String::new(),
            group_id_level1: String::new(),
            network_country_iso: String::new(),
            sim_operator_name: String::new(),
        }
    }
}

// ── IMS ─────────────────────────────────────────────────────────────

/// Wi-Fi calling preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WfcMode {
    WifiOnly,
    CellularPreferred,
    #[default]
    WifiPreferred,
    /// A vendor value with no summary string.
    Other,
}

/// IMS capability and user-setting state. `None` in a snapshot means the IMS
/// manager could not be obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImsState {
    pub service_ready: bool,
    pub volte_platform_enabled: bool,
    pub volte_provisioned: bool,
    pub vt_platform_enabled: bool,
    pub vt_provisioned: bool,
    pub wfc_platform_enabled: bool,
    pub wfc_provisioned: bool,
    pub enhanced_4g_user_enabled: bool,
    /// TTY is off, or TTY over VoLTE is supported.
    pub non_tty_or_tty_on_volte: bool,
    pub vt_user_enabled: bool,
    pub wfc_user_enabled: bool,
    pub wfc_mode: WfcMode,
    pub wfc_roaming_mode: WfcMode,
}

impl Default for ImsState {
    fn default() -> Self {
        ImsState {
            service_ready: true,
            volte_platform_enabled: false,
            volte_provisioned: true,
            vt_platform_enabled: false,
            vt_provisioned: true,
            wfc_platform_enabled: false,
            wfc_provisioned: true,
            enhanced_4g_user_enabled: true,
            non_tty_or_tty_on_volte: true,
            vt_user_enabled: true,
            wfc_user_enabled: false,
            wfc_mode: WfcMode::WifiPreferred,
            wfc_roaming_mode: WfcMode::WifiPreferred,
        }
    }
}

impl ImsState {
    pub fn volte_available(&self) -> bool {
        self.volte_platform_enabled && self.volte_provisioned && self.service_ready
    }

    pub fn vt_available(&self) -> bool {
        self.vt_platform_enabled && self.vt_provisioned && self.service_ready
    }

    pub fn wfc_available(&self) -> bool {
        self.wfc_platform_enabled && self.wfc_provisioned && self.service_ready
    }
}

/// The telecom SIM call manager registered for the subscription.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimCallManager {
    /// Flattened component name (`package/class`).
    pub component: String,
    /// The package resolves a configure-account activity.
    pub configurable: bool,
    /// Label of that activity.
    pub label: Option<String>,
}

// ── Persisted Settings ──────────────────────────────────────────────

/// Values read from the system settings store for one subscription.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsSnapshot {
    /// Raw `preferred_network_mode{sub_id}`; `None` falls back to the device
    /// default.
    pub preferred_network_mode: Option<i32>,
    /// `lte_service_forced{sub_id}` is non-zero.
    pub lte_service_forced: bool,
    pub prepaid_data_service_url: Option<String>,
    /// Device policy controller enforces managed APNs.
    pub dpc_apn_enforced: bool,
}

impl SettingsSnapshot {
    pub fn preferred_network_mode_key(sub_id: i32) -> String {
        format!("preferred_network_mode{sub_id}")
    }

    pub fn lte_service_forced_key(sub_id: i32) -> String {
        format!("lte_service_forced{sub_id}")
    }

    pub fn has_prepaid_data_service_url(&self) -> bool {
        self.prepaid_data_service_url
            .as_deref()
            .is_some_and(|url| !url.trim().is_empty())
    }
}

/// Restrictions applying to the current user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRestrictions {
    pub is_admin: bool,
    pub data_roaming_disallowed: bool,
    pub cell_broadcast_config_disallowed: bool,
}

impl Default for UserRestrictions {
    fn default() -> Self {
        UserRestrictions {
            is_admin: true,
            data_roaming_disallowed: false,
            cell_broadcast_config_disallowed: false,
        }
    }
}

/// Embedded-SIM state used to decide whether the eSIM entry point is shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EuiccState {
    pub enabled: bool,
    /// At least one profile was ever downloaded.
    pub provisioned: bool,
    pub developer_mode: bool,
    /// Lower- or upper-case ISO country codes where eSIM is offered.
    pub supported_countries: Vec<String>,
    /// Device CID property.
    pub cid: Option<String>,
    /// CIDs for which eSIM UI is suppressed.
    pub ignored_cids: Vec<String>,
    pub ui_enabled_by_default: bool,
}

impl Default for EuiccState {
    fn default() -> Self {
        EuiccState {
            enabled: false,
            provisioned: false,
            developer_mode: false,
            supported_countries: Vec::new(),
            cid: None,
            ignored_cids: Vec::new(),
            ui_enabled_by_default: true,
        }
    }
}

// ── Subscriptions ───────────────────────────────────────────────────

/// One active subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionInfo {
    pub subscription_id: i32,
    pub sim_slot_index: usize,
    pub display_name: String,
}

/// Active subscriptions, unique by id and ordered by SIM slot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<SubscriptionInfo>", into = "Vec<SubscriptionInfo>")]
pub struct SubscriptionSnapshot {
    subs: Vec<SubscriptionInfo>,
}

impl SubscriptionSnapshot {
    /// Normalize a raw list: later duplicates of an id are dropped, the rest
    /// sorted by slot.
    pub fn new(raw: Vec<SubscriptionInfo>) -> Self {
        let mut subs: Vec<SubscriptionInfo> = Vec::with_capacity(raw.len());
        for info in raw {
            if subs
                .iter()
                .any(|s| s.subscription_id == info.subscription_id)
            {
                continue;
            }
            subs.push(info);
        }
        subs.sort_by_key(|s| s.sim_slot_index);
        SubscriptionSnapshot { subs }
    }

    pub fn len(&self) -> usize {
        self.subs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SubscriptionInfo> {
        self.subs.iter()
    }

    pub fn by_slot(&self, slot: usize) -> Option<&SubscriptionInfo> {
        self.subs.iter().find(|s| s.sim_slot_index == slot)
    }

    pub fn by_id(&self, subscription_id: i32) -> Option<&SubscriptionInfo> {
        self.subs
            .iter()
            .find(|s| s.subscription_id == subscription_id)
    }

    pub fn max_slot(&self) -> Option<usize> {
        self.subs.iter().map(|s| s.sim_slot_index).max()
    }
}

impl From<Vec<SubscriptionInfo>> for SubscriptionSnapshot {
    fn from(raw: Vec<SubscriptionInfo>) -> Self {
        SubscriptionSnapshot::new(raw)
    }
}

impl From<SubscriptionSnapshot> for Vec<SubscriptionInfo> {
    fn from(snapshot: SubscriptionSnapshot) -> Self {
        snapshot.subs
    }
}

// ── Evaluation Input ────────────────────────────────────────────────

/// Everything the visibility engine reads for one subscription.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationSnapshot {
    pub sub_id: i32,
    pub flags: CapabilityFlags,
    pub radio: RadioState,
    pub ims: Option<ImsState>,
    pub settings: SettingsSnapshot,
    pub user: UserRestrictions,
    pub euicc: EuiccState,
    pub sim_call_manager: Option<SimCallManager>,
    pub has_active_subscriptions: bool,
    pub expand_advanced_fields: bool,
}
