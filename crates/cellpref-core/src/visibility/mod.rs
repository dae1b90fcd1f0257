//! # Settings Visibility
//!
//! Computes the state of every row on the mobile-network screen for one
//! subscription, plus the network-mode resolution the selectors display.
//!
//! ## Layout
//!
//! ```text
//! basic rows        mobile data, data roaming, data usage (always shown)
//! ├─ no SIM         eSIM entry point (when offered)
//! ├─ collapsed      "Advanced" entry only
//! └─ expanded       mode selectors, calling, LTE data service, cell broadcast,
//!                   eSIM, and the GSM/CDMA sub-options
//! ```
//!
//! ## Mode selector cascade (first match wins)
//!
//! 1. carrier hides network settings: both selectors and LTE data service go
//! 2. carrier hides the preferred type on the home network: both selectors go,
//!    the stored value is replaced by the device default
//! 3. world phone: full "preferred network mode" list plus both sub-option sets
//! 4. otherwise: condensed "enabled networks" list
//!
//! Evaluation is pure; the same snapshot always yields the same result.

pub mod calling;
pub mod euicc;
pub mod rows;

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::DeviceConfig;
use crate::error::EvalError;
use crate::mode::NetworkMode;
use crate::resolver::{
    preferred_mode_summary, resolve_enabled_networks_entries, resolve_summary, ChoiceListVariant,
    ModeContext, ModeFamily, OptionControl, PreferredModeSummary, SummaryCategory,
};
use crate::snapshot::{EvaluationSnapshot, PhoneType};

pub use calling::{
    Enhanced4gPresentation, VideoCallingPresentation, WfcSummary, WifiCallingPresentation,
};
pub use euicc::show_euicc_settings;
pub use rows::{RowId, RowState};

use rows::RowTable;

/// What the selectors display for the stored network mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModeResolution {
    /// Raw code the resolution started from.
    pub stored: i32,
    /// `None` when `stored` is not a valid code.
    pub canonical: Option<NetworkMode>,
    pub family: Option<ModeFamily>,
    pub summary: SummaryCategory,
    pub preferred_summary: PreferredModeSummary,
    /// Set only when the "enabled networks" selector is populated.
    pub choice_list: Option<ChoiceListVariant>,
    /// World-mode control of the CDMA/GSM sub-options.
    pub options: Option<OptionControl>,
    /// Code to push to the modem so it matches the displayed setting.
    pub mode_to_apply: Option<NetworkMode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationResult {
    pub rows: BTreeMap<RowId, RowState>,
    /// `None` unless the advanced section was evaluated.
    pub mode: Option<ModeResolution>,
    pub enhanced_4g: Option<Enhanced4gPresentation>,
    pub wifi_calling: Option<WifiCallingPresentation>,
    pub video_calling: Option<VideoCallingPresentation>,
    /// "Manual mode disallowed" summary for the automatic network selection row.
    pub auto_select_summary: Option<String>,
    /// SIM operator name shown under the eSIM row.
    pub euicc_summary: Option<String>,
}

impl EvaluationResult {
    pub fn row(&self, id: RowId) -> RowState {
        self.rows.get(&id).copied().unwrap_or_default()
    }
}

pub struct SettingsVisibilityEngine {
    device: DeviceConfig,
}

impl SettingsVisibilityEngine {
    pub fn new(device: DeviceConfig) -> Self {
        SettingsVisibilityEngine { device }
    }

    pub fn device(&self) -> &DeviceConfig {
        &self.device
    }

    /// Evaluate the screen for one subscription.
    ///
    /// Fails only when a branch that needs the radio family meets a phone
    /// type other than GSM or CDMA.
    pub fn evaluate(&self, snapshot: &EvaluationSnapshot) -> Result<EvaluationResult, EvalError> {
        let has_subs = snapshot.has_active_subscriptions;
        let mut rows = RowTable::new();
        let mut result = EvaluationResult {
            rows: BTreeMap::new(),
            mode: None,
            enhanced_4g: None,
            wifi_calling: None,
            video_calling: None,
            auto_select_summary: None,
            euicc_summary: None,
        };

        rows.show(RowId::MobileData, has_subs);
        rows.show(
            RowId::DataRoaming,
            has_subs && !snapshot.user.data_roaming_disallowed,
        );
        rows.show(RowId::DataUsage, has_subs);

        let show_euicc = show_euicc_settings(&snapshot.euicc, &snapshot.radio.network_country_iso);
        if !has_subs {
            if show_euicc {
                rows.show(RowId::EuiccSettings, true);
            }
        } else if !snapshot.expand_advanced_fields {
            rows.show(RowId::AdvancedOptions, true);
        } else {
            if show_euicc {
                rows.show(RowId::EuiccSettings, true);
                let spn = snapshot.radio.sim_operator_name.trim();
                result.euicc_summary = (!spn.is_empty()).then(|| spn.to_owned());
            }
            self.evaluate_advanced(snapshot, &mut rows, &mut result)?;
        }

        result.rows = rows.into_map();
        tracing::debug!(
            sub_id = snapshot.sub_id,
            has_subs,
            expanded = snapshot.expand_advanced_fields,
            shown = result.rows.values().filter(|s| s.is_shown()).count(),
            "evaluated settings screen"
        );
        Ok(result)
    }

    fn evaluate_advanced(
        &self,
        snapshot: &EvaluationSnapshot,
        rows: &mut RowTable,
        result: &mut EvaluationResult,
    ) -> Result<(), EvalError> {
        let flags = &snapshot.flags;
        let radio = &snapshot.radio;
        let has_subs = snapshot.has_active_subscriptions;
        let ctx = ModeContext::new(radio, flags, &self.device, &snapshot.settings);

        let mut stored = snapshot
            .settings
            .preferred_network_mode
            .unwrap_or_else(|| self.device.default_network_mode.as_raw());
        let mut choice_list = None;
        let mut lte_data_service_allowed = true;

        rows.show(RowId::PreferredNetworkMode, true);
        rows.show(RowId::EnabledNetworks, true);

        // ── Mode selector cascade ──
        if flags.hide_carrier_network_settings {
            rows.hide(RowId::PreferredNetworkMode);
            rows.hide(RowId::EnabledNetworks);
            lte_data_service_allowed = false;
        } else if flags.hide_preferred_network_type
            && !radio.is_roaming
            && radio.data_reg_in_service
        {
            rows.hide(RowId::PreferredNetworkMode);
            rows.hide(RowId::EnabledNetworks);
            phone_type_options(snapshot, rows)?;
            // Hidden from the user, so the home network always gets the default.
            stored = self.device.default_network_mode.as_raw();
        } else if flags.world_phone {
            rows.hide(RowId::EnabledNetworks);
            cdma_options(snapshot, rows);
            gsm_options(snapshot, rows);
        } else {
            rows.hide(RowId::PreferredNetworkMode);
            choice_list = Some(resolve_enabled_networks_entries(&ctx, stored)?);
            phone_type_options(snapshot, rows)?;
        }

        if lte_data_service_allowed
            && radio.lte_on_cdma
            && snapshot.settings.has_prepaid_data_service_url()
        {
            rows.show(RowId::LteDataService, has_subs);
        }

        // ── Calling ──
        let enhanced_4g = calling::enhanced_4g(snapshot, &self.device);
        if let Some(row) = &enhanced_4g {
            rows.show(RowId::Enhanced4gLte, row.enabled);
        }
        let enhanced_4g_checked = enhanced_4g.as_ref().is_some_and(|row| row.checked);

        let wifi_calling = calling::wifi_calling(snapshot);
        if let Some(row) = &wifi_calling {
            rows.show(RowId::WifiCalling, row.enabled);
        }
        let video_calling = calling::video_calling(snapshot, enhanced_4g_checked);
        if let Some(row) = &video_calling {
            rows.show(RowId::VideoCalling, row.enabled);
        }
        if wifi_calling.is_some() || video_calling.is_some() {
            rows.show(RowId::CallingCategory, has_subs);
        }

        let selectors_enabled = radio.call_idle && has_subs;
        rows.set_enabled(RowId::PreferredNetworkMode, selectors_enabled);
        rows.set_enabled(RowId::EnabledNetworks, selectors_enabled);

        let user = &snapshot.user;
        if user.is_admin
            && self.device.cell_broadcast_app_link
            && !user.cell_broadcast_config_disallowed
        {
            rows.show(RowId::CellBroadcast, has_subs);
        }

        // ── Mode resolution ──
        let resolved = match resolve_summary(&ctx, stored) {
            Ok(resolved) => Some(resolved),
            Err(err) => {
                tracing::warn!(sub_id = snapshot.sub_id, stored, %err, "ignoring stored network mode");
                None
            }
        };
        let options = resolved.and_then(|r| r.options);
        if let Some(control) = options {
            apply_world_mode_options(snapshot, rows, control);
        }

        if rows.get(RowId::AutoSelect).is_shown()
            && !radio.is_roaming
            && flags.only_auto_select_in_home_network
        {
            result.auto_select_summary = Some(format!(
                "Can't choose a network manually while connected to {}",
                radio.sim_operator_name
            ));
        }

        result.mode = Some(ModeResolution {
            stored,
            canonical: resolved.map(|r| r.canonical),
            family: resolved.map(|r| r.family),
            summary: resolved.map_or(SummaryCategory::Invalid, |r| r.summary),
            preferred_summary: preferred_mode_summary(&ctx, stored),
            choice_list,
            options,
            mode_to_apply: NetworkMode::from_raw(stored).ok(),
        });
        result.enhanced_4g = enhanced_4g;
        result.wifi_calling = wifi_calling;
        result.video_calling = video_calling;
        Ok(())
    }
}

// ─── Sub-options ────────────────────────────────────────────────────────────

fn phone_type_options(snapshot: &EvaluationSnapshot, rows: &mut RowTable) -> Result<(), EvalError> {
    match snapshot.radio.phone_type {
        PhoneType::Cdma => cdma_options(snapshot, rows),
        PhoneType::Gsm => gsm_options(snapshot, rows),
        other => return Err(EvalError::UnexpectedPhoneType(other)),
    }
    Ok(())
}

fn apn_enabled(snapshot: &EvaluationSnapshot) -> bool {
    snapshot.has_active_subscriptions && !snapshot.settings.dpc_apn_enforced
}

fn cdma_options(snapshot: &EvaluationSnapshot, rows: &mut RowTable) {
    let has_subs = snapshot.has_active_subscriptions;
    rows.show(RowId::CdmaSystemSelect, has_subs);
    if snapshot.flags.show_apn_setting_cdma {
        rows.show(RowId::CdmaApnExpand, apn_enabled(snapshot));
    }
    if snapshot.flags.carrier_settings_enabled {
        rows.show(RowId::CarrierSettings, has_subs);
    }
}

fn gsm_options(snapshot: &EvaluationSnapshot, rows: &mut RowTable) {
    let has_subs = snapshot.has_active_subscriptions;
    if snapshot.flags.apn_expand {
        rows.show(RowId::GsmApnExpand, apn_enabled(snapshot));
    }
    rows.show(RowId::NetworkOperators, has_subs);
    let auto_select =
        snapshot.radio.is_roaming || !snapshot.flags.only_auto_select_in_home_network;
    rows.show(RowId::AutoSelect, auto_select);
    if snapshot.flags.carrier_settings_enabled {
        rows.show(RowId::CarrierSettings, has_subs);
    }
}

/// World mode brings in both sub-option sets and switches one side off.
fn apply_world_mode_options(
    snapshot: &EvaluationSnapshot,
    rows: &mut RowTable,
    control: OptionControl,
) {
    let has_subs = snapshot.has_active_subscriptions;
    cdma_options(snapshot, rows);
    rows.set_enabled(RowId::CdmaSystemSelect, has_subs && control.cdma_enabled);

    gsm_options(snapshot, rows);
    if !control.gsm_enabled {
        rows.hide(RowId::NetworkOperators);
        rows.hide(RowId::AutoSelect);
    }
    rows.hide(RowId::CarrierSettings);
}
