//! Enhanced 4G LTE, Wi-Fi calling and video calling rows.
//!
//! Each function returns `None` when the row is hidden. A missing IMS state
//! hides the IMS-backed rows; it is never an error.

use std::fmt;

use serde::Serialize;

use crate::config::DeviceConfig;
use crate::snapshot::{EvaluationSnapshot, WfcMode};

pub const WIFI_CALLING_TITLE: &str = "Wi-Fi calling";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enhanced4gPresentation {
    pub enabled: bool,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub checked: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WfcSummary {
    Off,
    WifiOnly,
    CellularPreferred,
    WifiPreferred,
}

impl fmt::Display for WfcSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WfcSummary::Off => "Off",
            WfcSummary::WifiOnly => "Wi-Fi only",
            WfcSummary::CellularPreferred => "Mobile preferred",
            WfcSummary::WifiPreferred => "Wi-Fi preferred",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WifiCallingPresentation {
    pub enabled: bool,
    pub title: String,
    /// `None` when the carrier's own call manager configures the feature.
    pub summary: Option<WfcSummary>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VideoCallingPresentation {
    pub enabled: bool,
    pub checked: bool,
}

pub fn enhanced_4g(
    snapshot: &EvaluationSnapshot,
    device: &DeviceConfig,
) -> Option<Enhanced4gPresentation> {
    let ims = snapshot.ims.as_ref()?;
    if !ims.volte_available() || snapshot.flags.hide_enhanced_4g_lte {
        return None;
    }

    let variant = snapshot.flags.enhanced_4g_title_variant;
    Some(Enhanced4gPresentation {
        enabled: snapshot.radio.call_idle
            && ims.non_tty_or_tty_on_volte
            && snapshot.flags.editable_enhanced_4g_lte
            && snapshot.has_active_subscriptions,
        title: device.enhanced_4g.title(variant).map(str::to_owned),
        summary: device.enhanced_4g.summary(variant).map(str::to_owned),
        checked: ims.enhanced_4g_user_enabled && ims.non_tty_or_tty_on_volte,
    })
}

pub fn wifi_calling(snapshot: &EvaluationSnapshot) -> Option<WifiCallingPresentation> {
    let available = match &snapshot.sim_call_manager {
        Some(manager) => manager.configurable,
        None => snapshot.ims.as_ref().is_some_and(|ims| ims.wfc_available()),
    };
    if !available {
        return None;
    }

    let enabled = snapshot.radio.call_idle && snapshot.has_active_subscriptions;

    // The carrier's own call manager supplies title and settings screen.
    if let Some(manager) = snapshot.sim_call_manager.as_ref().filter(|m| {
        snapshot.flags.default_sim_call_manager.as_deref() == Some(m.component.as_str())
    }) {
        return Some(WifiCallingPresentation {
            enabled,
            title: manager
                .label
                .clone()
                .unwrap_or_else(|| WIFI_CALLING_TITLE.to_owned()),
            summary: None,
        });
    }

    let summary = match &snapshot.ims {
        Some(ims) if ims.wfc_user_enabled => {
            let mode = if snapshot.radio.is_roaming {
                ims.wfc_roaming_mode
            } else {
                ims.wfc_mode
            };
            match mode {
                WfcMode::WifiOnly => WfcSummary::WifiOnly,
                WfcMode::CellularPreferred => WfcSummary::CellularPreferred,
                WfcMode::WifiPreferred => WfcSummary::WifiPreferred,
                WfcMode::Other => {
                    tracing::debug!(?mode, "unexpected wifi calling mode");
                    WfcSummary::Off
                }
            }
        }
        _ => WfcSummary::Off,
    };

    Some(WifiCallingPresentation {
        enabled,
        title: WIFI_CALLING_TITLE.to_owned(),
        summary: Some(summary),
    })
}

/// `enhanced_4g_checked` is false when the Enhanced 4G row is hidden.
pub fn video_calling(
    snapshot: &EvaluationSnapshot,
    enhanced_4g_checked: bool,
) -> Option<VideoCallingPresentation> {
    let ims = snapshot.ims.as_ref()?;
    let data_ok =
        snapshot.flags.ignore_data_enabled_for_video_calls || snapshot.radio.data_enabled;
    if !ims.vt_available() || !data_ok {
        return None;
    }

    if !enhanced_4g_checked {
        return Some(VideoCallingPresentation {
            enabled: false,
            checked: false,
        });
    }
    Some(VideoCallingPresentation {
        enabled: snapshot.radio.call_idle && snapshot.has_active_subscriptions,
        checked: ims.vt_user_enabled,
    })
}
