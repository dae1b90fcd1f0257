//! # Network Mode Resolution
//!
//! Turns carrier flags, radio state and the stored network-mode code into
//! what the mode selectors display:
//!
//! - [`entries`] — which choice list the "enabled networks" selector offers
//! - [`canonical`] — folding a raw code into its canonical value and summary
//! - [`preferred`] — per-code summary for the full "preferred network mode" list
//! - [`world`] — world-mode configuration parsing
//!
//! Every function here is pure. Derived inputs (global CDMA, world mode,
//! TDSCDMA support) are computed once per evaluation into a [`ModeContext`].

pub mod canonical;
pub mod entries;
pub mod preferred;
pub mod world;

use serde::Serialize;

use crate::config::DeviceConfig;
use crate::snapshot::{CapabilityFlags, PhoneType, RadioState, SettingsSnapshot};

pub use canonical::{resolve_summary, ModeFamily, OptionControl, ResolvedMode, SummaryCategory};
pub use entries::{resolve_enabled_networks_entries, ChoiceEntry, ChoiceListVariant};
pub use preferred::{preferred_mode_summary, PreferredModeSummary};
pub use world::is_world_mode;

/// Derived inputs shared by every resolver function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ModeContext {
    pub phone_type: PhoneType,
    pub lte_on_cdma: bool,
    pub prefer_2g: bool,
    pub show_4g_for_lte: bool,
    /// Device offers LTE in the enabled-networks list.
    pub lte_enabled: bool,
    /// Per-subscription LTE force override is set.
    pub lte_service_forced: bool,
    pub supports_tdscdma: bool,
    pub is_global_cdma: bool,
    pub is_world_mode: bool,
}

impl ModeContext {
    pub fn new(
        radio: &RadioState,
        flags: &CapabilityFlags,
        device: &DeviceConfig,
        settings: &SettingsSnapshot,
    ) -> Self {
        let ctx = ModeContext {
            phone_type: radio.phone_type,
            lte_on_cdma: radio.lte_on_cdma,
            prefer_2g: flags.prefer_2g,
            show_4g_for_lte: flags.show_4g_for_lte,
            lte_enabled: device.lte_enabled,
            lte_service_forced: settings.lte_service_forced,
            supports_tdscdma: supports_tdscdma(device, &radio.operator_numeric),
            is_global_cdma: is_global_cdma(radio, flags),
            is_world_mode: is_world_mode(&device.world_mode, &radio.group_id_level1),
        };
        tracing::debug!(?ctx, "mode context");
        ctx
    }
}

/// An LTE-on-CDMA device whose carrier asks for CDMA choices presents the
/// global option set.
pub fn is_global_cdma(radio: &RadioState, flags: &CapabilityFlags) -> bool {
    radio.lte_on_cdma && flags.show_cdma_choices
}

/// TDSCDMA is offered when the device supports it outright, or when the
/// serving network is one of the configured TDSCDMA roaming networks.
pub fn supports_tdscdma(device: &DeviceConfig, operator_numeric: &str) -> bool {
    if device.support_tdscdma {
        return true;
    }
    let numeric = operator_numeric.trim();
    !numeric.is_empty()
        && device
            .tdscdma_roaming_networks
            .iter()
            .any(|n| n == numeric)
}
