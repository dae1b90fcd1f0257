use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Every row or category the mobile-network screen can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowId {
    MobileData,
    DataRoaming,
    DataUsage,
    /// Collapsed "Advanced" entry.
    AdvancedOptions,
    PreferredNetworkMode,
    EnabledNetworks,
    Enhanced4gLte,
    CallingCategory,
    WifiCalling,
    VideoCalling,
    LteDataService,
    CellBroadcast,
    EuiccSettings,
    // GSM/UMTS sub-options
    GsmApnExpand,
    NetworkOperators,
    AutoSelect,
    // CDMA sub-options
    CdmaSystemSelect,
    CdmaApnExpand,
    CarrierSettings,
}

impl RowId {
    pub const ALL: [RowId; 19] = [
        RowId::MobileData,
        RowId::DataRoaming,
        RowId::DataUsage,
        RowId::AdvancedOptions,
        RowId::PreferredNetworkMode,
        RowId::EnabledNetworks,
        RowId::Enhanced4gLte,
        RowId::CallingCategory,
        RowId::WifiCalling,
        RowId::VideoCalling,
        RowId::LteDataService,
        RowId::CellBroadcast,
        RowId::EuiccSettings,
        RowId::GsmApnExpand,
        RowId::NetworkOperators,
        RowId::AutoSelect,
        RowId::CdmaSystemSelect,
        RowId::CdmaApnExpand,
        RowId::CarrierSettings,
    ];
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowState {
    #[default]
    Hidden,
    ShownDisabled,
    ShownEnabled,
}

impl RowState {
    pub fn shown(enabled: bool) -> Self {
        if enabled {
            RowState::ShownEnabled
        } else {
            RowState::ShownDisabled
        }
    }

    pub fn is_shown(self) -> bool {
        self != RowState::Hidden
    }

    pub fn is_enabled(self) -> bool {
        self == RowState::ShownEnabled
    }
}

/// Row map under construction. Every row starts hidden.
#[derive(Debug, Clone)]
pub(crate) struct RowTable {
    rows: BTreeMap<RowId, RowState>,
}

impl RowTable {
    pub(crate) fn new() -> Self {
        RowTable {
            rows: RowId::ALL.iter().map(|&id| (id, RowState::Hidden)).collect(),
        }
    }

    pub(crate) fn show(&mut self, id: RowId, enabled: bool) {
        self.rows.insert(id, RowState::shown(enabled));
    }

    pub(crate) fn hide(&mut self, id: RowId) {
        self.rows.insert(id, RowState::Hidden);
    }

    /// Change the enabled state of a row that is already shown.
    pub(crate) fn set_enabled(&mut self, id: RowId, enabled: bool) {
        if self.get(id).is_shown() {
            self.show(id, enabled);
        }
    }

    pub(crate) fn get(&self, id: RowId) -> RowState {
        self.rows.get(&id).copied().unwrap_or_default()
    }

    pub(crate) fn into_map(self) -> BTreeMap<RowId, RowState> {
        self.rows
    }
}
