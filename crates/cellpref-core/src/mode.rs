//! # Network Modes
//!
//! Modem radio-access-technology combinations, keyed by the integer codes the
//! platform stores in its per-subscription `preferred_network_mode` setting.
//!
//! | Code | Mode                            | Code | Mode                              |
//! |------|---------------------------------|------|-----------------------------------|
//! | 0    | WCDMA preferred                 | 12   | LTE / WCDMA                       |
//! | 1    | GSM only                        | 13   | TDSCDMA only                      |
//! | 2    | WCDMA only                      | 14   | TDSCDMA / WCDMA                   |
//! | 3    | GSM / UMTS                      | 15   | LTE / TDSCDMA                     |
//! | 4    | CDMA / EvDo                     | 16   | TDSCDMA / GSM                     |
//! | 5    | CDMA without EvDo               | 17   | LTE / TDSCDMA / GSM               |
//! | 6    | EvDo without CDMA               | 18   | TDSCDMA / GSM / WCDMA             |
//! | 7    | Global (CDMA/EvDo/GSM/WCDMA)    | 19   | LTE / TDSCDMA / WCDMA             |
//! | 8    | LTE / CDMA / EvDo               | 20   | LTE / TDSCDMA / GSM / WCDMA       |
//! | 9    | LTE / GSM / WCDMA               | 21   | TDSCDMA / CDMA / EvDo / GSM / WCDMA |
//! | 10   | LTE / CDMA / EvDo / GSM / WCDMA | 22   | LTE / TDSCDMA / CDMA / EvDo / GSM / WCDMA |
//! | 11   | LTE only                        |      |                                   |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EvalError;

/// A modem network-mode code. Ordered by its integer value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
#[repr(i32)]
pub enum NetworkMode {
    WcdmaPref = 0,
    GsmOnly = 1,
    WcdmaOnly = 2,
    GsmUmts = 3,
    CdmaEvdo = 4,
    CdmaNoEvdo = 5,
    EvdoNoCdma = 6,
    Global = 7,
    LteCdmaEvdo = 8,
    LteGsmWcdma = 9,
    LteCdmaEvdoGsmWcdma = 10,
    LteOnly = 11,
    LteWcdma = 12,
    TdscdmaOnly = 13,
    TdscdmaWcdma = 14,
    LteTdscdma = 15,
    TdscdmaGsm = 16,
    LteTdscdmaGsm = 17,
    TdscdmaGsmWcdma = 18,
    LteTdscdmaWcdma = 19,
    LteTdscdmaGsmWcdma = 20,
    TdscdmaCdmaEvdoGsmWcdma = 21,
    LteTdscdmaCdmaEvdoGsmWcdma = 22,
}

impl NetworkMode {
    /// Every mode, in code order.
    pub const ALL: [NetworkMode; 23] = [
        NetworkMode::WcdmaPref,
        NetworkMode::GsmOnly,
        NetworkMode::WcdmaOnly,
        NetworkMode::GsmUmts,
        NetworkMode::CdmaEvdo,
        NetworkMode::CdmaNoEvdo,
        NetworkMode::EvdoNoCdma,
        NetworkMode::Global,
        NetworkMode::LteCdmaEvdo,
        NetworkMode::LteGsmWcdma,
        NetworkMode::LteCdmaEvdoGsmWcdma,
        NetworkMode::LteOnly,
        NetworkMode::LteWcdma,
        NetworkMode::TdscdmaOnly,
        NetworkMode::TdscdmaWcdma,
        NetworkMode::LteTdscdma,
        NetworkMode::TdscdmaGsm,
        NetworkMode::LteTdscdmaGsm,
        NetworkMode::TdscdmaGsmWcdma,
        NetworkMode::LteTdscdmaWcdma,
        NetworkMode::LteTdscdmaGsmWcdma,
        NetworkMode::TdscdmaCdmaEvdoGsmWcdma,
        NetworkMode::LteTdscdmaCdmaEvdoGsmWcdma,
    ];

    /// Parse a raw settings value.
    pub fn from_raw(raw: i32) -> Result<Self, EvalError> {
        usize::try_from(raw)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
            .ok_or(EvalError::InvalidNetworkMode(raw))
    }

    pub fn as_raw(self) -> i32 {
        self as i32
    }

    /// Whether the combination includes an LTE radio.
    pub fn has_lte(self) -> bool {
        matches!(
            self,
            NetworkMode::LteCdmaEvdo
                | NetworkMode::LteGsmWcdma
                | NetworkMode::LteCdmaEvdoGsmWcdma
                | NetworkMode::LteOnly
                | NetworkMode::LteWcdma
                | NetworkMode::LteTdscdma
                | NetworkMode::LteTdscdmaGsm
                | NetworkMode::LteTdscdmaWcdma
                | NetworkMode::LteTdscdmaGsmWcdma
                | NetworkMode::LteTdscdmaCdmaEvdoGsmWcdma
        )
    }
}

impl TryFrom<i32> for NetworkMode {
    type Error = EvalError;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

impl From<NetworkMode> for i32 {
    fn from(mode: NetworkMode) -> i32 {
        mode.as_raw()
    }
}

impl fmt::Display for NetworkMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            NetworkMode::WcdmaPref => "WCDMA preferred",
            NetworkMode::GsmOnly => "GSM only",
            NetworkMode::WcdmaOnly => "WCDMA only",
            NetworkMode::GsmUmts => "GSM/UMTS",
            NetworkMode::CdmaEvdo => "CDMA/EvDo",
            NetworkMode::CdmaNoEvdo => "CDMA only",
            NetworkMode::EvdoNoCdma => "EvDo only",
            NetworkMode::Global => "CDMA/EvDo/GSM/WCDMA",
            NetworkMode::LteCdmaEvdo => "LTE/CDMA/EvDo",
            NetworkMode::LteGsmWcdma => "LTE/GSM/WCDMA",
            NetworkMode::LteCdmaEvdoGsmWcdma => "LTE/CDMA/EvDo/GSM/WCDMA",
            NetworkMode::LteOnly => "LTE only",
            NetworkMode::LteWcdma => "LTE/WCDMA",
            NetworkMode::TdscdmaOnly => "TDSCDMA only",
            NetworkMode::TdscdmaWcdma => "TDSCDMA/WCDMA",
            NetworkMode::LteTdscdma => "LTE/TDSCDMA",
            NetworkMode::TdscdmaGsm => "TDSCDMA/GSM",
            NetworkMode::LteTdscdmaGsm => "LTE/TDSCDMA/GSM",
            NetworkMode::TdscdmaGsmWcdma => "TDSCDMA/GSM/WCDMA",
            NetworkMode::LteTdscdmaWcdma => "LTE/TDSCDMA/WCDMA",
            NetworkMode::LteTdscdmaGsmWcdma => "LTE/TDSCDMA/GSM/WCDMA",
            NetworkMode::TdscdmaCdmaEvdoGsmWcdma => "TDSCDMA/CDMA/EvDo/GSM/WCDMA",
            NetworkMode::LteTdscdmaCdmaEvdoGsmWcdma => "LTE/TDSCDMA/CDMA/EvDo/GSM/WCDMA",
        };
        write!(f, "{} ({})", name, self.as_raw())
    }
}

// ─── Selector Acceptance ────────────────────────────────────────────────────

/// Which of the two mode selectors produced a user pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeSelector {
    /// Full list, shown on world phones.
    PreferredNetworkMode,
    /// Condensed generation list ("LTE", "3G", "2G", ...).
    EnabledNetworks,
}

impl ModeSelector {
    /// Whether a pick from this selector may be written to the modem.
    pub fn accepts(self, mode: NetworkMode) -> bool {
        match self {
            ModeSelector::PreferredNetworkMode => true,
            ModeSelector::EnabledNetworks => !matches!(
                mode,
                NetworkMode::GsmUmts
                    | NetworkMode::EvdoNoCdma
                    | NetworkMode::Global
                    | NetworkMode::LteOnly
                    | NetworkMode::LteWcdma
            ),
        }
    }
}

impl fmt::Display for ModeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModeSelector::PreferredNetworkMode => write!(f, "preferred_network_mode"),
            ModeSelector::EnabledNetworks => write!(f, "enabled_networks"),
        }
    }
}
