//! Choice-list selection for the "enabled networks" selector.
//!
//! ## Precedence
//!
//! CDMA radios:
//! 1. not LTE-on-CDMA → [`ChoiceListVariant::CdmaOnly`]
//! 2. LTE not forced → [`ChoiceListVariant::Cdma`]
//! 3. otherwise by stored mode: no-LTE CDMA codes → `CdmaNoLte`, LTE-capable
//!    CDMA codes → `CdmaOnlyLte`, anything else → `Cdma`
//!
//! GSM radios (first match wins): TDSCDMA → `Tdscdma`; no 2G preference and
//! LTE disabled → `ExceptGsmLte`; no 2G preference → `ExceptGsm`/`ExceptGsm4g`;
//! LTE disabled → `ExceptLte`; global CDMA → `Cdma`; else `Default`/`Default4g`.
//!
//! World mode replaces whatever was selected with `WorldMode`.

use std::fmt;

use serde::Serialize;

use super::ModeContext;
use crate::error::EvalError;
use crate::mode::NetworkMode;
use crate::snapshot::PhoneType;

/// One selectable entry: display label plus the code written on selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChoiceEntry {
    pub label: &'static str,
    pub mode: NetworkMode,
}

const fn entry(label: &'static str, mode: NetworkMode) -> ChoiceEntry {
    ChoiceEntry { label, mode }
}

/// Choice lists the selector can be populated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChoiceListVariant {
    /// CDMA radio without LTE.
    CdmaOnly,
    Cdma,
    CdmaNoLte,
    CdmaOnlyLte,
    Tdscdma,
    ExceptGsmLte,
    ExceptGsm,
    ExceptGsm4g,
    ExceptLte,
    Default,
    Default4g,
    WorldMode,
}

const CDMA_ONLY: &[ChoiceEntry] = &[
    entry("3G", NetworkMode::CdmaEvdo),
    entry("1x", NetworkMode::CdmaNoEvdo),
];
const CDMA: &[ChoiceEntry] = &[
    entry("LTE", NetworkMode::LteCdmaEvdo),
    entry("3G", NetworkMode::CdmaEvdo),
    entry("1x", NetworkMode::CdmaNoEvdo),
    entry("Global", NetworkMode::LteCdmaEvdoGsmWcdma),
];
const CDMA_NO_LTE: &[ChoiceEntry] = &[
    entry("3G", NetworkMode::CdmaEvdo),
    entry("1x", NetworkMode::CdmaNoEvdo),
];
const CDMA_ONLY_LTE: &[ChoiceEntry] = &[
    entry("LTE", NetworkMode::LteCdmaEvdo),
    entry("Global", NetworkMode::LteCdmaEvdoGsmWcdma),
];
const TDSCDMA: &[ChoiceEntry] = &[
    entry("LTE", NetworkMode::LteTdscdmaCdmaEvdoGsmWcdma),
    entry("3G", NetworkMode::TdscdmaGsmWcdma),
    entry("2G", NetworkMode::GsmOnly),
];
const EXCEPT_GSM_LTE: &[ChoiceEntry] = &[entry("3G", NetworkMode::WcdmaPref)];
const EXCEPT_GSM: &[ChoiceEntry] = &[
    entry("LTE", NetworkMode::LteGsmWcdma),
    entry("3G", NetworkMode::WcdmaPref),
];
const EXCEPT_GSM_4G: &[ChoiceEntry] = &[
    entry("4G", NetworkMode::LteGsmWcdma),
    entry("3G", NetworkMode::WcdmaPref),
];
const EXCEPT_LTE: &[ChoiceEntry] = &[
    entry("3G", NetworkMode::WcdmaPref),
    entry("2G", NetworkMode::GsmOnly),
];
const DEFAULT: &[ChoiceEntry] = &[
    entry("LTE", NetworkMode::LteGsmWcdma),
    entry("3G", NetworkMode::WcdmaPref),
    entry("2G", NetworkMode::GsmOnly),
];
const DEFAULT_4G: &[ChoiceEntry] = &[
    entry("4G", NetworkMode::LteGsmWcdma),
    entry("3G", NetworkMode::WcdmaPref),
    entry("2G", NetworkMode::GsmOnly),
];
const WORLD_MODE: &[ChoiceEntry] = &[
    entry("Global", NetworkMode::LteCdmaEvdoGsmWcdma),
    entry("LTE / CDMA", NetworkMode::LteCdmaEvdo),
    entry("LTE / GSM / UMTS", NetworkMode::LteGsmWcdma),
];

impl ChoiceListVariant {
    /// Entries in display order.
    pub fn entries(self) -> &'static [ChoiceEntry] {
        match self {
            ChoiceListVariant::CdmaOnly => CDMA_ONLY,
            ChoiceListVariant::Cdma => CDMA,
            ChoiceListVariant::CdmaNoLte => CDMA_NO_LTE,
            ChoiceListVariant::CdmaOnlyLte => CDMA_ONLY_LTE,
            ChoiceListVariant::Tdscdma => TDSCDMA,
            ChoiceListVariant::ExceptGsmLte => EXCEPT_GSM_LTE,
            ChoiceListVariant::ExceptGsm => EXCEPT_GSM,
            ChoiceListVariant::ExceptGsm4g => EXCEPT_GSM_4G,
            ChoiceListVariant::ExceptLte => EXCEPT_LTE,
            ChoiceListVariant::Default => DEFAULT,
            ChoiceListVariant::Default4g => DEFAULT_4G,
            ChoiceListVariant::WorldMode => WORLD_MODE,
        }
    }

    pub fn contains(self, mode: NetworkMode) -> bool {
        self.entries().iter().any(|e| e.mode == mode)
    }
}

impl fmt::Display for ChoiceListVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.entries().iter().map(|e| e.label).collect();
        write!(f, "{:?} [{}]", self, labels.join(", "))
    }
}

/// Pick the choice list for the "enabled networks" selector.
///
/// `settings_mode` is the raw stored code; it only matters for LTE-forced
/// CDMA radios.
pub fn resolve_enabled_networks_entries(
    ctx: &ModeContext,
    settings_mode: i32,
) -> Result<ChoiceListVariant, EvalError> {
    let variant = match ctx.phone_type {
        PhoneType::Cdma => cdma_entries(ctx, settings_mode),
        PhoneType::Gsm => gsm_entries(ctx),
        other => return Err(EvalError::UnexpectedPhoneType(other)),
    };

    let variant = if ctx.is_world_mode {
        ChoiceListVariant::WorldMode
    } else {
        variant
    };
    tracing::debug!(?variant, phone_type = %ctx.phone_type, "enabled networks entries");
    Ok(variant)
}

fn cdma_entries(ctx: &ModeContext, settings_mode: i32) -> ChoiceListVariant {
    if !ctx.lte_on_cdma {
        return ChoiceListVariant::CdmaOnly;
    }
    if !ctx.lte_service_forced {
        return ChoiceListVariant::Cdma;
    }
    match NetworkMode::from_raw(settings_mode) {
        Ok(NetworkMode::CdmaEvdo | NetworkMode::CdmaNoEvdo | NetworkMode::EvdoNoCdma) => {
            ChoiceListVariant::CdmaNoLte
        }
        Ok(
            NetworkMode::Global
            | NetworkMode::LteCdmaEvdo
            | NetworkMode::LteCdmaEvdoGsmWcdma
            | NetworkMode::LteOnly,
        ) => ChoiceListVariant::CdmaOnlyLte,
        _ => ChoiceListVariant::Cdma,
    }
}

fn gsm_entries(ctx: &ModeContext) -> ChoiceListVariant {
    if ctx.supports_tdscdma {
        ChoiceListVariant::Tdscdma
    } else if !ctx.prefer_2g && !ctx.lte_enabled {
        ChoiceListVariant::ExceptGsmLte
    } else if !ctx.prefer_2g {
        if ctx.show_4g_for_lte {
            ChoiceListVariant::ExceptGsm4g
        } else {
            ChoiceListVariant::ExceptGsm
        }
    } else if !ctx.lte_enabled {
        ChoiceListVariant::ExceptLte
    } else if ctx.is_global_cdma {
        ChoiceListVariant::Cdma
    } else if ctx.show_4g_for_lte {
        ChoiceListVariant::Default4g
    } else {
        ChoiceListVariant::Default
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::ModeSelector;

    fn gsm() -> ModeContext {
        ModeContext {
            phone_type: PhoneType::Gsm,
            prefer_2g: true,
            lte_enabled: true,
            ..ModeContext::default()
        }
    }

    fn cdma() -> ModeContext {
        ModeContext {
            phone_type: PhoneType::Cdma,
            lte_on_cdma: true,
            prefer_2g: true,
            lte_enabled: true,
            ..ModeContext::default()
        }
    }

    fn pick(ctx: ModeContext, raw: i32) -> ChoiceListVariant {
        resolve_enabled_networks_entries(&ctx, raw).unwrap()
    }

    #[test]
    fn gsm_default_list() {
        assert_eq!(pick(gsm(), 9), ChoiceListVariant::Default);
        let ctx = ModeContext {
            show_4g_for_lte: true,
            ..gsm()
        };
        assert_eq!(pick(ctx, 9), ChoiceListVariant::Default4g);
    }

    #[test]
    fn gsm_precedence_chain() {
        let no_2g_no_lte = ModeContext {
            prefer_2g: false,
            lte_enabled: false,
            ..gsm()
        };
        assert_eq!(pick(no_2g_no_lte, 0), ChoiceListVariant::ExceptGsmLte);

        let no_2g = ModeContext {
            prefer_2g: false,
            ..gsm()
        };
        assert_eq!(pick(no_2g, 0), ChoiceListVariant::ExceptGsm);
        let no_2g_4g = ModeContext {
            show_4g_for_lte: true,
            ..no_2g
        };
        assert_eq!(pick(no_2g_4g, 0), ChoiceListVariant::ExceptGsm4g);

        let no_lte = ModeContext {
            lte_enabled: false,
            ..gsm()
        };
        assert_eq!(pick(no_lte, 0), ChoiceListVariant::ExceptLte);

        let global = ModeContext {
            is_global_cdma: true,
            ..gsm()
        };
        assert_eq!(pick(global, 0), ChoiceListVariant::Cdma);
    }

    #[test]
    fn tdscdma_beats_every_gsm_flag() {
        for prefer_2g in [false, true] {
            for lte_enabled in [false, true] {
                let ctx = ModeContext {
                    supports_tdscdma: true,
                    prefer_2g,
                    lte_enabled,
                    ..gsm()
                };
                assert_eq!(pick(ctx, 0), ChoiceListVariant::Tdscdma);
            }
        }
    }

    #[test]
    fn cdma_without_lte_on_cdma() {
        let ctx = ModeContext {
            lte_on_cdma: false,
            ..cdma()
        };
        assert_eq!(pick(ctx, 4), ChoiceListVariant::CdmaOnly);
    }

    #[test]
    fn cdma_lte_not_forced() {
        assert_eq!(pick(cdma(), 4), ChoiceListVariant::Cdma);
    }

    #[test]
    fn cdma_lte_forced_buckets_by_stored_mode() {
        let forced = ModeContext {
            lte_service_forced: true,
            ..cdma()
        };
        for raw in [4, 5, 6] {
            assert_eq!(pick(forced, raw), ChoiceListVariant::CdmaNoLte, "raw {raw}");
        }
        for raw in [7, 8, 10, 11] {
            assert_eq!(pick(forced, raw), ChoiceListVariant::CdmaOnlyLte, "raw {raw}");
        }
        assert_eq!(pick(forced, 9), ChoiceListVariant::Cdma);
        assert_eq!(pick(forced, -5), ChoiceListVariant::Cdma);
    }

    #[test]
    fn world_mode_replaces_selection() {
        let ctx = ModeContext {
            is_world_mode: true,
            supports_tdscdma: true,
            ..gsm()
        };
        assert_eq!(pick(ctx, 9), ChoiceListVariant::WorldMode);
        let ctx = ModeContext {
            is_world_mode: true,
            ..cdma()
        };
        assert_eq!(pick(ctx, 4), ChoiceListVariant::WorldMode);
    }

    #[test]
    fn unknown_phone_type_is_an_error() {
        for phone_type in [PhoneType::None, PhoneType::Sip] {
            let ctx = ModeContext {
                phone_type,
                is_world_mode: true,
                ..gsm()
            };
            assert_eq!(
                resolve_enabled_networks_entries(&ctx, 9),
                Err(EvalError::UnexpectedPhoneType(phone_type))
            );
        }
    }

    #[test]
    fn entry_lists_are_non_empty_and_distinct() {
        let variants = [
            ChoiceListVariant::CdmaOnly,
            ChoiceListVariant::Cdma,
            ChoiceListVariant::CdmaNoLte,
            ChoiceListVariant::CdmaOnlyLte,
            ChoiceListVariant::Tdscdma,
            ChoiceListVariant::ExceptGsmLte,
            ChoiceListVariant::ExceptGsm,
            ChoiceListVariant::ExceptGsm4g,
            ChoiceListVariant::ExceptLte,
            ChoiceListVariant::Default,
            ChoiceListVariant::Default4g,
            ChoiceListVariant::WorldMode,
        ];
        for v in variants {
            let entries = v.entries();
            assert!(!entries.is_empty(), "{v}");
            let mut modes: Vec<_> = entries.iter().map(|e| e.mode).collect();
            modes.sort();
            modes.dedup();
            assert_eq!(modes.len(), entries.len(), "{v} has duplicate codes");
            for e in entries {
                assert!(ModeSelector::EnabledNetworks.accepts(e.mode), "{v}: {}", e.mode);
            }
        }
        assert!(ChoiceListVariant::Default4g.contains(NetworkMode::LteGsmWcdma));
        assert_eq!(ChoiceListVariant::Default4g.entries()[0].label, "4G");
    }
}
