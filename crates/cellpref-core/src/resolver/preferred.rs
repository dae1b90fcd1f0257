//! Summaries for the full "preferred network mode" selector.
//!
//! Unlike the enabled-networks selector this one shows every combination, so
//! the summary is a per-code lookup with two context-dependent codes.

use std::fmt;

use serde::Serialize;

use super::ModeContext;
use crate::mode::NetworkMode;
use crate::snapshot::PhoneType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferredModeSummary {
    WcdmaPreferred,
    GsmOnly,
    WcdmaOnly,
    GsmWcdma,
    Cdma,
    CdmaEvdo,
    CdmaOnly,
    EvdoOnly,
    CdmaEvdoGsmWcdma,
    LteCdmaEvdo,
    LteGsmWcdma,
    Lte,
    LteWcdma,
    TdscdmaOnly,
    TdscdmaWcdma,
    LteTdscdma,
    TdscdmaGsm,
    LteTdscdmaGsm,
    TdscdmaGsmWcdma,
    LteTdscdmaWcdma,
    LteTdscdmaGsmWcdma,
    TdscdmaCdmaEvdoGsmWcdma,
    LteTdscdmaCdmaEvdoGsmWcdma,
    Global,
}

impl fmt::Display for PreferredModeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use PreferredModeSummary::*;
        let label = match self {
            WcdmaPreferred => "Preferred network mode: WCDMA preferred",
            GsmOnly => "Preferred network mode: GSM only",
            WcdmaOnly => "Preferred network mode: WCDMA only",
            GsmWcdma => "Preferred network mode: GSM/WCDMA",
            Cdma => "Preferred network mode: CDMA",
            CdmaEvdo => "Preferred network mode: CDMA/EvDo",
            CdmaOnly => "Preferred network mode: CDMA only",
            EvdoOnly => "Preferred network mode: EvDo only",
            CdmaEvdoGsmWcdma => "Preferred network mode: CDMA/EvDo/GSM/WCDMA",
            LteCdmaEvdo => "Preferred network mode: LTE / CDMA",
            LteGsmWcdma => "Preferred network mode: LTE / GSM / UMTS",
            Lte => "Preferred network mode: LTE",
            LteWcdma => "Preferred network mode: LTE / WCDMA",
            TdscdmaOnly => "Preferred network mode: TDSCDMA",
            TdscdmaWcdma => "Preferred network mode: TDSCDMA/WCDMA",
            LteTdscdma => "Preferred network mode: LTE / TDSCDMA",
            TdscdmaGsm => "Preferred network mode: TDSCDMA/GSM",
            LteTdscdmaGsm => "Preferred network mode: LTE/GSM/TDSCDMA",
            TdscdmaGsmWcdma => "Preferred network mode: TDSCDMA/GSM/WCDMA",
            LteTdscdmaWcdma => "Preferred network mode: LTE/TDSCDMA/WCDMA",
            LteTdscdmaGsmWcdma => "Preferred network mode: LTE/TDSCDMA/GSM/WCDMA",
            TdscdmaCdmaEvdoGsmWcdma => "Preferred network mode: TDSCDMA/CDMA/EvDo/GSM/WCDMA",
            LteTdscdmaCdmaEvdoGsmWcdma => {
                "Preferred network mode: LTE/TDSCDMA/CDMA/EvDo/GSM/WCDMA"
            }
            Global => "Preferred network mode: Global",
        };
        f.write_str(label)
    }
}

/// Summary for a raw stored code. Unknown codes read as "Global".
pub fn preferred_mode_summary(ctx: &ModeContext, raw: i32) -> PreferredModeSummary {
    let Ok(mode) = NetworkMode::from_raw(raw) else {
        return PreferredModeSummary::Global;
    };
    match mode {
        NetworkMode::WcdmaPref => PreferredModeSummary::WcdmaPreferred,
        NetworkMode::GsmOnly => PreferredModeSummary::GsmOnly,
        NetworkMode::WcdmaOnly => PreferredModeSummary::WcdmaOnly,
        NetworkMode::GsmUmts => PreferredModeSummary::GsmWcdma,
        NetworkMode::CdmaEvdo if ctx.lte_on_cdma => PreferredModeSummary::Cdma,
        NetworkMode::CdmaEvdo => PreferredModeSummary::CdmaEvdo,
        NetworkMode::CdmaNoEvdo => PreferredModeSummary::CdmaOnly,
        NetworkMode::EvdoNoCdma => PreferredModeSummary::EvdoOnly,
        NetworkMode::Global => PreferredModeSummary::CdmaEvdoGsmWcdma,
        NetworkMode::LteCdmaEvdo => PreferredModeSummary::LteCdmaEvdo,
        NetworkMode::LteGsmWcdma => PreferredModeSummary::LteGsmWcdma,
        NetworkMode::LteCdmaEvdoGsmWcdma
            if ctx.phone_type == PhoneType::Cdma || ctx.is_global_cdma || ctx.is_world_mode =>
        {
            PreferredModeSummary::Global
        }
        NetworkMode::LteCdmaEvdoGsmWcdma | NetworkMode::LteOnly => PreferredModeSummary::Lte,
        NetworkMode::LteWcdma => PreferredModeSummary::LteWcdma,
        NetworkMode::TdscdmaOnly => PreferredModeSummary::TdscdmaOnly,
        NetworkMode::TdscdmaWcdma => PreferredModeSummary::TdscdmaWcdma,
        NetworkMode::LteTdscdma => PreferredModeSummary::LteTdscdma,
        NetworkMode::TdscdmaGsm => PreferredModeSummary::TdscdmaGsm,
        NetworkMode::LteTdscdmaGsm => PreferredModeSummary::LteTdscdmaGsm,
        NetworkMode::TdscdmaGsmWcdma => PreferredModeSummary::TdscdmaGsmWcdma,
        NetworkMode::LteTdscdmaWcdma => PreferredModeSummary::LteTdscdmaWcdma,
        NetworkMode::LteTdscdmaGsmWcdma => PreferredModeSummary::LteTdscdmaGsmWcdma,
        NetworkMode::TdscdmaCdmaEvdoGsmWcdma => PreferredModeSummary::TdscdmaCdmaEvdoGsmWcdma,
        NetworkMode::LteTdscdmaCdmaEvdoGsmWcdma => {
            PreferredModeSummary::LteTdscdmaCdmaEvdoGsmWcdma
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cdma_evdo_depends_on_lte_on_cdma() {
        let mut ctx = ModeContext::default();
        assert_eq!(preferred_mode_summary(&ctx, 4), PreferredModeSummary::CdmaEvdo);
        ctx.lte_on_cdma = true;
        assert_eq!(preferred_mode_summary(&ctx, 4), PreferredModeSummary::Cdma);
    }

    #[test]
    fn lte_global_code_depends_on_phone_and_world() {
        let ctx = ModeContext::default();
        assert_eq!(preferred_mode_summary(&ctx, 10), PreferredModeSummary::Lte);
        for ctx in [
            ModeContext {
                phone_type: PhoneType::Cdma,
                ..ModeContext::default()
            },
            ModeContext {
                is_global_cdma: true,
                ..ModeContext::default()
            },
            ModeContext {
                is_world_mode: true,
                ..ModeContext::default()
            },
        ] {
            assert_eq!(preferred_mode_summary(&ctx, 10), PreferredModeSummary::Global);
        }
    }

    #[test]
    fn unknown_code_reads_global() {
        let ctx = ModeContext::default();
        assert_eq!(preferred_mode_summary(&ctx, 99), PreferredModeSummary::Global);
        assert_eq!(preferred_mode_summary(&ctx, -1), PreferredModeSummary::Global);
    }

    #[test]
    fn lte_only_shares_lte_summary() {
        let ctx = ModeContext::default();
        assert_eq!(preferred_mode_summary(&ctx, 11), PreferredModeSummary::Lte);
        assert_eq!(
            preferred_mode_summary(&ctx, 11).to_string(),
            "Preferred network mode: LTE"
        );
    }
}
