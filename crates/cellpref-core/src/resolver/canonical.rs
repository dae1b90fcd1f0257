//! Canonical value and summary for the "enabled networks" selector.
//!
//! The selector only offers a handful of generation labels, so every stored
//! code is folded into one bucket whose canonical code is what the selector
//! shows as selected. The folding is a static table; the exceptions (global
//! CDMA, world mode, TDSCDMA) are columns of that table rather than branches.

use std::fmt;

use serde::Serialize;

use super::ModeContext;
use crate::error::EvalError;
use crate::mode::NetworkMode;
use crate::snapshot::PhoneType;

/// Label category shown under the "enabled networks" selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryCategory {
    TwoG,
    ThreeG,
    Lte,
    FourG,
    OneX,
    Global,
    /// World mode, GSM side.
    LteGsmUmts,
    /// World mode, CDMA side.
    LteCdma,
    /// The stored code is not a known network mode.
    Invalid,
}

impl fmt::Display for SummaryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SummaryCategory::TwoG => "2G",
            SummaryCategory::ThreeG => "3G",
            SummaryCategory::Lte => "LTE",
            SummaryCategory::FourG => "4G",
            SummaryCategory::OneX => "1x",
            SummaryCategory::Global => "Global",
            SummaryCategory::LteGsmUmts => "LTE / GSM / UMTS",
            SummaryCategory::LteCdma => "LTE / CDMA",
            SummaryCategory::Invalid => "Invalid network mode",
        };
        f.write_str(label)
    }
}

/// Bucket a raw code falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ModeFamily {
    TdscdmaWcdma,
    WcdmaPreferred,
    GsmOnly,
    LteGsmWcdma,
    LteCdma,
    TdscdmaGlobal,
    CdmaEvdo,
    Cdma1x,
    TdscdmaOnly,
    Everything,
}

/// Enable state for the CDMA and GSM sub-option groups while world mode is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OptionControl {
    pub cdma_enabled: bool,
    pub gsm_enabled: bool,
}

impl OptionControl {
    const CDMA: OptionControl = OptionControl {
        cdma_enabled: true,
        gsm_enabled: false,
    };
    const GSM: OptionControl = OptionControl {
        cdma_enabled: false,
        gsm_enabled: true,
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedMode {
    pub family: ModeFamily,
    pub canonical: NetworkMode,
    pub summary: SummaryCategory,
    /// `Some` only when world mode drives the sub-option groups.
    pub options: Option<OptionControl>,
}

// ─── Bucket Table ───────────────────────────────────────────────────────────

struct WorldRule {
    /// Rule applies to this member only; `None` means the whole bucket.
    only: Option<NetworkMode>,
    /// Keep the stored code and show this summary.
    pin: Option<SummaryCategory>,
    options: OptionControl,
}

struct Bucket {
    family: ModeFamily,
    members: &'static [NetworkMode],
    canonical: NetworkMode,
    summary: SummaryCategory,
    /// `summary` reads "4G" when the carrier asks for it.
    four_g_label: bool,
    /// Global CDMA replaces the bucket with the broadest global mode.
    global_override: bool,
    /// Summary reads "Global" on CDMA phones, global CDMA or world mode.
    global_summary: bool,
    tdscdma: Option<(NetworkMode, SummaryCategory)>,
    world: Option<WorldRule>,
}

const PLAIN: Bucket = Bucket {
    family: ModeFamily::Everything,
    members: &[],
    canonical: NetworkMode::LteCdmaEvdoGsmWcdma,
    summary: SummaryCategory::Lte,
    four_g_label: false,
    global_override: false,
    global_summary: false,
    tdscdma: None,
    world: None,
};

static BUCKETS: [Bucket; 10] = [
    Bucket {
        family: ModeFamily::TdscdmaWcdma,
        members: &[
            NetworkMode::TdscdmaWcdma,
            NetworkMode::TdscdmaGsmWcdma,
            NetworkMode::TdscdmaGsm,
        ],
        canonical: NetworkMode::TdscdmaGsmWcdma,
        summary: SummaryCategory::ThreeG,
        ..PLAIN
    },
    Bucket {
        family: ModeFamily::WcdmaPreferred,
        members: &[
            NetworkMode::WcdmaOnly,
            NetworkMode::GsmUmts,
            NetworkMode::WcdmaPref,
        ],
        canonical: NetworkMode::WcdmaPref,
        summary: SummaryCategory::ThreeG,
        global_override: true,
        ..PLAIN
    },
    Bucket {
        family: ModeFamily::GsmOnly,
        members: &[NetworkMode::GsmOnly],
        canonical: NetworkMode::GsmOnly,
        summary: SummaryCategory::TwoG,
        global_override: true,
        ..PLAIN
    },
    Bucket {
        family: ModeFamily::LteGsmWcdma,
        members: &[
            NetworkMode::LteGsmWcdma,
            NetworkMode::LteOnly,
            NetworkMode::LteWcdma,
        ],
        canonical: NetworkMode::LteGsmWcdma,
        summary: SummaryCategory::Lte,
        four_g_label: true,
        global_override: true,
        world: Some(WorldRule {
            only: Some(NetworkMode::LteGsmWcdma),
            pin: Some(SummaryCategory::LteGsmUmts),
            options: OptionControl::GSM,
        }),
        ..PLAIN
    },
    Bucket {
        family: ModeFamily::LteCdma,
        members: &[NetworkMode::LteCdmaEvdo],
        canonical: NetworkMode::LteCdmaEvdo,
        summary: SummaryCategory::Lte,
        world: Some(WorldRule {
            only: None,
            pin: Some(SummaryCategory::LteCdma),
            options: OptionControl::CDMA,
        }),
        ..PLAIN
    },
    Bucket {
        family: ModeFamily::TdscdmaGlobal,
        members: &[NetworkMode::TdscdmaCdmaEvdoGsmWcdma],
        canonical: NetworkMode::TdscdmaCdmaEvdoGsmWcdma,
        summary: SummaryCategory::ThreeG,
        ..PLAIN
    },
    Bucket {
        family: ModeFamily::CdmaEvdo,
        members: &[
            NetworkMode::CdmaEvdo,
            NetworkMode::EvdoNoCdma,
            NetworkMode::Global,
        ],
        canonical: NetworkMode::CdmaEvdo,
        summary: SummaryCategory::ThreeG,
        ..PLAIN
    },
    Bucket {
        family: ModeFamily::Cdma1x,
        members: &[NetworkMode::CdmaNoEvdo],
        canonical: NetworkMode::CdmaNoEvdo,
        summary: SummaryCategory::OneX,
        ..PLAIN
    },
    Bucket {
        family: ModeFamily::TdscdmaOnly,
        members: &[NetworkMode::TdscdmaOnly],
        canonical: NetworkMode::TdscdmaOnly,
        summary: SummaryCategory::ThreeG,
        ..PLAIN
    },
    Bucket {
        family: ModeFamily::Everything,
        members: &[
            NetworkMode::LteTdscdmaGsm,
            NetworkMode::LteTdscdmaGsmWcdma,
            NetworkMode::LteTdscdma,
            NetworkMode::LteTdscdmaWcdma,
            NetworkMode::LteTdscdmaCdmaEvdoGsmWcdma,
            NetworkMode::LteCdmaEvdoGsmWcdma,
        ],
        canonical: NetworkMode::LteCdmaEvdoGsmWcdma,
        summary: SummaryCategory::Lte,
        four_g_label: true,
        global_summary: true,
        tdscdma: Some((
            NetworkMode::LteTdscdmaCdmaEvdoGsmWcdma,
            SummaryCategory::Lte,
        )),
        world: Some(WorldRule {
            only: None,
            pin: None,
            options: OptionControl::CDMA,
        }),
        ..PLAIN
    },
];

fn bucket_for(mode: NetworkMode) -> Option<&'static Bucket> {
    BUCKETS.iter().find(|b| b.members.contains(&mode))
}

impl ModeFamily {
    pub fn of(mode: NetworkMode) -> Option<ModeFamily> {
        bucket_for(mode).map(|b| b.family)
    }
}

/// Broadest global combination the device can select.
///
/// This is the value the global CDMA override writes. On a TDSCDMA device the
/// LTE global bucket folds to `LTE_TDSCDMA_CDMA_EVDO_GSM_WCDMA` (22), so the
/// override targets 22 there; writing 10 would not be its own canonical value.
pub fn global_mode(supports_tdscdma: bool) -> NetworkMode {
    if supports_tdscdma {
        NetworkMode::LteTdscdmaCdmaEvdoGsmWcdma
    } else {
        NetworkMode::LteCdmaEvdoGsmWcdma
    }
}

/// Fold a raw stored code into the value and summary the selector displays.
pub fn resolve_summary(ctx: &ModeContext, raw: i32) -> Result<ResolvedMode, EvalError> {
    let mode = NetworkMode::from_raw(raw)?;
    let bucket = bucket_for(mode).ok_or(EvalError::InvalidNetworkMode(raw))?;

    let resolved = fold(bucket, mode, ctx);
    tracing::debug!(
        raw,
        family = ?resolved.family,
        canonical = resolved.canonical.as_raw(),
        summary = %resolved.summary,
        "resolved network mode"
    );
    Ok(resolved)
}

fn fold(bucket: &Bucket, mode: NetworkMode, ctx: &ModeContext) -> ResolvedMode {
    let resolved = |canonical, summary, options| ResolvedMode {
        family: bucket.family,
        canonical,
        summary,
        options,
    };

    if let Some((canonical, summary)) = bucket.tdscdma {
        if ctx.supports_tdscdma {
            return resolved(canonical, summary, None);
        }
    }

    let world = bucket
        .world
        .as_ref()
        .filter(|_| ctx.is_world_mode)
        .filter(|rule| rule.only.map_or(true, |only| only == mode));
    let options = world.map(|rule| rule.options);
    if let Some(pin) = world.and_then(|rule| rule.pin) {
        return resolved(mode, pin, options);
    }

    if bucket.global_override && ctx.is_global_cdma {
        return resolved(
            global_mode(ctx.supports_tdscdma),
            SummaryCategory::Global,
            options,
        );
    }

    let summary = if bucket.global_summary
        && (ctx.phone_type == PhoneType::Cdma || ctx.is_global_cdma || ctx.is_world_mode)
    {
        SummaryCategory::Global
    } else if bucket.four_g_label && ctx.show_4g_for_lte {
        SummaryCategory::FourG
    } else {
        bucket.summary
    };
    resolved(bucket.canonical, summary, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gsm() -> ModeContext {
        ModeContext {
            phone_type: PhoneType::Gsm,
            prefer_2g: true,
            lte_enabled: true,
            ..ModeContext::default()
        }
    }

    fn resolve(ctx: ModeContext, raw: i32) -> ResolvedMode {
        resolve_summary(&ctx, raw).unwrap()
    }

    #[test]
    fn every_mode_has_exactly_one_bucket() {
        for mode in NetworkMode::ALL {
            let hits = BUCKETS
                .iter()
                .filter(|b| b.members.contains(&mode))
                .count();
            assert_eq!(hits, 1, "{mode}");
        }
    }

    #[test]
    fn canonical_values_are_bucket_members() {
        for bucket in &BUCKETS {
            assert!(bucket.members.contains(&bucket.canonical), "{:?}", bucket.family);
        }
    }

    #[test]
    fn plain_gsm_folding() {
        let cases = [
            (14, 18, SummaryCategory::ThreeG),
            (16, 18, SummaryCategory::ThreeG),
            (2, 0, SummaryCategory::ThreeG),
            (3, 0, SummaryCategory::ThreeG),
            (1, 1, SummaryCategory::TwoG),
            (11, 9, SummaryCategory::Lte),
            (12, 9, SummaryCategory::Lte),
            (8, 8, SummaryCategory::Lte),
            (21, 21, SummaryCategory::ThreeG),
            (6, 4, SummaryCategory::ThreeG),
            (7, 4, SummaryCategory::ThreeG),
            (5, 5, SummaryCategory::OneX),
            (13, 13, SummaryCategory::ThreeG),
            (17, 10, SummaryCategory::Lte),
            (22, 10, SummaryCategory::Lte),
        ];
        for (raw, canonical, summary) in cases {
            let r = resolve(gsm(), raw);
            assert_eq!(r.canonical.as_raw(), canonical, "raw {raw}");
            assert_eq!(r.summary, summary, "raw {raw}");
            assert_eq!(r.options, None);
        }
    }

    #[test]
    fn four_g_label() {
        let ctx = ModeContext {
            show_4g_for_lte: true,
            ..gsm()
        };
        assert_eq!(resolve(ctx, 9).summary, SummaryCategory::FourG);
        assert_eq!(resolve(ctx, 20).summary, SummaryCategory::FourG);
        // LTE/CDMA keeps its plain label.
        assert_eq!(resolve(ctx, 8).summary, SummaryCategory::Lte);
    }

    #[test]
    fn global_cdma_overrides_marked_buckets_only() {
        let ctx = ModeContext {
            is_global_cdma: true,
            ..gsm()
        };
        for raw in [0, 1, 2, 3, 9, 11, 12] {
            let r = resolve(ctx, raw);
            assert_eq!(r.canonical, NetworkMode::LteCdmaEvdoGsmWcdma, "raw {raw}");
            assert_eq!(r.summary, SummaryCategory::Global, "raw {raw}");
        }
        // Not marked: keeps its own canonical value.
        assert_eq!(resolve(ctx, 5).canonical, NetworkMode::CdmaNoEvdo);
        assert_eq!(resolve(ctx, 14).canonical, NetworkMode::TdscdmaGsmWcdma);
        // The everything bucket reads Global through its summary rule.
        assert_eq!(resolve(ctx, 10).summary, SummaryCategory::Global);
    }

    #[test]
    fn global_override_uses_tdscdma_mode_when_supported() {
        let ctx = ModeContext {
            is_global_cdma: true,
            supports_tdscdma: true,
            ..gsm()
        };
        let r = resolve(ctx, 0);
        assert_eq!(r.canonical, NetworkMode::LteTdscdmaCdmaEvdoGsmWcdma);
        assert_eq!(r.summary, SummaryCategory::Global);
    }

    #[test]
    fn tdscdma_precedes_everything_else() {
        let ctx = ModeContext {
            supports_tdscdma: true,
            is_world_mode: true,
            is_global_cdma: true,
            phone_type: PhoneType::Cdma,
            ..gsm()
        };
        for raw in [10, 15, 17, 19, 20, 22] {
            let r = resolve(ctx, raw);
            assert_eq!(r.canonical, NetworkMode::LteTdscdmaCdmaEvdoGsmWcdma);
            assert_eq!(r.summary, SummaryCategory::Lte);
            assert_eq!(r.options, None);
        }
    }

    #[test]
    fn cdma_phone_reads_global_for_everything_bucket() {
        let ctx = ModeContext {
            phone_type: PhoneType::Cdma,
            show_4g_for_lte: true,
            ..gsm()
        };
        assert_eq!(resolve(ctx, 10).summary, SummaryCategory::Global);
    }

    #[test]
    fn world_mode_pins_lte_gsm_wcdma() {
        let ctx = ModeContext {
            is_world_mode: true,
            is_global_cdma: true,
            ..gsm()
        };
        let r = resolve(ctx, 9);
        assert_eq!(r.canonical, NetworkMode::LteGsmWcdma);
        assert_eq!(r.summary, SummaryCategory::LteGsmUmts);
        assert_eq!(r.options, Some(OptionControl::GSM));

        // LTE only is not pinned and takes the global override.
        let r = resolve(ctx, 11);
        assert_eq!(r.canonical, NetworkMode::LteCdmaEvdoGsmWcdma);
        assert_eq!(r.options, None);
    }

    #[test]
    fn world_mode_pins_lte_cdma() {
        let ctx = ModeContext {
            is_world_mode: true,
            ..gsm()
        };
        let r = resolve(ctx, 8);
        assert_eq!(r.canonical, NetworkMode::LteCdmaEvdo);
        assert_eq!(r.summary, SummaryCategory::LteCdma);
        assert_eq!(r.options, Some(OptionControl::CDMA));
    }

    #[test]
    fn world_mode_everything_enables_cdma_options() {
        let ctx = ModeContext {
            is_world_mode: true,
            ..gsm()
        };
        let r = resolve(ctx, 20);
        assert_eq!(r.canonical, NetworkMode::LteCdmaEvdoGsmWcdma);
        assert_eq!(r.summary, SummaryCategory::Global);
        assert_eq!(r.options, Some(OptionControl::CDMA));
    }

    #[test]
    fn invalid_raw_is_an_error() {
        for raw in [-1, 23, 1000] {
            assert_eq!(
                resolve_summary(&gsm(), raw),
                Err(EvalError::InvalidNetworkMode(raw))
            );
        }
    }

    #[test]
    fn family_lookup() {
        assert_eq!(
            ModeFamily::of(NetworkMode::LteOnly),
            Some(ModeFamily::LteGsmWcdma)
        );
        assert_eq!(ModeFamily::of(NetworkMode::Global), Some(ModeFamily::CdmaEvdo));
    }
}
