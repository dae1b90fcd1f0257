//! Error types for evaluation and configuration.

use thiserror::Error;

use crate::snapshot::PhoneType;

// ── Evaluation ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The radio reported a phone type that has no settings layout.
    #[error("unexpected phone type: {0}")]
    UnexpectedPhoneType(PhoneType),
    /// A raw network-mode code outside the known set.
    #[error("invalid network mode ({0})")]
    InvalidNetworkMode(i32),
}

// ── Configuration ───────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unsupported config version {0}")]
    UnsupportedVersion(u32),
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: String,
    },
}
