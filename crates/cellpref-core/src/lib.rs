//! # cellpref-core
//!
//! Decision core for a cellular "mobile network" settings screen.
//!
//! Everything here is a pure function (or a small `&mut self` state machine)
//! over snapshots the host platform assembles: carrier-configuration flags,
//! radio/service state, IMS state, persisted settings values, and the active
//! subscription list. The host applies the declarative results to its widgets.
//!
//! ## Crate structure
//!
//! - [`mode`] — Network-mode codes and the selector acceptance sets
//! - [`snapshot`] — Input snapshot types (flags, radio, IMS, subscriptions)
//! - [`config`] — Device-level configuration loaded from TOML
//! - [`tabs`] — Per-SIM tab synchronization
//! - [`resolver`] — Choice lists, canonical mode folding, world mode
//! - [`visibility`] — Row visibility engine
//! - [`selection`] — User mode picks and data-roaming toggles
//! - [`write`] — At-most-one in-flight modem write per subscription
//! - [`error`] — Error types

pub mod config;
pub mod error;
pub mod mode;
pub mod resolver;
pub mod selection;
pub mod snapshot;
pub mod tabs;
pub mod visibility;
pub mod write;

pub use config::DeviceConfig;
pub use error::{ConfigError, EvalError};
pub use mode::NetworkMode;
pub use snapshot::{
    CapabilityFlags, EvaluationSnapshot, ImsState, PhoneType, RadioState, SubscriptionInfo,
    SubscriptionSnapshot,
};
pub use tabs::{TabDecision, TabSyncDecider};
pub use visibility::{EvaluationResult, RowId, RowState, SettingsVisibilityEngine};
