//! User actions on the mode selectors and the data-roaming switch.

use serde::Serialize;

use crate::mode::{ModeSelector, NetworkMode};
use crate::snapshot::CapabilityFlags;

/// What to do with a value picked in one of the mode selectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum SelectionAction {
    /// The pick equals the persisted value.
    Unchanged,
    /// Not a code this selector may write; nothing is persisted.
    Rejected { raw: i32 },
    /// Persist `mode` and push it to the modem.
    Apply { mode: NetworkMode },
}

pub fn on_mode_selected(selector: ModeSelector, selected: i32, stored: i32) -> SelectionAction {
    if selected == stored {
        return SelectionAction::Unchanged;
    }
    match NetworkMode::from_raw(selected) {
        Ok(mode) if selector.accepts(mode) => {
            tracing::debug!(%selector, %mode, stored, "network mode selected");
            SelectionAction::Apply { mode }
        }
        _ => {
            tracing::warn!(%selector, selected, "ignoring invalid network mode pick");
            SelectionAction::Rejected { raw: selected }
        }
    }
}

/// Outcome of tapping the data-roaming switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoamingToggle {
    Disable,
    Enable,
    /// Show the roaming-charges warning; enable only once the user confirms.
    ConfirmCharges,
}

pub fn roaming_toggle(currently_enabled: bool, flags: &CapabilityFlags) -> RoamingToggle {
    if currently_enabled {
        RoamingToggle::Disable
    } else if flags.disable_charge_indication {
        RoamingToggle::Enable
    } else {
        RoamingToggle::ConfirmCharges
    }
}
