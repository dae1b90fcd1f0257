//! # Per-SIM Tab Synchronization
//!
//! Decides what the host does with its per-SIM navigation tabs when the
//! active subscription list changes.
//!
//! | Previous    | Current       | Decision                         |
//! |-------------|---------------|----------------------------------|
//! | ≥ threshold | unknown       | Clear                            |
//! | ≥ threshold | < threshold   | Clear                            |
//! | < threshold | ≥ threshold   | Rebuild                          |
//! | ≥ threshold | ≥ threshold   | Rebuild if count or a name changed |
//! | otherwise   |               | NoChange                         |
//!
//! A rebuild produces one tab per physical slot up to the highest occupied
//! slot, so an empty slot between two SIMs still gets a placeholder tab.

use serde::Serialize;

use crate::config::{DeviceConfig, DEFAULT_TAB_THRESHOLD};
use crate::snapshot::SubscriptionSnapshot;

/// What the host should do with its tab widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum TabDecision {
    NoChange,
    Rebuild {
        /// One label per slot, index = slot.
        tab_names: Vec<String>,
        /// Tabs already existed; keep the user's current selection.
        preserve_current_tab: bool,
    },
    Clear,
}

#[derive(Debug, Clone)]
pub struct TabSyncDecider {
    threshold: usize,
    unknown_label: String,
}

impl Default for TabSyncDecider {
    fn default() -> Self {
        Self::new(DEFAULT_TAB_THRESHOLD, "Unknown")
    }
}

impl TabSyncDecider {
    pub fn new(threshold: usize, unknown_label: impl Into<String>) -> Self {
        TabSyncDecider {
            threshold: threshold.max(1),
            unknown_label: unknown_label.into(),
        }
    }

    pub fn from_config(config: &DeviceConfig) -> Self {
        Self::new(config.tab_threshold, config.unknown_tab_label.clone())
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    /// Compare the previously applied list with a fresh one. `current` is
    /// `None` when the platform could not report the list.
    pub fn decide(
        &self,
        previous: &SubscriptionSnapshot,
        current: Option<&SubscriptionSnapshot>,
    ) -> TabDecision {
        let was_tabbed = previous.len() >= self.threshold;

        let decision = match current {
            None if was_tabbed => TabDecision::Clear,
            None => TabDecision::NoChange,
            Some(cur) if cur.len() < self.threshold && was_tabbed => TabDecision::Clear,
            Some(cur) if cur.len() >= self.threshold && !was_tabbed => self.rebuild(cur, false),
            Some(cur) if cur.len() >= self.threshold => {
                if Self::tabs_differ(previous, cur) {
                    self.rebuild(cur, true)
                } else {
                    TabDecision::NoChange
                }
            }
            Some(_) => TabDecision::NoChange,
        };

        tracing::debug!(
            previous = previous.len(),
            current = ?current.map(SubscriptionSnapshot::len),
            ?decision,
            "tab sync"
        );
        decision
    }

    /// Slot the settings body should bind to after applying `decision`.
    ///
    /// `host_tab` is the tab currently selected in the host widget, if one
    /// exists.
    pub fn active_slot(
        &self,
        decision: &TabDecision,
        current: Option<&SubscriptionSnapshot>,
        host_tab: Option<usize>,
    ) -> usize {
        // A lone SIM in slot 1 is shown as slot 1, not slot 0.
        let fallback = match current {
            Some(cur) if cur.len() == 1 => cur.iter().next().map_or(0, |s| s.sim_slot_index),
            _ => 0,
        };
        match decision {
            TabDecision::NoChange
            | TabDecision::Rebuild {
                preserve_current_tab: true,
                ..
            } => host_tab.unwrap_or(fallback),
            TabDecision::Rebuild { .. } | TabDecision::Clear => fallback,
        }
    }

    /// Tab for a subscription id handed in by the launcher, if it is active.
    pub fn slot_for_subscription(snapshot: &SubscriptionSnapshot, sub_id: i32) -> Option<usize> {
        snapshot.by_id(sub_id).map(|s| s.sim_slot_index)
    }

    fn tabs_differ(previous: &SubscriptionSnapshot, current: &SubscriptionSnapshot) -> bool {
        if previous.len() != current.len() {
            return true;
        }
        // Position, not slot: a SIM moving slots under the same name keeps its tab.
        previous
            .iter()
            .zip(current.iter())
            .any(|(old, new)| old.display_name != new.display_name)
    }

    fn rebuild(&self, current: &SubscriptionSnapshot, preserve_current_tab: bool) -> TabDecision {
        let tab_names = match current.max_slot() {
            Some(max) => (0..=max)
                .map(|slot| match current.by_slot(slot) {
                    Some(sub) => sub.display_name.clone(),
                    None => self.unknown_label.clone(),
                })
                .collect(),
            None => Vec::new(),
        };
        TabDecision::Rebuild {
            tab_names,
            preserve_current_tab,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::SubscriptionInfo;

    fn subs(entries: &[(i32, usize, &str)]) -> SubscriptionSnapshot {
        SubscriptionSnapshot::new(
            entries
                .iter()
                .map(|&(id, slot, name)| SubscriptionInfo {
                    subscription_id: id,
                    sim_slot_index: slot,
                    display_name: name.into(),
                })
                .collect(),
        )
    }

    #[test]
    fn zero_to_one_is_no_change() {
        let d = TabSyncDecider::default();
        let decision = d.decide(&subs(&[]), Some(&subs(&[(1, 0, "A")])));
        assert_eq!(decision, TabDecision::NoChange);
    }

    #[test]
    fn one_to_two_rebuilds() {
        let d = TabSyncDecider::default();
        let decision = d.decide(
            &subs(&[(1, 0, "A")]),
            Some(&subs(&[(1, 0, "A"), (2, 1, "B")])),
        );
        assert_eq!(
            decision,
            TabDecision::Rebuild {
                tab_names: vec!["A".into(), "B".into()],
                preserve_current_tab: false,
            }
        );
    }

    #[test]
    fn two_to_one_clears() {
        let d = TabSyncDecider::default();
        let decision = d.decide(
            &subs(&[(1, 0, "A"), (2, 1, "B")]),
            Some(&subs(&[(1, 0, "A")])),
        );
        assert_eq!(decision, TabDecision::Clear);
    }

    #[test]
    fn renamed_sim_rebuilds_and_preserves_tab() {
        let d = TabSyncDecider::default();
        let decision = d.decide(
            &subs(&[(1, 0, "A"), (2, 1, "B")]),
            Some(&subs(&[(1, 0, "A"), (2, 1, "B roaming")])),
        );
        assert_eq!(
            decision,
            TabDecision::Rebuild {
                tab_names: vec!["A".into(), "B roaming".into()],
                preserve_current_tab: true,
            }
        );
    }

    #[test]
    fn unchanged_pair_is_no_change() {
        let d = TabSyncDecider::default();
        let both = subs(&[(1, 0, "A"), (2, 1, "B")]);
        assert_eq!(d.decide(&both, Some(&both.clone())), TabDecision::NoChange);
    }

    #[test]
    fn slot_move_with_same_names_is_no_change() {
        let d = TabSyncDecider::default();
        let decision = d.decide(
            &subs(&[(1, 0, "A"), (2, 1, "B")]),
            Some(&subs(&[(1, 0, "A"), (2, 2, "B")])),
        );
        assert_eq!(decision, TabDecision::NoChange);
    }

    #[test]
    fn unknown_list_clears_only_when_tabbed() {
        let d = TabSyncDecider::default();
        assert_eq!(
            d.decide(&subs(&[(1, 0, "A"), (2, 1, "B")]), None),
            TabDecision::Clear
        );
        assert_eq!(d.decide(&subs(&[(1, 0, "A")]), None), TabDecision::NoChange);
    }

    #[test]
    fn gap_slots_get_placeholder() {
        let d = TabSyncDecider::new(2, "Empty slot");
        let decision = d.decide(&subs(&[]), Some(&subs(&[(5, 0, "A"), (9, 2, "C")])));
        assert_eq!(
            decision,
            TabDecision::Rebuild {
                tab_names: vec!["A".into(), "Empty slot".into(), "C".into()],
                preserve_current_tab: false,
            }
        );
    }

    #[test]
    fn sim_count_growth_past_threshold_rebuilds() {
        let d = TabSyncDecider::default();
        let decision = d.decide(
            &subs(&[(1, 0, "A"), (2, 1, "B")]),
            Some(&subs(&[(1, 0, "A"), (2, 1, "B"), (3, 2, "C")])),
        );
        assert!(matches!(decision, TabDecision::Rebuild { .. }));
    }

    #[test]
    fn single_sim_selects_its_own_slot() {
        let d = TabSyncDecider::default();
        let current = subs(&[(4, 1, "B")]);
        let decision = d.decide(&subs(&[(3, 0, "A"), (4, 1, "B")]), Some(&current));
        assert_eq!(decision, TabDecision::Clear);
        assert_eq!(d.active_slot(&decision, Some(&current), Some(0)), 1);
    }

    #[test]
    fn preserved_rebuild_keeps_host_tab() {
        let d = TabSyncDecider::default();
        let current = subs(&[(1, 0, "A"), (2, 1, "B2")]);
        let decision = d.decide(&subs(&[(1, 0, "A"), (2, 1, "B")]), Some(&current));
        assert_eq!(d.active_slot(&decision, Some(&current), Some(1)), 1);
        assert_eq!(d.active_slot(&TabDecision::NoChange, Some(&current), None), 0);
    }

    #[test]
    fn subscription_id_maps_to_tab() {
        let current = subs(&[(1, 0, "A"), (2, 1, "B")]);
        assert_eq!(TabSyncDecider::slot_for_subscription(&current, 2), Some(1));
        assert_eq!(TabSyncDecider::slot_for_subscription(&current, 9), None);
    }

    #[test]
    fn threshold_is_configurable() {
        let cfg = DeviceConfig {
            tab_threshold: 3,
            ..DeviceConfig::default()
        };
        let d = TabSyncDecider::from_config(&cfg);
        assert_eq!(d.threshold(), 3);
        let decision = d.decide(&subs(&[]), Some(&subs(&[(1, 0, "A"), (2, 1, "B")])));
        assert_eq!(decision, TabDecision::NoChange);
    }
}
