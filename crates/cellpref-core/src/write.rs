//! Modem write discipline.
//!
//! Setting the preferred network type is asynchronous. Only the most recent
//! write for a subscription counts: when the user picks again before the modem
//! answers, the earlier completion is dropped. A failed write sends the host
//! back to the persisted setting so the selectors stop showing a value the
//! modem never accepted.

use std::collections::HashMap;

use serde::Serialize;

use crate::mode::NetworkMode;

/// Handle for one outstanding modem write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WriteTicket {
    pub sub_id: i32,
    pub mode: NetworkMode,
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum WriteOutcome {
    /// The modem took the mode; persist it.
    Persist { sub_id: i32, mode: NetworkMode },
    /// The modem refused; reload the displayed values from the persisted setting.
    Resync { sub_id: i32 },
    /// A newer write for the same subscription is pending.
    Superseded,
}

#[derive(Debug, Default)]
pub struct ModeWriteCoordinator {
    pending: HashMap<i32, WriteTicket>,
    generation: u64,
}

impl ModeWriteCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a write, superseding any pending write for `sub_id`.
    pub fn begin(&mut self, sub_id: i32, mode: NetworkMode) -> WriteTicket {
        self.generation += 1;
        let ticket = WriteTicket {
            sub_id,
            mode,
            generation: self.generation,
        };
        if let Some(previous) = self.pending.insert(sub_id, ticket) {
            tracing::debug!(
                sub_id,
                previous = %previous.mode,
                next = %mode,
                "superseding pending network mode write"
            );
        }
        ticket
    }

    pub fn complete(&mut self, ticket: WriteTicket, success: bool) -> WriteOutcome {
        let current = self
            .pending
            .get(&ticket.sub_id)
            .is_some_and(|p| p.generation == ticket.generation);
        if !current {
            tracing::warn!(
                sub_id = ticket.sub_id,
                mode = %ticket.mode,
                "dropping completion of superseded network mode write"
            );
            return WriteOutcome::Superseded;
        }

        self.pending.remove(&ticket.sub_id);
        if success {
            WriteOutcome::Persist {
                sub_id: ticket.sub_id,
                mode: ticket.mode,
            }
        } else {
            tracing::warn!(
                sub_id = ticket.sub_id,
                mode = %ticket.mode,
                "modem rejected network mode, resyncing from settings"
            );
            WriteOutcome::Resync {
                sub_id: ticket.sub_id,
            }
        }
    }

    /// Mode currently being written for `sub_id`.
    pub fn pending(&self, sub_id: i32) -> Option<NetworkMode> {
        self.pending.get(&sub_id).map(|t| t.mode)
    }

    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }
}
