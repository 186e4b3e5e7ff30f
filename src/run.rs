//! # Orchestrator
//!
//! One announcement run: collect sources, load the seen set, pick the first
//! admissible record, persist the updated seen set, hand the record to the
//! presentation shell. Persistence happens before presentation, so a message
//! is never shown twice even if the display step fails.
//!
//! The whole run is best-effort: no error of any kind escapes [`Orchestrator::apply`].
//! An announcement system must never be able to break the host's startup path.

use tracing::{debug, info};

use crate::config::Config;
use crate::fetch::{self, HttpTransport, Transport};
use crate::record::Announcement;
use crate::sources;
use crate::store;

/// One-shot latch, constructed once per application lifetime by the caller.
/// After the first run has produced any outcome (including "no message"),
/// further runs against the same state are no-ops.
///
/// This is a plain flag, not a synchronized gate: single-threaded invocation
/// is a documented precondition.
#[derive(Debug, Default)]
pub struct RunState {
    applied: bool,
}

impl RunState {
    pub fn new() -> Self {
        RunState::default()
    }

    pub fn has_applied(&self) -> bool {
        self.applied
    }
}

pub struct Orchestrator<T = HttpTransport> {
    config: Config,
    transport: T,
}

impl Orchestrator<HttpTransport> {
    pub fn new(config: Config) -> Self {
        Orchestrator {
            config,
            transport: HttpTransport::new(),
        }
    }
}

impl<T: Transport> Orchestrator<T> {
    pub fn with_transport(config: Config, transport: T) -> Self {
        Orchestrator { config, transport }
    }

    /// Run once. `candidates` are the host's `(extensionId, urlString)`
    /// declarations; `shell` is the current presentation state, returned
    /// unchanged unless a record is selected, in which case `present` maps
    /// it to the new state.
    pub fn apply<I, N, S, F>(&self, state: &mut RunState, candidates: I, shell: S, present: F) -> S
    where
        I: IntoIterator<Item = (N, N)>,
        N: AsRef<str>,
        F: FnOnce(S, Announcement) -> S,
    {
        if state.applied {
            debug!("announcement run already applied, skipping");
            return shell;
        }
        state.applied = true;

        let urls = sources::collect(candidates);
        let mut seen = store::load(&self.config.seen_file);

        let Some(record) =
            fetch::select_announcement(&self.transport, &urls, &seen, &self.config.locale)
        else {
            return shell;
        };

        seen.insert(record.uuid);
        store::save(&self.config.seen_file, &seen);

        info!(uuid = %record.uuid, "presenting announcement");
        present(shell, record)
    }
}
