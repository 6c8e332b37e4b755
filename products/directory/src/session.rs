//! Drives a directory session: concurrent person fetches interleaved with UI
//! events, all on the calling task.
//!
//! Each fetch completion and each UI event is one turn and runs to completion
//! before the next one starts. Fetches finish in whatever order the provider
//! answers; a failed fetch only loses its own slot.

use std::future::Future;

use futures::stream::{FuturesUnordered, Stream, StreamExt};
use platform_people::{PersonProvider, PersonRecord, ProviderResult};
use tracing::{debug, info, warn};

use crate::controller::DirectoryController;
use crate::document::Document;
use crate::employee::EmployeeId;
use crate::error::DirectoryResult;
use crate::events::UiEvent;

/// Number of employees loaded on startup.
pub const DEFAULT_EMPLOYEE_COUNT: usize = 12;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadSummary {
    pub requested: usize,
    pub loaded: usize,
    pub failed: usize,
}

impl LoadSummary {
    fn new(requested: usize) -> Self {
        Self {
            requested,
            ..Self::default()
        }
    }

    fn record(&mut self, outcome: Option<EmployeeId>) {
        match outcome {
            Some(_) => self.loaded += 1,
            None => self.failed += 1,
        }
    }

    /// Fetches neither loaded nor failed yet.
    pub fn pending(&self) -> usize {
        self.requested - self.loaded - self.failed
    }
}

/// What just happened, handed to the `on_turn` observer of [`run`].
#[derive(Debug)]
pub enum Turn {
    Loaded {
        slot: usize,
        employee: Option<EmployeeId>,
    },
    Event {
        event: UiEvent,
        outcome: DirectoryResult<()>,
    },
}

fn start_loads<'a, P: PersonProvider>(
    provider: &'a P,
    count: usize,
) -> FuturesUnordered<impl Future<Output = (usize, ProviderResult<PersonRecord>)> + 'a> {
    (0..count)
        .map(move |slot| async move {
            debug!(slot, "fetching employee");
            (slot, provider.fetch_person().await)
        })
        .collect()
}

/// Wait for every fetch, rendering each employee as it arrives.
pub async fn load_all<P, D>(
    controller: &mut DirectoryController<D>,
    provider: &P,
    count: usize,
) -> LoadSummary
where
    P: PersonProvider,
    D: Document,
{
    let mut loads = start_loads(provider, count);
    let mut summary = LoadSummary::new(count);
    while let Some((slot, result)) = loads.next().await {
        summary.record(controller.on_person_loaded(slot, result));
    }
    log_summary(&summary);
    summary
}

/// Run an interactive session until `events` ends.
///
/// Fetches still in flight when the event stream ends are dropped.
pub async fn run<P, D, S, F>(
    controller: &mut DirectoryController<D>,
    provider: &P,
    count: usize,
    events: S,
    mut on_turn: F,
) -> LoadSummary
where
    P: PersonProvider,
    D: Document,
    S: Stream<Item = UiEvent>,
    F: FnMut(&DirectoryController<D>, &Turn),
{
    let mut loads = start_loads(provider, count);
    let mut summary = LoadSummary::new(count);
    let events = events.fuse();
    futures::pin_mut!(events);

    loop {
        let turn = futures::select! {
            (slot, result) = loads.select_next_some() => {
                let employee = controller.on_person_loaded(slot, result);
                summary.record(employee);
                Turn::Loaded { slot, employee }
            }
            event = events.next() => {
                let Some(event) = event else {
                    break;
                };
                let outcome = event.dispatch(&mut *controller);
                if let Err(err) = &outcome {
                    warn!(?event, error = %err, "event rejected");
                }
                Turn::Event { event, outcome }
            }
            complete => break,
        };
        on_turn(&*controller, &turn);
    }

    if summary.pending() > 0 {
        debug!(pending = summary.pending(), "session ended with fetches in flight");
    }
    log_summary(&summary);
    summary
}

fn log_summary(summary: &LoadSummary) {
    info!(
        requested = summary.requested,
        loaded = summary.loaded,
        failed = summary.failed,
        "employee load finished"
    );
}
