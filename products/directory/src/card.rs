use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::trace;

use crate::document::{CardHandle, CardNode, Document, Node, NodeId};
use crate::employee::{Employee, EmployeeId};

const HANDLE_MIN: u32 = 1000;
const HANDLE_MAX: u32 = 9999;
const HANDLE_ATTEMPTS: usize = 32;

#[derive(Clone, Copy, Debug)]
struct LiveCard {
    handle: CardHandle,
    employee: EmployeeId,
    node: NodeId,
}

/// Tracks the cards currently present in the document.
#[derive(Debug)]
pub struct EmployeeCardView {
    live: Vec<LiveCard>,
    taken: HashSet<CardHandle>,
    rng: StdRng,
}

impl Default for EmployeeCardView {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeCardView {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            live: Vec::new(),
            taken: HashSet::new(),
            rng,
        }
    }

    /// Append a card for `employee` and bind its handle for selection.
    pub fn render<D: Document>(&mut self, document: &mut D, employee: &Employee) -> CardHandle {
        let handle = self.fresh_handle();
        let node = document.append(Node::Card(CardNode::new(handle, employee)));
        trace!(%handle, employee = %employee.id(), "card rendered");
        self.taken.insert(handle);
        self.live.push(LiveCard {
            handle,
            employee: employee.id(),
            node,
        });
        handle
    }

    /// Remove one card. Returns false if the handle is not live.
    pub fn destroy<D: Document>(&mut self, document: &mut D, handle: CardHandle) -> bool {
        let Some(index) = self.live.iter().position(|card| card.handle == handle) else {
            return false;
        };
        let card = self.live.remove(index);
        self.taken.remove(&card.handle);
        document.remove(card.node);
        true
    }

    /// Remove every live card, whichever employees they belong to.
    pub fn destroy_all<D: Document>(&mut self, document: &mut D) -> usize {
        let removed = self.live.len();
        self.taken.clear();
        for card in self.live.drain(..) {
            document.remove(card.node);
        }
        removed
    }

    /// Employee bound to a live card.
    pub fn employee_for(&self, handle: CardHandle) -> Option<EmployeeId> {
        self.live
            .iter()
            .find(|card| card.handle == handle)
            .map(|card| card.employee)
    }

    pub fn handles(&self) -> impl Iterator<Item = CardHandle> + '_ {
        self.live.iter().map(|card| card.handle)
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    fn is_live(&self, handle: CardHandle) -> bool {
        self.taken.contains(&handle)
    }

    // Four-digit handles drawn at random; past the four-digit space we count up.
    fn fresh_handle(&mut self) -> CardHandle {
        for _ in 0..HANDLE_ATTEMPTS {
            let handle = CardHandle::new(self.rng.gen_range(HANDLE_MIN..=HANDLE_MAX));
            if !self.is_live(handle) {
                return handle;
            }
        }
        if let Some(handle) = (HANDLE_MIN..=HANDLE_MAX)
            .map(CardHandle::new)
            .find(|handle| !self.is_live(*handle))
        {
            return handle;
        }
        let highest = self
            .taken
            .iter()
            .map(|handle| handle.value())
            .max()
            .unwrap_or(HANDLE_MAX);
        CardHandle::new(highest + 1)
    }
}
