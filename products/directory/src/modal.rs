use tracing::debug;

use crate::document::{Document, ModalNode, Node, NodeId};
use crate::employee::{Employee, EmployeeId};
use crate::registry::EmployeeRegistry;

#[derive(Clone, Copy, Debug)]
struct OpenModal {
    employee: EmployeeId,
    overlay: NodeId,
    panel: NodeId,
}

/// The detail overlay. At most one overlay + panel pair exists at a time.
#[derive(Debug, Default)]
pub struct EmployeeModalView {
    open: Option<OpenModal>,
}

impl EmployeeModalView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Employee shown by the open modal, if any.
    pub fn current(&self) -> Option<EmployeeId> {
        self.open.map(|open| open.employee)
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Show `employee`, replacing any modal already open.
    pub fn render<D: Document>(&mut self, document: &mut D, employee: &Employee) {
        self.close(document);
        let overlay = document.append(Node::Overlay);
        let panel = document.append(Node::Modal(ModalNode::new(employee)));
        self.open = Some(OpenModal {
            employee: employee.id(),
            overlay,
            panel,
        });
    }

    /// Remove overlay and panel. Returns false when nothing was open.
    pub fn close<D: Document>(&mut self, document: &mut D) -> bool {
        let Some(open) = self.open.take() else {
            return false;
        };
        document.remove(open.panel);
        document.remove(open.overlay);
        true
    }

    /// Replace the modal with the previous employee of the live filtered view.
    ///
    /// No-op when nothing is open or the view is empty.
    pub fn show_previous<D: Document>(
        &mut self,
        document: &mut D,
        registry: &EmployeeRegistry,
    ) -> Option<EmployeeId> {
        let current = self.current()?;
        let target = registry.previous(current)?;
        debug!(from = %current, to = %target.id(), "modal previous");
        self.render(document, target);
        Some(target.id())
    }

    /// Replace the modal with the next employee of the live filtered view.
    ///
    /// No-op when nothing is open or the view is empty.
    pub fn show_next<D: Document>(
        &mut self,
        document: &mut D,
        registry: &EmployeeRegistry,
    ) -> Option<EmployeeId> {
        let current = self.current()?;
        let target = registry.next(current)?;
        debug!(from = %current, to = %target.id(), "modal next");
        self.render(document, target);
        Some(target.id())
    }
}
