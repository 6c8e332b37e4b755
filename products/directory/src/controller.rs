use platform_people::{PersonRecord, ProviderResult};
use tracing::{debug, info, warn};

use crate::card::EmployeeCardView;
use crate::document::{CardHandle, Document};
use crate::employee::{Employee, EmployeeId};
use crate::error::{DirectoryError, DirectoryResult};
use crate::events::DirectoryEvents;
use crate::factory::create_employee;
use crate::modal::EmployeeModalView;
use crate::registry::EmployeeRegistry;
use crate::search;

/// Ties the registry to the card and modal views drawn into `document`.
///
/// All mutation happens through `&mut self`, one turn at a time.
#[derive(Debug)]
pub struct DirectoryController<D> {
    registry: EmployeeRegistry,
    cards: EmployeeCardView,
    modal: EmployeeModalView,
    document: D,
    query: String,
}

impl<D: Document> DirectoryController<D> {
    pub fn new(document: D) -> Self {
        Self::with_cards(document, EmployeeCardView::new())
    }

    pub fn with_cards(document: D, cards: EmployeeCardView) -> Self {
        Self {
            registry: EmployeeRegistry::new(),
            cards,
            modal: EmployeeModalView::new(),
            document,
            query: String::new(),
        }
    }

    pub fn registry(&self) -> &EmployeeRegistry {
        &self.registry
    }

    pub fn cards(&self) -> &EmployeeCardView {
        &self.cards
    }

    pub fn modal(&self) -> &EmployeeModalView {
        &self.modal
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    /// The query applied by the most recent search.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Append a loaded employee and render its card straight away.
    ///
    /// The active query is not consulted, so a late arrival shows up even if it
    /// would not match; it stays out of the filtered view until the next search.
    pub fn add_employee(&mut self, employee: Employee) -> EmployeeId {
        let id = self.registry.add(employee);
        if let Some(employee) = self.registry.get(id) {
            let handle = self.cards.render(&mut self.document, employee);
            info!(%handle, name = employee.name(), "employee loaded");
        }
        id
    }

    /// Handle one completed provider fetch.
    pub fn on_person_loaded(
        &mut self,
        slot: usize,
        result: ProviderResult<PersonRecord>,
    ) -> Option<EmployeeId> {
        match result {
            Ok(record) => Some(self.add_employee(create_employee(record))),
            Err(err) => {
                warn!(slot, error = %err, "employee fetch failed; slot skipped");
                None
            }
        }
    }

    /// Recompute the filtered view for `query` and rebuild every card.
    pub fn search(&mut self, query: &str) -> DirectoryResult<usize> {
        let matches: Vec<EmployeeId> = search::filter(query, self.registry.all())
            .into_iter()
            .map(Employee::id)
            .collect();
        self.registry.set_filtered(matches)?;
        self.query = query.to_string();

        let removed = self.cards.destroy_all(&mut self.document);
        for employee in self.registry.filtered() {
            self.cards.render(&mut self.document, employee);
        }
        let shown = self.registry.filtered_len();
        debug!(query, removed, shown, "cards rebuilt");
        Ok(shown)
    }
}

impl<D: Document> DirectoryEvents for DirectoryController<D> {
    fn on_search_input(&mut self, query: &str) -> DirectoryResult<()> {
        self.search(query).map(|_| ())
    }

    fn on_card_selected(&mut self, handle: CardHandle) -> DirectoryResult<()> {
        let id = self
            .cards
            .employee_for(handle)
            .ok_or(DirectoryError::UnknownCard(handle))?;
        let employee = self
            .registry
            .get(id)
            .ok_or(DirectoryError::UnknownEmployee(id))?;
        debug!(%handle, name = employee.name(), "card selected");
        self.modal.render(&mut self.document, employee);
        Ok(())
    }

    fn on_modal_close(&mut self) -> DirectoryResult<()> {
        self.modal.close(&mut self.document);
        Ok(())
    }

    fn on_modal_previous(&mut self) -> DirectoryResult<()> {
        self.modal.show_previous(&mut self.document, &self.registry);
        Ok(())
    }

    fn on_modal_next(&mut self) -> DirectoryResult<()> {
        self.modal.show_next(&mut self.document, &self.registry);
        Ok(())
    }
}
