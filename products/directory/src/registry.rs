use std::collections::HashMap;

use crate::employee::{Employee, EmployeeId};
use crate::error::{DirectoryError, DirectoryResult};

/// Which part of `all` is currently visible.
#[derive(Clone, Debug, Default)]
enum FilteredView {
    /// Follows `all`, including employees appended later.
    #[default]
    Everything,
    /// Positions into `all`, ascending.
    Subset(Vec<usize>),
}

/// Owns every loaded employee plus the active filtered view.
///
/// `all` is append-only. The filtered view starts out tracking `all` and is
/// replaced wholesale by [`EmployeeRegistry::set_filtered`]; once replaced,
/// later additions stay out of it until the next replacement.
#[derive(Debug, Default)]
pub struct EmployeeRegistry {
    all: Vec<Employee>,
    positions: HashMap<EmployeeId, usize>,
    filtered: FilteredView,
}

impl EmployeeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, employee: Employee) -> EmployeeId {
        let id = employee.id();
        self.positions.insert(id, self.all.len());
        self.all.push(employee);
        id
    }

    pub fn all(&self) -> &[Employee] {
        &self.all
    }

    pub fn len(&self) -> usize {
        self.all.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all.is_empty()
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.positions.get(&id).map(|&pos| &self.all[pos])
    }

    /// Replace the filtered view. Every id must already be loaded; on error the
    /// previous view is kept. Order is normalized to insertion order.
    pub fn set_filtered<I>(&mut self, subset: I) -> DirectoryResult<()>
    where
        I: IntoIterator<Item = EmployeeId>,
    {
        let mut positions = subset
            .into_iter()
            .map(|id| {
                self.positions
                    .get(&id)
                    .copied()
                    .ok_or(DirectoryError::UnknownEmployee(id))
            })
            .collect::<DirectoryResult<Vec<_>>>()?;
        positions.sort_unstable();
        positions.dedup();
        self.filtered = FilteredView::Subset(positions);
        Ok(())
    }

    pub fn filtered_len(&self) -> usize {
        match &self.filtered {
            FilteredView::Everything => self.all.len(),
            FilteredView::Subset(positions) => positions.len(),
        }
    }

    pub fn filtered_at(&self, index: usize) -> Option<&Employee> {
        match &self.filtered {
            FilteredView::Everything => self.all.get(index),
            FilteredView::Subset(positions) => positions.get(index).map(|&pos| &self.all[pos]),
        }
    }

    pub fn filtered(&self) -> impl Iterator<Item = &Employee> + '_ {
        (0..self.filtered_len()).filter_map(move |index| self.filtered_at(index))
    }

    /// Position of `id` within the filtered view.
    pub fn index_of(&self, id: EmployeeId) -> Option<usize> {
        let pos = *self.positions.get(&id)?;
        match &self.filtered {
            FilteredView::Everything => Some(pos),
            FilteredView::Subset(positions) => positions.binary_search(&pos).ok(),
        }
    }

    /// Previous employee in the filtered view, wrapping from first to last.
    ///
    /// `None` only when the view is empty. An employee outside the view steps
    /// back to the last entry.
    pub fn previous(&self, id: EmployeeId) -> Option<&Employee> {
        let len = self.filtered_len();
        if len == 0 {
            return None;
        }
        let index = match self.index_of(id) {
            Some(index) => (index + len - 1) % len,
            None => len - 1,
        };
        self.filtered_at(index)
    }

    /// Next employee in the filtered view, wrapping from last to first.
    ///
    /// `None` only when the view is empty. An employee outside the view steps
    /// forward to the first entry.
    pub fn next(&self, id: EmployeeId) -> Option<&Employee> {
        let len = self.filtered_len();
        if len == 0 {
            return None;
        }
        let index = match self.index_of(id) {
            Some(index) => (index + 1) % len,
            None => 0,
        };
        self.filtered_at(index)
    }
}
