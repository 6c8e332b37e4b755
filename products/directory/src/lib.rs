//! Searchable employee directory.
//!
//! [`EmployeeRegistry`] owns every loaded [`Employee`] and the filtered view;
//! the card and modal views draw into a [`Document`]; [`DirectoryController`]
//! wires user events and provider results through them.

pub mod card;
pub mod controller;
pub mod document;
pub mod employee;
pub mod error;
pub mod events;
pub mod factory;
pub mod modal;
pub mod registry;
pub mod search;
pub mod session;

pub use card::EmployeeCardView;
pub use controller::DirectoryController;
pub use document::{CardHandle, CardNode, Document, MemoryDocument, ModalNode, Node, NodeId};
pub use employee::{Employee, EmployeeId, Profile};
pub use error::{DirectoryError, DirectoryResult};
pub use events::{DirectoryEvents, UiEvent};
pub use factory::create_employee;
pub use modal::EmployeeModalView;
pub use registry::EmployeeRegistry;
pub use session::{DEFAULT_EMPLOYEE_COUNT, LoadSummary, Turn, load_all, run};
