use crate::document::CardHandle;
use crate::error::DirectoryResult;

/// Everything the user can do to the directory.
pub trait DirectoryEvents {
    fn on_search_input(&mut self, query: &str) -> DirectoryResult<()>;
    fn on_card_selected(&mut self, handle: CardHandle) -> DirectoryResult<()>;
    fn on_modal_close(&mut self) -> DirectoryResult<()>;
    fn on_modal_previous(&mut self) -> DirectoryResult<()>;
    fn on_modal_next(&mut self) -> DirectoryResult<()>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    SearchInput(String),
    CardSelected(CardHandle),
    ModalClose,
    ModalPrevious,
    ModalNext,
}

impl UiEvent {
    pub fn dispatch<H: DirectoryEvents + ?Sized>(&self, handler: &mut H) -> DirectoryResult<()> {
        match self {
            UiEvent::SearchInput(query) => handler.on_search_input(query),
            UiEvent::CardSelected(handle) => handler.on_card_selected(*handle),
            UiEvent::ModalClose => handler.on_modal_close(),
            UiEvent::ModalPrevious => handler.on_modal_previous(),
            UiEvent::ModalNext => handler.on_modal_next(),
        }
    }
}
