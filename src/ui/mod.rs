// src/ui/mod.rs
use crate::file::ReportHandler;
use crate::state::Event;

pub mod components;
pub mod dialog;
pub mod email;
pub mod error;
pub mod loading;
pub mod results;
pub mod ticker_select;

/// What a view asked for this frame. Views never touch state directly.
pub enum UiAction {
    Dispatch(Event),
    CopyReport,
    ExportReport(&'static dyn ReportHandler),
}

impl From<Event> for UiAction {
    fn from(event: Event) -> Self {
        UiAction::Dispatch(event)
    }
}
