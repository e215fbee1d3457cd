//! Screens and input carriers exchanged with the interaction adapter.

use crate::record::Record;

/// Raw field input for the add-book form, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFields {
    pub title: String,
    pub author: String,
    pub year: String,
}

/// The three search forms of the find dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindForm {
    Author,
    Title,
    Year,
}

impl FindForm {
    /// Map a sub-form selection to a search form (1 author, 2 title, 3 year).
    pub fn from_key(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(FindForm::Author),
            "2" => Some(FindForm::Title),
            "3" => Some(FindForm::Year),
            _ => None,
        }
    }
}

/// Everything the session can ask the adapter to draw.
///
/// The adapter owns layout and styling; the session only picks the
/// screen kind and supplies the payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// Main menu; `invalid` flags a rejected previous selection.
    MainMenu { invalid: bool },
    AddForm,
    AddSuccess(Record),
    AddFailed(String),
    /// Id entry for delete; `retry` flags a non-integer previous entry.
    DeletePrompt { retry: bool },
    DeleteSuccess,
    DeleteFailed(String),
    /// Find form selection; carries the loop error message, if any.
    FindForm { error: Option<String> },
    FindResults(Vec<Record>),
    FindFailed(String),
    ListResults(Vec<Record>),
    ListFailed(String),
    /// Id entry for status update; `retry` flags a non-integer entry.
    UpdateIdPrompt { retry: bool },
    /// Status selection menu; carries the loop error message, if any.
    UpdateStatusMenu { error: Option<String> },
    UpdateSuccess,
    UpdateFailed(String),
    /// Footer prompt shown after every completed action.
    BackMenu,
    /// Help screen for unrecognized back-menu input.
    Help,
    Exit,
}
