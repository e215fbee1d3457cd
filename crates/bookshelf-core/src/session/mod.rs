//! Interactive session: the menu navigation state machine.
//!
//! The session drives the whole interactive loop. It asks the
//! [`Interaction`] adapter for user input, dispatches to the catalog
//! store, and hands the adapter a [`Screen`] to draw. Catalog errors
//! (validation, not-found, storage) are rendered as failure screens and
//! the loop continues; only adapter failures (EOF, interrupt) propagate
//! out of [`Session::run`].

mod screen;

pub use screen::{FindForm, RawFields, Screen};

use crate::catalog::CatalogStore;
use crate::record::{NewRecord, Status};
use crate::storage::CatalogBackend;

/// Navigation states of the interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    MainMenu,
    Add,
    Delete,
    Find,
    List,
    UpdateStatus,
    Back,
    Exit,
    Unrecognized,
}

/// Fixed selection table, shared by the main menu and the back menu.
pub fn action_for_key(input: &str) -> Option<MenuState> {
    match input.trim() {
        "1" => Some(MenuState::Add),
        "2" => Some(MenuState::Delete),
        "3" => Some(MenuState::Find),
        "4" => Some(MenuState::List),
        "5" => Some(MenuState::UpdateStatus),
        "9" => Some(MenuState::Back),
        "0" => Some(MenuState::Exit),
        _ => None,
    }
}

/// Status selection table for the update dialog (1 checks out, 2 returns).
pub fn status_for_key(input: &str) -> Option<Status> {
    match input.trim() {
        "1" => Some(Status::CheckedOut),
        "2" => Some(Status::Available),
        _ => None,
    }
}

/// User interaction boundary consumed by the session.
///
/// Prompt methods block until the user answers; they fail only when the
/// input source goes away (EOF, interrupt), which ends the session.
pub trait Interaction {
    fn prompt_menu_selection(&mut self) -> anyhow::Result<String>;
    fn prompt_record_fields(&mut self) -> anyhow::Result<RawFields>;
    fn prompt_id(&mut self) -> anyhow::Result<String>;
    fn prompt_find_query(&mut self, form: FindForm) -> anyhow::Result<String>;
    fn prompt_status_selection(&mut self) -> anyhow::Result<String>;
    fn render(&mut self, screen: &Screen) -> anyhow::Result<()>;
}

/// One interactive run, from the main menu until exit.
pub struct Session<'a, I: Interaction, B: CatalogBackend> {
    io: &'a mut I,
    store: CatalogStore<B>,
    state: MenuState,
}

impl<'a, I: Interaction, B: CatalogBackend> Session<'a, I, B> {
    pub fn new(io: &'a mut I, store: CatalogStore<B>) -> Self {
        Self {
            io,
            store,
            state: MenuState::MainMenu,
        }
    }

    /// Run the loop until the user selects exit.
    ///
    /// # Errors
    ///
    /// Propagates adapter failures (closed input, interrupt); the caller
    /// maps these to a non-zero exit.
    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match self.state {
                MenuState::MainMenu => {
                    self.state = self.main_menu()?;
                }
                MenuState::Add => {
                    self.add_record()?;
                    self.state = self.back_menu()?;
                }
                MenuState::Delete => {
                    self.delete_record()?;
                    self.state = self.back_menu()?;
                }
                MenuState::Find => {
                    self.find_records()?;
                    self.state = self.back_menu()?;
                }
                MenuState::List => {
                    self.list_records()?;
                    self.state = self.back_menu()?;
                }
                MenuState::UpdateStatus => {
                    self.update_status()?;
                    self.state = self.back_menu()?;
                }
                MenuState::Back => {
                    self.state = MenuState::MainMenu;
                }
                MenuState::Unrecognized => {
                    self.io.render(&Screen::Help)?;
                    self.state = self.back_menu()?;
                }
                MenuState::Exit => {
                    self.io.render(&Screen::Exit)?;
                    return Ok(());
                }
            }
        }
    }

    /// Main menu: loops in place until the selection maps to an action.
    fn main_menu(&mut self) -> anyhow::Result<MenuState> {
        let mut invalid = false;
        loop {
            self.io.render(&Screen::MainMenu { invalid })?;
            let selection = self.io.prompt_menu_selection()?;
            match action_for_key(&selection) {
                Some(state) => return Ok(state),
                None => invalid = true,
            }
        }
    }

    /// Back menu: any mapped selection jumps straight to its target,
    /// anything else goes through the help screen.
    fn back_menu(&mut self) -> anyhow::Result<MenuState> {
        self.io.render(&Screen::BackMenu)?;
        let selection = self.io.prompt_menu_selection()?;
        Ok(action_for_key(&selection).unwrap_or(MenuState::Unrecognized))
    }

    fn add_record(&mut self) -> anyhow::Result<()> {
        self.io.render(&Screen::AddForm)?;
        let fields = self.io.prompt_record_fields()?;
        let new_record = NewRecord::new(fields.title, fields.author, fields.year);

        match self.store.create(new_record) {
            Ok(record) => self.io.render(&Screen::AddSuccess(record)),
            Err(err) => self.io.render(&Screen::AddFailed(err.to_string())),
        }
    }

    fn delete_record(&mut self) -> anyhow::Result<()> {
        let id = self.prompt_record_id(|retry| Screen::DeletePrompt { retry })?;
        match self.store.delete_by_id(id) {
            Ok(()) => self.io.render(&Screen::DeleteSuccess),
            Err(err) => self.io.render(&Screen::DeleteFailed(err.to_string())),
        }
    }

    fn find_records(&mut self) -> anyhow::Result<()> {
        let mut error = None;
        let form = loop {
            self.io.render(&Screen::FindForm {
                error: error.clone(),
            })?;
            let selection = self.io.prompt_menu_selection()?;
            match FindForm::from_key(&selection) {
                Some(form) => break form,
                None => error = Some("Use only positions 1, 2 or 3".to_string()),
            }
        };

        let query = self.io.prompt_find_query(form)?;
        match self.store.find(&query) {
            Ok(records) => self.io.render(&Screen::FindResults(records)),
            Err(err) => self.io.render(&Screen::FindFailed(err.to_string())),
        }
    }

    fn list_records(&mut self) -> anyhow::Result<()> {
        match self.store.list_all() {
            Ok(records) => self.io.render(&Screen::ListResults(records)),
            Err(err) => self.io.render(&Screen::ListFailed(err.to_string())),
        }
    }

    fn update_status(&mut self) -> anyhow::Result<()> {
        let id = self.prompt_record_id(|retry| Screen::UpdateIdPrompt { retry })?;

        let mut error = None;
        let status = loop {
            self.io.render(&Screen::UpdateStatusMenu {
                error: error.clone(),
            })?;
            let selection = self.io.prompt_status_selection()?;
            match status_for_key(&selection) {
                Some(status) => break status,
                None => error = Some("Use only positions 1 or 2".to_string()),
            }
        };

        match self.store.update_status(id, status) {
            Ok(()) => self.io.render(&Screen::UpdateSuccess),
            Err(err) => self.io.render(&Screen::UpdateFailed(err.to_string())),
        }
    }

    /// Id entry loop: non-integer input re-prompts with a retry flag and
    /// never escalates to the outer state.
    fn prompt_record_id(&mut self, screen: impl Fn(bool) -> Screen) -> anyhow::Result<u64> {
        let mut retry = false;
        loop {
            self.io.render(&screen(retry))?;
            let raw = self.io.prompt_id()?;
            match raw.trim().parse::<u64>() {
                Ok(id) => return Ok(id),
                Err(_) => retry = true,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_table() {
        assert_eq!(action_for_key("1"), Some(MenuState::Add));
        assert_eq!(action_for_key("2"), Some(MenuState::Delete));
        assert_eq!(action_for_key("3"), Some(MenuState::Find));
        assert_eq!(action_for_key("4"), Some(MenuState::List));
        assert_eq!(action_for_key("5"), Some(MenuState::UpdateStatus));
        assert_eq!(action_for_key("9"), Some(MenuState::Back));
        assert_eq!(action_for_key("0"), Some(MenuState::Exit));
    }

    #[test]
    fn test_selection_table_rejects_unmapped_input() {
        assert_eq!(action_for_key("6"), None);
        assert_eq!(action_for_key("x"), None);
        assert_eq!(action_for_key(""), None);
        assert_eq!(action_for_key("10"), None);
    }

    #[test]
    fn test_selection_table_trims_whitespace() {
        assert_eq!(action_for_key(" 4 "), Some(MenuState::List));
    }

    #[test]
    fn test_status_selection_table() {
        assert_eq!(status_for_key("1"), Some(Status::CheckedOut));
        assert_eq!(status_for_key("2"), Some(Status::Available));
        assert_eq!(status_for_key("3"), None);
        assert_eq!(status_for_key("one"), None);
    }

    #[test]
    fn test_find_form_table() {
        assert_eq!(FindForm::from_key("1"), Some(FindForm::Author));
        assert_eq!(FindForm::from_key("2"), Some(FindForm::Title));
        assert_eq!(FindForm::from_key("3"), Some(FindForm::Year));
        assert_eq!(FindForm::from_key("4"), None);
    }
}
