//! Terminal implementation of the session's interaction boundary.
//!
//! On a TTY, prompts go through `dialoguer`; piped input falls back to
//! plain line reads so the tool stays scriptable. EOF or an interrupt
//! during any wait surfaces as an error, which ends the session with a
//! non-zero exit.

use std::io::{BufRead, IsTerminal, Write};

use dialoguer::{theme::ColorfulTheme, Input};

use bookshelf_core::session::{FindForm, Interaction, RawFields, Screen};

use super::render;
use super::theme::Theme;

/// Interactive terminal adapter.
pub struct TerminalIo {
    theme: Theme,
    interactive: bool,
}

impl TerminalIo {
    pub fn from_env(no_color: bool) -> Self {
        Self {
            theme: Theme::from_env(no_color),
            interactive: std::io::stdin().is_terminal(),
        }
    }

    fn read(&self, prompt: &str) -> anyhow::Result<String> {
        if self.interactive {
            let value = Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()?;
            Ok(value)
        } else {
            self.read_plain(prompt)
        }
    }

    fn read_plain(&self, prompt: &str) -> anyhow::Result<String> {
        print!("{} ", self.theme.menu(&format!("{prompt} >")));
        std::io::stdout().flush()?;

        let mut line = String::new();
        let read = std::io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            anyhow::bail!("input closed");
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}

impl Interaction for TerminalIo {
    fn prompt_menu_selection(&mut self) -> anyhow::Result<String> {
        self.read("Choice")
    }

    fn prompt_record_fields(&mut self) -> anyhow::Result<RawFields> {
        Ok(RawFields {
            title: self.read("Title")?,
            author: self.read("Author")?,
            year: self.read("Year")?,
        })
    }

    fn prompt_id(&mut self) -> anyhow::Result<String> {
        self.read("ID")
    }

    fn prompt_find_query(&mut self, form: FindForm) -> anyhow::Result<String> {
        let label = match form {
            FindForm::Author => "Author",
            FindForm::Title => "Title",
            FindForm::Year => "Year",
        };
        self.read(label)
    }

    fn prompt_status_selection(&mut self) -> anyhow::Result<String> {
        self.read("Status")
    }

    fn render(&mut self, screen: &Screen) -> anyhow::Result<()> {
        render::draw(&self.theme, screen);
        Ok(())
    }
}
