//! Screen rendering for the interactive session.
//!
//! The session picks the screen kind; this module owns the layout.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

use bookshelf_core::session::Screen;
use bookshelf_core::Record;

use super::theme::Theme;

const SCREEN_WIDTH: usize = 45;

fn divider(theme: &Theme) -> String {
    theme.accent(&"=".repeat(SCREEN_WIDTH))
}

fn under_divider(theme: &Theme) -> String {
    theme.dim(&"_".repeat(SCREEN_WIDTH))
}

fn header(theme: &Theme) -> String {
    let title = theme.accent(&format!("Bookshelf v{}", bookshelf_core::VERSION));
    format!("{}\n{}", title, divider(theme))
}

fn menu_items(theme: &Theme) -> String {
    [
        "1. Add book",
        "2. Delete book by id",
        "3. Find book",
        "4. List all books",
        "5. Update book status",
    ]
    .iter()
    .map(|item| theme.menu(item))
    .collect::<Vec<_>>()
    .join("\n")
}

fn footer(theme: &Theme) -> String {
    format!(
        "{}\n{}   {}",
        under_divider(theme),
        theme.menu("0. Exit"),
        theme.menu("9. Back")
    )
}

/// Result table for find/list output.
pub fn records_table(records: &[Record]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Title", "Author", "Year", "Status"]);

    for record in records {
        table.add_row(vec![
            record.id.to_string(),
            record.title.clone(),
            record.author.clone(),
            record.year.clone(),
            record.status.to_string(),
        ]);
    }

    table.to_string()
}

/// Draw one screen to stdout.
pub fn draw(theme: &Theme, screen: &Screen) {
    println!("{}", screen_text(theme, screen));
}

/// Build the full text of a screen.
pub fn screen_text(theme: &Theme, screen: &Screen) -> String {
    match screen {
        Screen::MainMenu { invalid } => {
            let mut out = format!("{}\n{}", header(theme), menu_items(theme));
            if *invalid {
                out.push('\n');
                out.push_str(&theme.err("Enter a value from the list above."));
            }
            format!("{}\n{}", out, footer(theme))
        }
        Screen::AddForm => format!(
            "{}\n{}",
            header(theme),
            theme.menu("Enter the book information in three forms:")
        ),
        Screen::AddSuccess(record) => format!(
            "{}\n{}",
            theme.ok("[OK] Book added"),
            theme.dim(&record.to_string())
        ),
        Screen::AddFailed(msg) => theme.err(&format!("[ERR] Failed: {msg}")),
        Screen::DeletePrompt { retry } | Screen::UpdateIdPrompt { retry } => {
            let mut out = header(theme);
            if *retry {
                out.push('\n');
                out.push_str(&theme.err("Book id must be an integer."));
            }
            format!("{}\n{}", out, theme.menu("Enter an existing book id:"))
        }
        Screen::DeleteSuccess => theme.ok("[OK] Book deleted"),
        Screen::DeleteFailed(msg) => theme.err(&format!("[ERR] Failed: {msg}")),
        Screen::FindForm { error } => {
            let mut out = format!(
                "{}\n{}\n{}",
                header(theme),
                theme.menu("Search by filling out one of three forms:"),
                theme.menu("1. Author   2. Title   3. Year")
            );
            if let Some(msg) = error {
                out.push('\n');
                out.push_str(&theme.err(msg));
            }
            format!("{}\n{}", out, divider(theme))
        }
        Screen::FindResults(records) => {
            if records.is_empty() {
                theme.dim("Nothing found.")
            } else {
                format!("{}\n{}", theme.ok("Found:"), records_table(records))
            }
        }
        Screen::FindFailed(msg) | Screen::ListFailed(msg) => {
            theme.err(&format!("[ERR] Failed: {msg}"))
        }
        Screen::ListResults(records) => {
            if records.is_empty() {
                theme.dim("The catalog is empty.")
            } else {
                records_table(records)
            }
        }
        Screen::UpdateStatusMenu { error } => {
            let mut out = format!(
                "{}\n{}\n{}",
                header(theme),
                theme.menu("Choose the new book status:"),
                theme.menu("1. Checked out   2. Available")
            );
            if let Some(msg) = error {
                out.push('\n');
                out.push_str(&theme.err(msg));
            }
            format!("{}\n{}", out, divider(theme))
        }
        Screen::UpdateSuccess => theme.ok("[OK] Book status updated"),
        Screen::UpdateFailed(msg) => theme.err(&format!("[ERR] Failed: {msg}")),
        Screen::BackMenu => format!("{}\n{}", footer(theme), theme.menu("Make a choice:")),
        Screen::Help => format!(
            "{}\n{}\n{}",
            header(theme),
            theme.menu("Use the interactive menu with:"),
            menu_items(theme)
        ),
        Screen::Exit => theme.menu("Program exited successfully"),
    }
}
