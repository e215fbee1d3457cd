//! Book record model and field validation.
//!
//! Fields are validated at construction time; a [`Record`] never holds
//! invalid data. Each field runs its own checks in a fixed order
//! (presence, type, length, range) and reports the first violation.

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// Title length bounds, in characters.
pub const TITLE_MIN_LEN: usize = 3;
pub const TITLE_MAX_LEN: usize = 300;

/// Author length bounds, in characters.
pub const AUTHOR_MIN_LEN: usize = 3;
pub const AUTHOR_MAX_LEN: usize = 30;

/// Year digit-string length bounds.
pub const YEAR_MIN_DIGITS: usize = 1;
pub const YEAR_MAX_DIGITS: usize = 4;

/// Availability status of a book record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    #[default]
    Available,
    CheckedOut,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::Available => write!(f, "available"),
            Status::CheckedOut => write!(f, "checked out"),
        }
    }
}

/// A single catalog entry.
///
/// Serializes exactly to the backing-store schema:
/// `{"id", "title", "author", "year", "status"}` with `year` kept as a
/// digit string and `status` as the `AVAILABLE`/`CHECKED_OUT` literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Unique identifier, assigned by the store (max existing + 1)
    pub id: u64,

    /// Book title (3-300 characters)
    pub title: String,

    /// Book author (3-30 characters)
    pub author: String,

    /// Publication year as a 1-4 digit string, not in the future
    pub year: String,

    /// Availability status
    pub status: Status,
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.id, self.title, self.author, self.year, self.status
        )
    }
}

/// Raw, unvalidated input for creating a record.
#[derive(Debug, Clone)]
pub struct NewRecord {
    pub title: String,
    pub author: String,
    pub year: String,
}

impl NewRecord {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
        }
    }

    /// Validate all fields and return the canonical field values.
    ///
    /// The year is normalized through an integer parse, so `"0090"`
    /// comes back as `"90"`.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Validation` describing the first violated
    /// rule of the first failing field.
    pub fn validate(&self) -> Result<ValidFields> {
        let title = validate_title(&self.title)?;
        let author = validate_author(&self.author)?;
        let year = validate_year(&self.year, Utc::now().year())?;
        Ok(ValidFields {
            title,
            author,
            year,
        })
    }
}

/// Field values that passed validation.
#[derive(Debug, Clone)]
pub struct ValidFields {
    pub title: String,
    pub author: String,
    pub year: String,
}

impl ValidFields {
    /// Build a record from validated fields with a store-assigned id.
    ///
    /// New records always start as [`Status::Available`].
    pub fn into_record(self, id: u64) -> Record {
        Record {
            id,
            title: self.title,
            author: self.author,
            year: self.year,
            status: Status::Available,
        }
    }
}

fn validate_title(value: &str) -> Result<String> {
    validate_text_field("Title", value, TITLE_MIN_LEN, TITLE_MAX_LEN)
}

fn validate_author(value: &str) -> Result<String> {
    validate_text_field("Author", value, AUTHOR_MIN_LEN, AUTHOR_MAX_LEN)
}

fn validate_text_field(field: &str, value: &str, min: usize, max: usize) -> Result<String> {
    if value.is_empty() {
        return Err(CatalogError::Validation(format!("{field} is required")));
    }

    // Count characters, not bytes, so Cyrillic titles measure correctly.
    let len = value.chars().count();
    if len < min || len > max {
        return Err(CatalogError::Validation(format!(
            "{field} length must be between {min} and {max} characters"
        )));
    }

    Ok(value.to_string())
}

/// Validate a year value against `max_year` (the current calendar year).
///
/// Checks run in order: presence, integer parse, digit count, range.
pub fn validate_year(value: &str, max_year: i32) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CatalogError::Validation("Year is required".to_string()));
    }

    let year: i32 = trimmed
        .parse()
        .map_err(|_| CatalogError::Validation("Year must be an integer".to_string()))?;

    let canonical = year.to_string();
    if !canonical.chars().all(|c| c.is_ascii_digit())
        || canonical.len() < YEAR_MIN_DIGITS
        || canonical.len() > YEAR_MAX_DIGITS
    {
        return Err(CatalogError::Validation(format!(
            "Year must be {YEAR_MIN_DIGITS} to {YEAR_MAX_DIGITS} digits"
        )));
    }

    if year > max_year {
        return Err(CatalogError::Validation(format!(
            "Year cannot exceed the current year ({max_year})"
        )));
    }

    Ok(canonical)
}
