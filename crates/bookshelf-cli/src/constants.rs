//! Constants used throughout the CLI.

/// Exit codes for the interactive session.
///
/// - 0: user selected exit from the menu
/// - 1: interrupt during an input wait, or an unhandled error
pub mod exit_codes {
    /// Normal, user-initiated exit.
    pub const SUCCESS: i32 = 0;

    /// Interrupt or unhandled error.
    pub const FAILURE: i32 = 1;
}
