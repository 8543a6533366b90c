//! Shared date-field handling for edit screens.
//!
//! The backend transmits dates as `YYYY-MM-DD` strings; display formatting
//! is `DD/MM/YYYY`. [`DateField`] models the confirm/cancel lifecycle of a
//! native date picker so every edit screen shares one state machine instead
//! of re-deriving it.

use chrono::{Local, NaiveDate};
use tracing::warn;

pub const ISO_FORMAT: &str = "%Y-%m-%d";
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Parse a strict `YYYY-MM-DD` wire date. Anything else is `None`.
pub fn parse_iso(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_FORMAT).ok()
}

pub fn format_iso(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

pub fn format_display(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// One nullable date field of an edit form.
///
/// `committed` is the value the form would submit. While the picker is open,
/// edits accumulate in `pending`; `confirm` commits them, `cancel` discards
/// them and leaves `committed` untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateField {
    committed: Option<NaiveDate>,
    pending: Option<NaiveDate>,
    open: bool,
}

impl DateField {
    pub fn new(committed: Option<NaiveDate>) -> Self {
        Self {
            committed,
            pending: None,
            open: false,
        }
    }

    /// Build from a wire value. An unparsable string is logged and treated
    /// as an empty field.
    pub fn from_iso(value: &str) -> Self {
        if value.trim().is_empty() {
            return Self::new(None);
        }
        let parsed = parse_iso(value);
        if parsed.is_none() {
            warn!(value, "ignoring unparsable date from backend");
        }
        Self::new(parsed)
    }

    /// Open the picker, seeding the pending value from the committed one
    /// (or today for an empty field).
    pub fn open(&mut self) {
        self.pending = Some(self.committed.unwrap_or_else(|| Local::now().date_naive()));
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Update the in-picker selection. Ignored while the picker is closed.
    pub fn set_pending(&mut self, date: NaiveDate) {
        if self.open {
            self.pending = Some(date);
        }
    }

    /// Commit the pending selection and close the picker.
    pub fn confirm(&mut self) {
        if self.open {
            self.committed = self.pending;
            self.pending = None;
            self.open = false;
        }
    }

    /// Discard the pending selection and close the picker.
    pub fn cancel(&mut self) {
        self.pending = None;
        self.open = false;
    }

    /// Clear the committed value ("no date").
    pub fn clear(&mut self) {
        self.committed = None;
    }

    pub fn committed(&self) -> Option<NaiveDate> {
        self.committed
    }

    pub fn pending(&self) -> Option<NaiveDate> {
        self.pending
    }

    /// Wire representation of the committed value.
    pub fn iso(&self) -> Option<String> {
        self.committed.map(format_iso)
    }

    /// Locale representation of the committed value.
    pub fn display(&self) -> Option<String> {
        self.committed.map(format_display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parses_strict_iso_only() {
        assert_eq!(parse_iso("2024-03-01"), Some(date(2024, 3, 1)));
        assert_eq!(parse_iso(" 2024-03-01 "), Some(date(2024, 3, 1)));
        assert_eq!(parse_iso("01/03/2024"), None);
        assert_eq!(parse_iso("2024-13-01"), None);
        assert_eq!(parse_iso(""), None);
    }

    #[test]
    fn round_trips_through_wire_format() {
        let field = DateField::from_iso("2025-12-31");
        assert_eq!(field.iso().as_deref(), Some("2025-12-31"));
        assert_eq!(field.display().as_deref(), Some("31/12/2025"));
    }

    #[test]
    fn unparsable_wire_value_becomes_empty_field() {
        let field = DateField::from_iso("not-a-date");
        assert_eq!(field.committed(), None);
        assert_eq!(field.iso(), None);
    }

    #[test]
    fn confirm_commits_pending_selection() {
        let mut field = DateField::new(Some(date(2024, 1, 10)));
        field.open();
        assert!(field.is_open());
        assert_eq!(field.pending(), Some(date(2024, 1, 10)));

        field.set_pending(date(2024, 2, 20));
        field.confirm();
        assert!(!field.is_open());
        assert_eq!(field.committed(), Some(date(2024, 2, 20)));
        assert_eq!(field.pending(), None);
    }

    #[test]
    fn cancel_keeps_committed_value() {
        let mut field = DateField::new(Some(date(2024, 1, 10)));
        field.open();
        field.set_pending(date(2024, 2, 20));
        field.cancel();
        assert!(!field.is_open());
        assert_eq!(field.committed(), Some(date(2024, 1, 10)));
    }

    #[test]
    fn set_pending_is_ignored_while_closed() {
        let mut field = DateField::new(None);
        field.set_pending(date(2024, 2, 20));
        field.confirm();
        assert_eq!(field.committed(), None);
    }

    #[test]
    fn open_seeds_pending_for_empty_field() {
        let mut field = DateField::new(None);
        field.open();
        assert!(field.pending().is_some());
    }

    #[test]
    fn clear_empties_the_committed_value() {
        let mut field = DateField::new(Some(date(2024, 1, 10)));
        field.clear();
        assert_eq!(field.committed(), None);
        assert_eq!(field.display(), None);
    }
}
