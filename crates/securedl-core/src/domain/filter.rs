//! Operator-facing filter for the download log listing.

use serde::{Deserialize, Serialize};

use crate::query::{Constraint, QueryError, Value, columns};

/// Which kind of visitor performed the download.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserType {
    /// No restriction.
    #[default]
    Any,
    /// Only downloads by logged-in users.
    LoggedOn,
    /// Only anonymous downloads.
    LoggedOff,
}

/// Filter values for the log listing.
///
/// Request-scoped, never persisted. Unset fields use the sentinel
/// conventions of the backend module that produces them: empty or `"0"`
/// strings for the file type, `0` for ids, `None` for the time bounds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogFilter {
    /// Selected file type; `""` and `"0"` mean no restriction.
    pub file_type: String,
    /// Restriction on the visitor kind.
    pub user_type: UserType,
    /// Specific user id; `0` means unset.
    pub user_id: i64,
    /// Lower bound on the entry timestamp, unix seconds.
    pub from: Option<i64>,
    /// Upper bound on the entry timestamp, unix seconds.
    pub till: Option<i64>,
    /// Page context; `0` means unset.
    pub page_id: i64,
}

impl LogFilter {
    /// Translate the set fields into a conjunction of constraints.
    ///
    /// Only fields that are set per the sentinel conventions contribute a
    /// constraint. The user-type and specific-user constraints can coexist
    /// even when they overlap; both are kept.
    pub fn constraints(&self) -> Result<Vec<Constraint>, QueryError> {
        let mut constraints = Vec::new();

        // File type. The selector lists media types, so it matches the
        // media_type column.
        if !self.file_type.is_empty() && self.file_type != "0" {
            constraints.push(Constraint::equals(
                columns::MEDIA_TYPE,
                self.file_type.as_str(),
            )?);
        }

        // User type
        match self.user_type {
            UserType::LoggedOn => {
                constraints.push(Constraint::equals(columns::USER, Value::Null)?.negated());
            }
            UserType::LoggedOff => {
                constraints.push(Constraint::equals(columns::USER, Value::Null)?);
            }
            UserType::Any => {}
        }

        // Specific user
        if self.user_id != 0 {
            constraints.push(Constraint::equals(columns::USER, self.user_id)?);
        }

        // Timeframe. Bounds pass through unvalidated; an inverted range
        // simply matches nothing.
        if let Some(from) = self.from {
            constraints.push(Constraint::greater_or_equal(columns::TSTAMP, from)?);
        }
        if let Some(till) = self.till {
            constraints.push(Constraint::less_or_equal(columns::TSTAMP, till)?);
        }

        // Page
        if self.page_id != 0 {
            constraints.push(Constraint::equals(columns::PAGE, self.page_id)?);
        }

        Ok(constraints)
    }
}
