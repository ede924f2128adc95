//! Generic conjunctive query model for the download log.
//!
//! The CMS-style query builder is reduced to the capability set this layer
//! actually needs: equality, negation, range bounds, AND-combination, and a
//! named default ordering. Constraints reference columns by name and are
//! validated at construction time; rendering them into concrete SQL is the
//! adapter's job (`securedl-db`), which keeps this crate free of storage
//! types.

use thiserror::Error;

/// Column names of the `download_log` table.
///
/// Constraint constructors accept any of these; everything else is rejected
/// with [`QueryError::UnknownField`].
pub mod columns {
    pub const TSTAMP: &str = "tstamp";
    pub const FILE_SIZE: &str = "file_size";
    pub const FILE_PATH: &str = "file_path";
    pub const FILE_TYPE: &str = "file_type";
    pub const FILE_NAME: &str = "file_name";
    pub const MEDIA_TYPE: &str = "media_type";
    pub const USER: &str = "user";
    pub const PAGE: &str = "page";
    pub const FILE_ID: &str = "file_id";

    /// All queryable columns, in schema order.
    pub const ALL: &[&str] = &[
        TSTAMP, FILE_SIZE, FILE_PATH, FILE_TYPE, FILE_NAME, MEDIA_TYPE, USER, PAGE, FILE_ID,
    ];
}

/// Errors raised while assembling a query.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The constraint referenced a column the log table does not have.
    #[error("unknown field: {0}")]
    UnknownField(String),
}

/// A bind value for a constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// SQL NULL; `Equals` against it means "field is null".
    Null,
    Int(i64),
    Text(String),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

/// A single filter condition over the log table.
///
/// Constructed through the validating associated functions; the adapter
/// renders each variant into its storage dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// `field = value`, or "field is null" when the value is [`Value::Null`].
    Equals {
        field: &'static str,
        value: Value,
    },
    /// `field >= value`.
    GreaterOrEqual {
        field: &'static str,
        value: Value,
    },
    /// `field <= value`.
    LessOrEqual {
        field: &'static str,
        value: Value,
    },
    /// Logical negation of the inner constraint.
    Not(Box<Constraint>),
    /// Conjunction of all inner constraints.
    And(Vec<Constraint>),
}

impl Constraint {
    /// Equality constraint on `field`.
    pub fn equals(field: &str, value: impl Into<Value>) -> Result<Self, QueryError> {
        Ok(Self::Equals {
            field: check_field(field)?,
            value: value.into(),
        })
    }

    /// Lower-bound constraint on `field` (inclusive).
    pub fn greater_or_equal(field: &str, value: impl Into<Value>) -> Result<Self, QueryError> {
        Ok(Self::GreaterOrEqual {
            field: check_field(field)?,
            value: value.into(),
        })
    }

    /// Upper-bound constraint on `field` (inclusive).
    pub fn less_or_equal(field: &str, value: impl Into<Value>) -> Result<Self, QueryError> {
        Ok(Self::LessOrEqual {
            field: check_field(field)?,
            value: value.into(),
        })
    }

    /// Logical negation of this constraint.
    #[must_use]
    pub fn negated(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// AND-combination of `constraints`.
    ///
    /// Returns `None` for an empty list; a single constraint is returned
    /// as-is rather than wrapped.
    pub fn and(mut constraints: Vec<Self>) -> Option<Self> {
        match constraints.len() {
            0 => None,
            1 => Some(constraints.remove(0)),
            _ => Some(Self::And(constraints)),
        }
    }
}

/// Resolve `field` to its canonical column name.
fn check_field(field: &str) -> Result<&'static str, QueryError> {
    columns::ALL
        .iter()
        .find(|column| **column == field)
        .copied()
        .ok_or_else(|| QueryError::UnknownField(field.to_owned()))
}

/// Sort direction of an [`Ordering`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Ordering by a named column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ordering {
    pub field: &'static str,
    pub direction: Direction,
}

impl Ordering {
    /// Descending ordering on `field`.
    pub fn descending(field: &str) -> Result<Self, QueryError> {
        Ok(Self {
            field: check_field(field)?,
            direction: Direction::Descending,
        })
    }

    /// Ascending ordering on `field`.
    pub fn ascending(field: &str) -> Result<Self, QueryError> {
        Ok(Self {
            field: check_field(field)?,
            direction: Direction::Ascending,
        })
    }
}

/// A query over the download log: an optional root constraint plus ordering.
///
/// The default query matches every row, newest first. The ordering applies
/// whether or not a constraint is attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQuery {
    pub constraint: Option<Constraint>,
    pub order_by: Ordering,
}

impl Default for LogQuery {
    fn default() -> Self {
        Self {
            constraint: None,
            order_by: Ordering {
                field: columns::TSTAMP,
                direction: Direction::Descending,
            },
        }
    }
}

impl LogQuery {
    /// Restrict the query to rows matching all of `constraints`.
    ///
    /// An empty list leaves the query unconstrained.
    pub fn matching(&mut self, constraints: Vec<Constraint>) {
        self.constraint = Constraint::and(constraints);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_field_is_rejected() {
        let err = Constraint::equals("tx_weird_column", 1).unwrap_err();
        assert!(matches!(err, QueryError::UnknownField(field) if field == "tx_weird_column"));
    }

    #[test]
    fn known_fields_resolve_to_canonical_names() {
        let constraint = Constraint::equals(columns::PAGE, 3).unwrap();
        assert_eq!(
            constraint,
            Constraint::Equals {
                field: "page",
                value: Value::Int(3),
            }
        );
    }

    #[test]
    fn and_of_nothing_is_no_constraint() {
        assert_eq!(Constraint::and(Vec::new()), None);
    }

    #[test]
    fn and_of_one_is_the_constraint_itself() {
        let constraint = Constraint::equals(columns::PAGE, 3).unwrap();
        assert_eq!(Constraint::and(vec![constraint.clone()]), Some(constraint));
    }

    #[test]
    fn default_query_orders_newest_first() {
        let query = LogQuery::default();
        assert!(query.constraint.is_none());
        assert_eq!(query.order_by.field, columns::TSTAMP);
        assert_eq!(query.order_by.direction, Direction::Descending);
    }

    #[test]
    fn matching_combines_with_and() {
        let mut query = LogQuery::default();
        query.matching(vec![
            Constraint::equals(columns::PAGE, 3).unwrap(),
            Constraint::greater_or_equal(columns::TSTAMP, 100).unwrap(),
        ]);
        assert!(matches!(query.constraint, Some(Constraint::And(ref parts)) if parts.len() == 2));
    }

    #[test]
    fn matching_with_empty_list_leaves_query_unconstrained() {
        let mut query = LogQuery::default();
        query.matching(Vec::new());
        assert!(query.constraint.is_none());
        assert_eq!(query.order_by.direction, Direction::Descending);
    }
}
