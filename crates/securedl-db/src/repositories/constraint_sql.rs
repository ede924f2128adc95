//! Rendering of generic constraints into `SQLite` WHERE fragments.

use securedl_core::query::{Constraint, Value};

/// Render `constraint` into a WHERE fragment plus its bind values, in order.
///
/// Column names come from the validated column set in `securedl-core`, never
/// from user input, so interpolating them is safe.
pub fn where_clause(constraint: &Constraint) -> (String, Vec<Value>) {
    let mut sql = String::new();
    let mut binds = Vec::new();
    render(constraint, &mut sql, &mut binds);
    (sql, binds)
}

fn render(constraint: &Constraint, sql: &mut String, binds: &mut Vec<Value>) {
    match constraint {
        Constraint::Equals { field, value } => {
            sql.push_str(field);
            if *value == Value::Null {
                sql.push_str(" IS NULL");
            } else {
                sql.push_str(" = ?");
                binds.push(value.clone());
            }
        }
        Constraint::GreaterOrEqual { field, value } => {
            sql.push_str(field);
            sql.push_str(" >= ?");
            binds.push(value.clone());
        }
        Constraint::LessOrEqual { field, value } => {
            sql.push_str(field);
            sql.push_str(" <= ?");
            binds.push(value.clone());
        }
        Constraint::Not(inner) => {
            sql.push_str("NOT (");
            render(inner, sql, binds);
            sql.push(')');
        }
        Constraint::And(parts) => {
            sql.push('(');
            for (i, part) in parts.iter().enumerate() {
                if i > 0 {
                    sql.push_str(" AND ");
                }
                render(part, sql, binds);
            }
            sql.push(')');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use securedl_core::query::columns;

    #[test]
    fn equals_null_renders_is_null() {
        let constraint = Constraint::equals(columns::USER, Value::Null).unwrap();
        let (sql, binds) = where_clause(&constraint);
        assert_eq!(sql, "user IS NULL");
        assert!(binds.is_empty());
    }

    #[test]
    fn negation_wraps_the_inner_fragment() {
        let constraint = Constraint::equals(columns::USER, Value::Null)
            .unwrap()
            .negated();
        let (sql, binds) = where_clause(&constraint);
        assert_eq!(sql, "NOT (user IS NULL)");
        assert!(binds.is_empty());
    }

    #[test]
    fn conjunction_joins_with_and_in_bind_order() {
        let constraint = Constraint::and(vec![
            Constraint::greater_or_equal(columns::TSTAMP, 100).unwrap(),
            Constraint::less_or_equal(columns::TSTAMP, 200).unwrap(),
            Constraint::equals(columns::PAGE, 3).unwrap(),
        ])
        .unwrap();
        let (sql, binds) = where_clause(&constraint);
        assert_eq!(sql, "(tstamp >= ? AND tstamp <= ? AND page = ?)");
        assert_eq!(
            binds,
            vec![Value::Int(100), Value::Int(200), Value::Int(3)]
        );
    }

    #[test]
    fn text_values_bind_as_placeholders() {
        let constraint = Constraint::equals(columns::MEDIA_TYPE, "application/pdf").unwrap();
        let (sql, binds) = where_clause(&constraint);
        assert_eq!(sql, "media_type = ?");
        assert_eq!(binds, vec![Value::Text("application/pdf".to_owned())]);
    }
}
