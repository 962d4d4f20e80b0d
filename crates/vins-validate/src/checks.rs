//! Column-level conformance checks.
//!
//! These are pure table-vs-schema predicates; the orchestration in
//! [`crate::validation`] decides how their results combine into a report.

use tracing::debug;

use vins_model::{DataSchema, RecordTable};

/// True iff the table has exactly the schema's declared column count.
pub fn column_count_matches(table: &RecordTable, schema: &DataSchema) -> bool {
    let matches = table.column_count() == schema.expected_column_count();
    debug!(
        actual = table.column_count(),
        expected = schema.expected_column_count(),
        matches,
        "column count check"
    );
    matches
}

/// Names from `required` that are absent from the table, in schema order.
pub fn missing_required_columns(table: &RecordTable, required: &[String]) -> Vec<String> {
    required
        .iter()
        .filter(|name| !table.has_column(name))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vins_model::ColumnSpec;

    fn schema(names: &[&str]) -> DataSchema {
        DataSchema {
            columns: names
                .iter()
                .map(|name| ColumnSpec {
                    name: (*name).to_string(),
                    dtype: "int".to_string(),
                })
                .collect(),
            numerical_columns: Vec::new(),
            categorical_columns: Vec::new(),
        }
    }

    fn table(names: &[&str]) -> RecordTable {
        RecordTable::new(names.iter().map(|name| (*name).to_string()).collect())
    }

    #[test]
    fn count_check_is_pure_equality() {
        let ten = table(&["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]);
        assert!(!column_count_matches(&ten, &schema(&["a; truncated"])));
        assert!(column_count_matches(
            &table(&["a", "b"]),
            &schema(&["a", "b"])
        ));
    }

    #[test]
    fn reports_exactly_the_absent_names() {
        let present = table(&["age", "premium"]);
        let required = vec!["age".to_string(), "premium".to_string()];
        assert!(missing_required_columns(&present, &required).is_empty());

        let partial = table(&["age"]);
        assert_eq!(
            missing_required_columns(&partial, &required),
            vec!["premium".to_string()]
        );
    }
}
