//! Builds parameterized SELECT, INSERT and partial UPDATE for the developers table.

use crate::error::AppError;
use crate::model::{DeveloperInput, COLUMNS};
use crate::service::validate_update;
use crate::sql::BindValue;

/// Schema-qualified table the statements run against. Names come from settings only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    pub schema: String,
    pub name: String,
}

impl Default for Table {
    fn default() -> Self {
        Table {
            schema: "public".into(),
            name: "developers".into(),
        }
    }
}

impl Table {
    /// Full qualified table name.
    pub fn qualified(&self) -> String {
        format!("{}.{}", quoted(&self.schema), quoted(&self.name))
    }
}

/// Quote identifier for PostgreSQL (safe: only from settings).
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: BindValue) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

fn select_column_list() -> String {
    COLUMNS.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ")
}

/// SELECT every row, ordered by id.
pub fn select_all(table: &Table) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list(),
        table.qualified(),
        quoted("id")
    );
    q
}

/// SELECT by primary key.
pub fn select_by_id(table: &Table, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(BindValue::BigInt(id));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ${}",
        select_column_list(),
        table.qualified(),
        quoted("id"),
        n
    );
    q
}

/// INSERT a new row. Any id on the input is ignored; the datastore assigns it.
/// Missing github_url and stack are stored as empty values.
pub fn insert(table: &Table, input: &DeveloperInput) -> QueryBuf {
    let mut q = QueryBuf::new();
    let values = [
        ("first_name", BindValue::Text(input.first_name.clone().unwrap_or_default())),
        ("last_name", BindValue::Text(input.last_name.clone().unwrap_or_default())),
        ("github_url", BindValue::Text(input.github_url.clone().unwrap_or_default())),
        ("stack", BindValue::TextArray(input.stack.clone().unwrap_or_default())),
    ];
    let mut cols = Vec::with_capacity(values.len());
    let mut placeholders = Vec::with_capacity(values.len());
    for (name, value) in values {
        let n = q.push_param(value);
        cols.push(quoted(name));
        placeholders.push(format!("${}", n));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        table.qualified(),
        cols.join(", "),
        placeholders.join(", "),
        select_column_list()
    );
    q
}

/// UPDATE by id: SET only the fields present on the input, RETURNING the full row.
/// SET parameters are numbered in column order and the id is always the last parameter.
/// Fails without building a statement when the id is unset or nothing is present.
pub fn update(table: &Table, input: &DeveloperInput) -> Result<QueryBuf, AppError> {
    let id = validate_update(input)?;
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    for (name, value) in input.present_fields() {
        let n = q.push_param(value);
        sets.push(format!("{} = ${}", quoted(name), n));
    }
    let id_param = q.push_param(BindValue::BigInt(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ${} RETURNING {}",
        table.qualified(),
        sets.join(", "),
        quoted("id"),
        id_param,
        select_column_list()
    );
    Ok(q)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RETURNING: &str = r#""id", "first_name", "last_name", "github_url", "stack""#;

    #[test]
    fn select_all_orders_by_id() {
        let q = select_all(&Table::default());
        assert_eq!(
            q.sql,
            format!(r#"SELECT {} FROM "public"."developers" ORDER BY "id""#, RETURNING)
        );
        assert!(q.params.is_empty());
    }

    #[test]
    fn select_by_id_binds_id() {
        let q = select_by_id(&Table::default(), 7);
        assert!(q.sql.ends_with(r#"WHERE "id" = $1"#));
        assert_eq!(q.params, vec![BindValue::BigInt(7)]);
    }

    #[test]
    fn insert_ignores_client_id_and_defaults_optional_columns() {
        let input = DeveloperInput {
            id: Some(42),
            first_name: Some("Ada".into()),
            last_name: Some("Lovelace".into()),
            ..Default::default()
        };
        let q = insert(&Table::default(), &input);
        assert_eq!(
            q.sql,
            format!(
                r#"INSERT INTO "public"."developers" ("first_name", "last_name", "github_url", "stack") VALUES ($1, $2, $3, $4) RETURNING {}"#,
                RETURNING
            )
        );
        assert_eq!(
            q.params,
            vec![
                BindValue::Text("Ada".into()),
                BindValue::Text("Lovelace".into()),
                BindValue::Text(String::new()),
                BindValue::TextArray(Vec::new()),
            ]
        );
    }

    #[test]
    fn update_sets_only_present_fields() {
        let input = DeveloperInput {
            id: Some(1),
            last_name: Some("Byron".into()),
            ..Default::default()
        };
        let q = update(&Table::default(), &input).unwrap();
        assert_eq!(
            q.sql,
            format!(
                r#"UPDATE "public"."developers" SET "last_name" = $1 WHERE "id" = $2 RETURNING {}"#,
                RETURNING
            )
        );
        assert_eq!(q.params, vec![BindValue::Text("Byron".into()), BindValue::BigInt(1)]);
    }

    #[test]
    fn update_numbers_parameters_in_column_order() {
        let input = DeveloperInput {
            id: Some(5),
            first_name: Some("Ada".into()),
            github_url: Some("https://github.com/ada".into()),
            stack: Some(vec!["go".into(), "rust".into()]),
            ..Default::default()
        };
        let q = update(&Table::default(), &input).unwrap();
        assert!(q
            .sql
            .contains(r#"SET "first_name" = $1, "github_url" = $2, "stack" = $3 WHERE "id" = $4"#));
        assert_eq!(q.params.len(), 4);
        assert_eq!(q.params[3], BindValue::BigInt(5));
    }

    #[test]
    fn update_never_interpolates_values() {
        let input = DeveloperInput {
            id: Some(1),
            first_name: Some("'; DROP TABLE developers; --".into()),
            ..Default::default()
        };
        let q = update(&Table::default(), &input).unwrap();
        assert!(!q.sql.contains("DROP TABLE"));
        assert_eq!(q.params[0], BindValue::Text("'; DROP TABLE developers; --".into()));
    }

    #[test]
    fn update_without_id_is_rejected() {
        let input = DeveloperInput {
            first_name: Some("Ada".into()),
            ..Default::default()
        };
        let err = update(&Table::default(), &input).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn update_without_fields_is_rejected() {
        let input = DeveloperInput {
            id: Some(1),
            ..Default::default()
        };
        let err = update(&Table::default(), &input).unwrap_err();
        assert_eq!(err.to_string(), "validation: at least one field must be updated");
    }

    #[test]
    fn identifiers_are_quoted() {
        let table = Table {
            schema: "tenant".into(),
            name: "dev\"s".into(),
        };
        assert_eq!(table.qualified(), r#""tenant"."dev""s""#);
    }
}
