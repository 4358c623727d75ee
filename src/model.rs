//! Developer record and the typed input produced by argument coercion.

use crate::sql::BindValue;

/// Column names in SELECT / RETURNING order.
pub const COLUMNS: &[&str] = &["id", "first_name", "last_name", "github_url", "stack"];

/// One row of the developers table.
#[derive(Clone, Debug, PartialEq, Eq, sqlx::FromRow)]
pub struct Developer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub github_url: String,
    pub stack: Vec<String>,
}

/// Input for create and update. `None` means the argument was absent, null, empty,
/// or of the wrong scalar type; only `Some` fields take part in an update.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DeveloperInput {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub github_url: Option<String>,
    pub stack: Option<Vec<String>>,
}

impl DeveloperInput {
    /// Updatable columns that carry a value, in column order.
    pub fn present_fields(&self) -> Vec<(&'static str, BindValue)> {
        let mut fields = Vec::new();
        if let Some(v) = &self.first_name {
            fields.push(("first_name", BindValue::Text(v.clone())));
        }
        if let Some(v) = &self.last_name {
            fields.push(("last_name", BindValue::Text(v.clone())));
        }
        if let Some(v) = &self.github_url {
            fields.push(("github_url", BindValue::Text(v.clone())));
        }
        if let Some(v) = &self.stack {
            fields.push(("stack", BindValue::TextArray(v.clone())));
        }
        fields
    }
}
