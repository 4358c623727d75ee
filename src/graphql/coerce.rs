//! Untyped resolver arguments to `DeveloperInput`.
//!
//! Scalars degrade: a missing, null or wrong-typed `id`, and a missing, null,
//! empty or wrong-typed `first_name`, `last_name` or `github_url`, become `None`.
//! `stack` follows GraphQL list input coercion: a single value stands for a
//! one-element list. Elements are checked in order and the first non-string
//! one is reported as a `TypeError`.

use crate::error::AppError;
use crate::model::DeveloperInput;
use serde_json::{Map, Value};

pub fn coerce_developer(args: &Map<String, Value>) -> Result<DeveloperInput, AppError> {
    Ok(DeveloperInput {
        id: args.get("id").and_then(Value::as_i64),
        first_name: present_string(args, "first_name"),
        last_name: present_string(args, "last_name"),
        github_url: present_string(args, "github_url"),
        stack: coerce_stack(args.get("stack"))?,
    })
}

fn present_string(args: &Map<String, Value>, key: &str) -> Option<String> {
    match args.get(key) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}

/// Absent, null, object or an empty list yields `None`.
fn coerce_stack(raw: Option<&Value>) -> Result<Option<Vec<String>>, AppError> {
    let items = match raw {
        Some(Value::Array(items)) => items.as_slice(),
        Some(single @ (Value::String(_) | Value::Number(_) | Value::Bool(_))) => std::slice::from_ref(single),
        _ => return Ok(None),
    };
    let stack = items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(s) => Ok(s.clone()),
            other => Err(AppError::Type {
                field: "stack",
                index,
                found: kind(other),
            }),
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Some(stack).filter(|s| !s.is_empty()))
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
