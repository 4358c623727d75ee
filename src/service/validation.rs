//! Input rules checked before any statement is issued.

use crate::error::AppError;
use crate::model::DeveloperInput;

/// Create needs both names.
pub fn validate_create(input: &DeveloperInput) -> Result<(), AppError> {
    for (col, val) in [("first_name", &input.first_name), ("last_name", &input.last_name)] {
        if val.is_none() {
            return Err(AppError::Validation(format!("{} is required", col)));
        }
    }
    Ok(())
}

/// Update needs an id and at least one present field. Returns the id.
pub fn validate_update(input: &DeveloperInput) -> Result<i64, AppError> {
    let id = input
        .id
        .filter(|id| *id != 0)
        .ok_or_else(|| AppError::Validation("developer id is required".into()))?;
    if input.present_fields().is_empty() {
        return Err(AppError::Validation("at least one field must be updated".into()));
    }
    Ok(id)
}
