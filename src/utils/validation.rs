use crate::errors::AppError;
use validator::Validate;

/// Runs the payload's validation rules and names every failing field.
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload.validate().map_err(|err| {
        let mut fields: Vec<&str> = err.field_errors().keys().copied().collect();
        fields.sort_unstable();
        AppError::Validation(format!(
            "Please fill in all required fields: {}",
            fields.join(", ")
        ))
    })
}
