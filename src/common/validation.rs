use crate::common::error::{PayloadResult, PushError};

/// Rejects empty or whitespace-only string arguments.
pub fn require_non_blank(field: &str, value: &str) -> PayloadResult<()> {
    if value.trim().is_empty() {
        return Err(PushError::invalid_argument(format!(
            "{} cannot be blank",
            field
        )));
    }
    Ok(())
}
