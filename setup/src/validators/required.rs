use core::result::Result;
use validator::ValidationError;

pub fn required(value: &str) -> Result<(), ValidationError> {
    match value.is_empty() {
        true => Err(ValidationError::new("required")),
        false => Ok(()),
    }
}
