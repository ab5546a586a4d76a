mod alert;
mod config;
mod error;
mod field;
mod form;
mod validate;

pub mod dto;
pub mod validators;

// Re-exports
pub use alert::{Alert, RecordedAlerts};
pub use config::{FieldIds, FormConfig};
pub use error::{Error, Result};
pub use field::{FieldId, FormFields};
pub use form::FieldMap;
pub use validate::{check_form, validate_form};
