use validator::ValidationErrors;

use crate::Error;
use crate::field::FieldId;

/// Picks the failure the user is told about, checking fields in form order.
pub fn first_error(errors: &ValidationErrors) -> Option<Error> {
    let field_errors = errors.field_errors();

    FieldId::ALL
        .into_iter()
        .find(|field| field_errors.contains_key(field.name()))
        .map(|field| match field {
            FieldId::Admin => Error::AdminRequired,
            FieldId::Pass => Error::PasswordRequired,
            FieldId::Verify => Error::PasswordMismatch,
        })
}
