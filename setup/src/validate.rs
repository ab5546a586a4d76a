use tracing::{debug, warn};
use validator::Validate;

use crate::alert::Alert;
use crate::dto::SetupFormDto;
use crate::error::{AdminRequiredSnafu, PasswordRequiredSnafu};
use crate::field::{FieldId, FormFields};
use crate::validators::{first_error, required};
use crate::{Error, Result};

/// Runs the setup form checks in order and returns the first failure.
///
/// The admin field is trimmed and the trimmed value is written back to the
/// form before anything else is checked. The password and verify values are
/// compared exactly as entered. A field is only read once every check before
/// it has passed.
pub fn check_form(fields: &mut impl FormFields) -> Result<SetupFormDto> {
    let admin = fields.value(FieldId::Admin)?;
    let admin = trim(&admin);
    fields.set_value(FieldId::Admin, admin)?;

    if required(admin).is_err() {
        debug!("Setup form rejected: {}", FieldId::Admin);
        return AdminRequiredSnafu.fail();
    }

    let pass = fields.value(FieldId::Pass)?;
    if required(&pass).is_err() {
        debug!("Setup form rejected: {}", FieldId::Pass);
        return PasswordRequiredSnafu.fail();
    }

    let data = SetupFormDto {
        admin: admin.to_string(),
        pass,
        verify: fields.value(FieldId::Verify)?,
    };

    if let Err(errors) = data.validate() {
        let err = first_error(&errors).unwrap_or_else(|| Error::from("Invalid setup form"));
        debug!("Setup form rejected: {}", err);
        return Err(err);
    }

    debug!("Setup form accepted");
    Ok(data)
}

/// Checks the setup form and tells the user about the first failure.
///
/// Returns whether the form may be submitted. Errors that are not about the
/// user's input, such as a missing field, also block submission.
pub fn validate_form(fields: &mut impl FormFields, alert: &impl Alert) -> bool {
    match check_form(fields) {
        Ok(_) => true,
        Err(err) => {
            if !err.is_user_error() {
                warn!("Setup form cannot be checked: {}", err);
            }
            alert.alert(&err.to_string());
            false
        }
    }
}

// Same character set as a browser's String.prototype.trim, which keeps NEL
fn trim(value: &str) -> &str {
    value.trim_matches(|c: char| (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::RecordedAlerts;
    use crate::form::FieldMap;

    #[test]
    fn test_blank_admin() {
        let mut fields = FieldMap::new(" ", "x", "x");
        let alerts = RecordedAlerts::new();

        assert!(!validate_form(&mut fields, &alerts));
        assert_eq!(fields.get(FieldId::Admin), Some(""));
        assert_eq!(alerts.messages(), vec!["Please enter an admin username."]);
    }

    #[test]
    fn test_empty_password() {
        let mut fields = FieldMap::new("bob", "", "");
        let alerts = RecordedAlerts::new();

        assert!(!validate_form(&mut fields, &alerts));
        assert_eq!(alerts.messages(), vec!["Please enter a password."]);
    }

    #[test]
    fn test_password_mismatch() {
        let mut fields = FieldMap::new("bob", "secret", "secrt");
        let alerts = RecordedAlerts::new();

        assert!(!validate_form(&mut fields, &alerts));
        assert_eq!(alerts.messages(), vec!["Password does not match verify."]);
    }

    #[test]
    fn test_valid_form_trims_admin() {
        let mut fields = FieldMap::new("  bob  ", "secret", "secret");
        let alerts = RecordedAlerts::new();

        assert!(validate_form(&mut fields, &alerts));
        assert_eq!(fields.get(FieldId::Admin), Some("bob"));
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_validate_twice() {
        let mut fields = FieldMap::new("\tbob\n", "secret", "secret");
        let alerts = RecordedAlerts::new();

        assert!(validate_form(&mut fields, &alerts));
        assert!(validate_form(&mut fields, &alerts));
        assert_eq!(fields.get(FieldId::Admin), Some("bob"));
        assert_eq!(fields.get(FieldId::Pass), Some("secret"));
        assert_eq!(fields.get(FieldId::Verify), Some("secret"));
        assert!(alerts.is_empty());
    }

    #[test]
    fn test_only_admin_is_trimmed() {
        let mut fields = FieldMap::new("bob", " secret ", "secret");
        let err = check_form(&mut fields).unwrap_err();
        assert!(matches!(err, Error::PasswordMismatch));
        assert_eq!(fields.get(FieldId::Pass), Some(" secret "));
    }

    #[test]
    fn test_check_form_returns_values() {
        let mut fields = FieldMap::new(" admin ", "p@ss word", "p@ss word");
        let data = check_form(&mut fields).unwrap();
        assert_eq!(data.admin, "admin");
        assert_eq!(data.pass, "p@ss word");
        assert_eq!(data.verify, "p@ss word");
    }

    #[test]
    fn test_admin_checked_before_other_fields() {
        // Later fields are not read once the admin check fails
        let mut fields = FieldMap::default().with(FieldId::Admin, "   ");
        let err = check_form(&mut fields).unwrap_err();
        assert!(matches!(err, Error::AdminRequired));
    }

    #[test]
    fn test_password_checked_before_verify() {
        // No verify field on the form, the empty password is reported
        let mut fields = FieldMap::default()
            .with(FieldId::Admin, "bob")
            .with(FieldId::Pass, "");
        let alerts = RecordedAlerts::new();

        assert!(!validate_form(&mut fields, &alerts));
        assert_eq!(alerts.messages(), vec!["Please enter a password."]);

        let err = check_form(&mut fields).unwrap_err();
        assert!(matches!(err, Error::PasswordRequired));
    }

    #[test]
    fn test_missing_field_blocks_submit() {
        let mut fields = FieldMap::default()
            .with(FieldId::Admin, "bob")
            .with(FieldId::Pass, "secret");
        let alerts = RecordedAlerts::new();

        assert!(!validate_form(&mut fields, &alerts));
        assert_eq!(alerts.last().as_deref(), Some("Missing form field: verify"));
    }

    #[test]
    fn test_trim_matches_browser() {
        assert_eq!(trim("\u{feff} bob\u{a0}"), "bob");
        assert_eq!(trim("b o b"), "b o b");
        assert_eq!(trim(""), "");

        // NEL is not trimmed by browsers
        assert_eq!(trim("\u{85}bob"), "\u{85}bob");
    }

    #[test]
    fn test_nel_admin_is_not_blank() {
        let mut fields = FieldMap::new("\u{85}", "secret", "secret");
        let alerts = RecordedAlerts::new();

        assert!(validate_form(&mut fields, &alerts));
        assert_eq!(fields.get(FieldId::Admin), Some("\u{85}"));
        assert!(alerts.is_empty());
    }
}
