use core::fmt;

use crate::Result;

/// The setup form inputs, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Admin,
    Pass,
    Verify,
}

impl FieldId {
    pub const ALL: [FieldId; 3] = [FieldId::Admin, FieldId::Pass, FieldId::Verify];

    /// Field name as used by the form payload and the default element ids.
    pub fn name(&self) -> &'static str {
        match self {
            FieldId::Admin => "admin",
            FieldId::Pass => "pass",
            FieldId::Verify => "verify",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Read/write access to the text value of the setup form inputs.
pub trait FormFields {
    fn value(&self, field: FieldId) -> Result<String>;

    fn set_value(&mut self, field: FieldId, value: &str) -> Result<()>;
}
