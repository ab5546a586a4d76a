use snafu::OptionExt;
use std::collections::HashMap;

use crate::Result;
use crate::error::MissingFieldSnafu;
use crate::field::{FieldId, FormFields};

/// In-memory form, for hosts without a page to read from.
#[derive(Debug, Clone, Default)]
pub struct FieldMap {
    values: HashMap<FieldId, String>,
}

impl FieldMap {
    pub fn new(admin: &str, pass: &str, verify: &str) -> Self {
        Self::default()
            .with(FieldId::Admin, admin)
            .with(FieldId::Pass, pass)
            .with(FieldId::Verify, verify)
    }

    pub fn with(mut self, field: FieldId, value: &str) -> Self {
        self.values.insert(field, value.to_string());
        self
    }

    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.values.get(&field).map(|v| v.as_str())
    }

    pub fn remove(&mut self, field: FieldId) -> Option<String> {
        self.values.remove(&field)
    }
}

impl FormFields for FieldMap {
    fn value(&self, field: FieldId) -> Result<String> {
        let value = self.values.get(&field).context(MissingFieldSnafu {
            id: field.name().to_string(),
        })?;
        Ok(value.clone())
    }

    fn set_value(&mut self, field: FieldId, value: &str) -> Result<()> {
        let current = self.values.get_mut(&field).context(MissingFieldSnafu {
            id: field.name().to_string(),
        })?;
        *current = value.to_string();
        Ok(())
    }
}
