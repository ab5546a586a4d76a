use serde::Deserialize;
use snafu::ResultExt;

use crate::Result;
use crate::error::ConfigParseSnafu;
use crate::field::FieldId;

/// Where the setup form lives on the page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub form_id: String,
    pub fields: FieldIds,
}

/// Element ids of the setup form inputs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FieldIds {
    pub admin: String,
    pub pass: String,
    pub verify: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            form_id: String::from("setup"),
            fields: FieldIds::default(),
        }
    }
}

impl Default for FieldIds {
    fn default() -> Self {
        Self {
            admin: FieldId::Admin.name().to_string(),
            pass: FieldId::Pass.name().to_string(),
            verify: FieldId::Verify.name().to_string(),
        }
    }
}

impl FormConfig {
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str::<FormConfig>(contents).context(ConfigParseSnafu)
    }

    pub fn element_id(&self, field: FieldId) -> &str {
        match field {
            FieldId::Admin => &self.fields.admin,
            FieldId::Pass => &self.fields.pass,
            FieldId::Verify => &self.fields.verify,
        }
    }
}
