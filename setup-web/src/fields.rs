use setup::{FieldId, FormConfig, FormFields};
use tracing::warn;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlInputElement};

/// Setup form inputs read straight from the page.
pub struct DocumentFields {
    document: Document,
    config: FormConfig,
}

impl DocumentFields {
    pub fn new(document: Document, config: FormConfig) -> Self {
        Self { document, config }
    }

    fn input(&self, field: FieldId) -> setup::Result<HtmlInputElement> {
        let id = self.config.element_id(field);
        let Some(element) = self.document.get_element_by_id(id) else {
            return Err(setup::Error::MissingField { id: id.to_string() });
        };

        match element.dyn_into::<HtmlInputElement>() {
            Ok(input) => Ok(input),
            Err(_) => {
                warn!("Element #{} is not an input", id);
                Err(setup::Error::MissingField { id: id.to_string() })
            }
        }
    }
}

impl FormFields for DocumentFields {
    fn value(&self, field: FieldId) -> setup::Result<String> {
        Ok(self.input(field)?.value())
    }

    fn set_value(&mut self, field: FieldId, value: &str) -> setup::Result<()> {
        self.input(field)?.set_value(value);
        Ok(())
    }
}
