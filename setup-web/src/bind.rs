use setup::{FormConfig, validate_form};
use snafu::{OptionExt, ResultExt};
use tracing::info;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Event;

use crate::Result;
use crate::alert::WindowAlert;
use crate::error::{FormNotFoundSnafu, NoDocumentSnafu, NoWindowSnafu, SetupSnafu};
use crate::fields::DocumentFields;

/// Validates the setup form with the default element ids on every submit.
#[wasm_bindgen(js_name = bindSetupForm)]
pub fn bind_setup_form() -> std::result::Result<(), JsValue> {
    bind(FormConfig::default())?;
    Ok(())
}

/// Same as `bindSetupForm`, with element ids taken from a TOML form config.
#[wasm_bindgen(js_name = bindSetupFormWithConfig)]
pub fn bind_setup_form_with_config(config: &str) -> std::result::Result<(), JsValue> {
    bind(parse_config(config)?)?;
    Ok(())
}

fn parse_config(contents: &str) -> Result<FormConfig> {
    FormConfig::from_toml(contents).context(SetupSnafu)
}

/// Attaches the validator to the form's submit event.
///
/// Submission is cancelled whenever validation fails. The listener stays
/// attached for the lifetime of the page.
pub fn bind(config: FormConfig) -> Result<()> {
    let window = web_sys::window().context(NoWindowSnafu)?;
    let document = window.document().context(NoDocumentSnafu)?;
    let form = document
        .get_element_by_id(&config.form_id)
        .context(FormNotFoundSnafu {
            id: config.form_id.clone(),
        })?;

    let form_id = config.form_id.clone();
    let mut fields = DocumentFields::new(document, config);
    let alert = WindowAlert::new(window);

    let on_submit = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        if !validate_form(&mut fields, &alert) {
            event.prevent_default();
        }
    });

    form.add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();

    info!("Setup form validator bound to #{}", form_id);
    Ok(())
}
