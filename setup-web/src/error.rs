use snafu::Snafu;
use wasm_bindgen::JsValue;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("No global window"))]
    NoWindow,

    #[snafu(display("No document on window"))]
    NoDocument,

    #[snafu(display("Setup form not found: {}", id))]
    FormNotFound { id: String },

    #[snafu(display("{}", source))]
    Setup { source: setup::Error },

    #[snafu(display("{}", msg))]
    Js { msg: String },
}

impl From<JsValue> for Error {
    fn from(val: JsValue) -> Self {
        let msg = match val.as_string() {
            Some(msg) => msg,
            None => format!("{:?}", val),
        };
        Self::Js { msg }
    }
}

// Exported functions reject with the error message
impl From<Error> for JsValue {
    fn from(err: Error) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
