mod alert;
mod bind;
mod error;
mod fields;

// Re-exports
pub use alert::WindowAlert;
pub use bind::{bind, bind_setup_form, bind_setup_form_with_config};
pub use error::{Error, Result};
pub use fields::DocumentFields;
