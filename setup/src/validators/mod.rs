mod error;
mod required;

pub use error::first_error;
pub use required::required;
