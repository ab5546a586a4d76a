use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Please enter an admin username."))]
    AdminRequired,

    #[snafu(display("Please enter a password."))]
    PasswordRequired,

    #[snafu(display("Password does not match verify."))]
    PasswordMismatch,

    #[snafu(display("Missing form field: {}", id))]
    MissingField { id: String },

    #[snafu(display("Error parsing form config: {}", source))]
    ConfigParse { source: toml::de::Error },

    #[snafu(display("{}", msg))]
    Whatever { msg: String },
}

impl Error {
    /// Whether the error is one of the user-facing field checks.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Error::AdminRequired | Error::PasswordRequired | Error::PasswordMismatch
        )
    }
}

// Allow string slices to be converted to Error
impl From<&str> for Error {
    fn from(val: &str) -> Self {
        Self::Whatever {
            msg: val.to_string(),
        }
    }
}

impl From<String> for Error {
    fn from(val: String) -> Self {
        Self::Whatever { msg: val }
    }
}
