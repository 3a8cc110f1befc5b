use crate::capabilities::Capability;

#[derive(Debug, Fail)]
pub enum Error {
    /// A mandatory or guarded capability is missing on the current driver.
    #[fail(display = "{}", reason)]
    PlatformUnsupported {
        capability: Option<Capability>,
        reason: String,
    },
    #[fail(display = "Capabilities of this context have already been probed.")]
    AlreadyProbed,
    #[fail(display = "Capabilities of this context have not been probed yet.")]
    NotProbed,
    #[fail(display = "[GL] String is unformaled: '{}'.", _0)]
    MalformedString(String),
    #[fail(display = "Failed to parse probe settings: {}", _0)]
    Settings(String),
}

pub type Result<T> = ::std::result::Result<T, Error>;

impl Error {
    /// Builds the capability-missing condition for `capability`.
    pub fn unsupported(capability: Capability) -> Self {
        Error::PlatformUnsupported {
            capability: Some(capability),
            reason: format!("no {} support", capability.description()),
        }
    }

    /// Returns the capability this error complains about, if any.
    pub fn capability(&self) -> Option<Capability> {
        match *self {
            Error::PlatformUnsupported { capability, .. } => capability,
            _ => None,
        }
    }
}

impl From<::serde_json::Error> for Error {
    fn from(err: ::serde_json::Error) -> Error {
        Error::Settings(format!("{}", err))
    }
}
