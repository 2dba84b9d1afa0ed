/// Errors produced by string conversions and by the stream operations built
/// on top of them.
#[derive(Debug)]
pub enum Error {
    ///Wrapping std::io::Error error type
    Io(std::io::Error),
    ///Wrapping std::string::FromUtf8Error error type
    Encoding(std::string::FromUtf8Error),
    ///A numeric value with no string registered at its position
    OutOfRange { value: usize, count: usize },
    ///A string that doesn't represent any value of the requested type
    InvalidString(String),
}

impl Error {
    /// Returns the variant name, allowing errors to be classified without
    /// formatting them.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Io(_) => "Io",
            Self::Encoding(_) => "Encoding",
            Self::OutOfRange { .. } => "OutOfRange",
            Self::InvalidString(_) => "InvalidString",
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(inner) => inner.fmt(f),
            Self::Encoding(inner) => inner.fmt(f),
            Self::OutOfRange { value, count } => write!(
                f,
                "Invalid value {value}, valid range is 0..={}",
                count.saturating_sub(1)
            ),
            Self::InvalidString(string) => {
                write!(f, "'{string}' is not a valid string representation of this type")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(inner) => Some(inner),
            Self::Encoding(inner) => Some(inner),
            Self::OutOfRange { .. } | Self::InvalidString(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<std::string::FromUtf8Error> for Error {
    fn from(value: std::string::FromUtf8Error) -> Self {
        Self::Encoding(value)
    }
}

impl From<Error> for std::io::Error {
    fn from(error: Error) -> Self {
        if let Error::Io(error) = error {
            error
        } else {
            Self::new(std::io::ErrorKind::Other, format!("{error}"))
        }
    }
}
