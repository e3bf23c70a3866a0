use crate::authorize::header::DefaultHeaderError;

/// Why an API key could not be extracted.
///
/// Compare by variant; the messages are for humans only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The `Authorization` header is absent or empty.
    #[error("no authorization header included")]
    NoAuthHeader,
    /// The `Authorization` header is not in the form `ApiKey xyz`.
    #[error("malformed authorization header")]
    MalformedAuthHeader,
}

impl From<DefaultHeaderError> for AuthError {
    fn from(value: DefaultHeaderError) -> Self {
        match value {
            DefaultHeaderError::Missing | DefaultHeaderError::Empty => Self::NoAuthHeader,
            DefaultHeaderError::Ascii(_) => Self::MalformedAuthHeader,
        }
    }
}
