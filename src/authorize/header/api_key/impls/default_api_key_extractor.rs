use http::HeaderMap;

use crate::{
    authorize::header::{
        api_key::api_key_extractor::ApiKeyExtractor, header_extractor::HeaderExtractor,
        DefaultHeaderExtractor,
    },
    error::AuthError,
};

pub const API_KEY_SCHEME: &str = "ApiKey";

/// Extracts the key from an `Authorization: ApiKey xyz` header.
#[derive(Debug, Clone)]
pub struct DefaultApiKeyExtractor<H = DefaultHeaderExtractor> {
    header_extractor: H,
}

impl DefaultApiKeyExtractor {
    pub fn new() -> Self {
        Self {
            header_extractor: DefaultHeaderExtractor::new("authorization"),
        }
    }
}

impl Default for DefaultApiKeyExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> DefaultApiKeyExtractor<H> {
    /// Parses the value produced by `header_extractor` instead of the `Authorization` header.
    pub const fn with_header_extractor(header_extractor: H) -> Self {
        Self { header_extractor }
    }
}

impl<H> ApiKeyExtractor for DefaultApiKeyExtractor<H>
where
    H: HeaderExtractor,
    AuthError: From<H::Error>,
{
    type Error = AuthError;

    #[tracing::instrument(skip_all, fields(header_name = %self.header_extractor.header_name()))]
    fn extract_api_key<'a>(&self, headers: &'a HeaderMap) -> Result<&'a str, Self::Error> {
        let api_key = self
            .header_extractor
            .extract_header(headers)
            .map_err(AuthError::from)
            .and_then(parse_api_key);

        if let Err(err) = &api_key {
            tracing::debug!(%err, "Api key rejected");
        }

        api_key
    }
}

/// Splits `authorization` on whitespace and returns the token following the `ApiKey` scheme.
///
/// Tokens after the key are ignored.
pub fn parse_api_key(authorization: &str) -> Result<&str, AuthError> {
    let mut tokens = authorization.split_whitespace();

    match (tokens.next(), tokens.next()) {
        (Some(API_KEY_SCHEME), Some(api_key)) => Ok(api_key),
        _ => Err(AuthError::MalformedAuthHeader),
    }
}

/// Returns the API key carried by the `Authorization` header.
pub fn get_api_key(headers: &HeaderMap) -> Result<&str, AuthError> {
    DefaultApiKeyExtractor::new().extract_api_key(headers)
}
