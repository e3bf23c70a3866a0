#![deny(unsafe_code, missing_debug_implementations)]

//! Extract `ApiKey` credentials from the http `Authorization` header.
//!
//! ```
//! use api_key_header::{get_api_key, AuthError};
//! use http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
//!
//! let mut headers = HeaderMap::new();
//! headers.insert(AUTHORIZATION, HeaderValue::from_static("ApiKey my-secret-key"));
//!
//! assert_eq!(get_api_key(&headers), Ok("my-secret-key"));
//! assert_eq!(get_api_key(&HeaderMap::new()), Err(AuthError::NoAuthHeader));
//! ```

pub mod authorize;
pub mod error;

pub use authorize::header::api_key::get_api_key;
pub use error::AuthError;

#[cfg(test)]
mod test;
