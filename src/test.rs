use http::{header::AUTHORIZATION, HeaderMap, HeaderValue};

use crate::{authorize::header::api_key::get_api_key, error::AuthError};

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn headers(authorization: Option<&'static str>) -> HeaderMap {
    let mut headers = HeaderMap::new();

    if let Some(authorization) = authorization {
        headers.insert(AUTHORIZATION, HeaderValue::from_static(authorization));
    }

    headers
}

#[test]
fn get_api_key_scenarios() {
    init_tracing();

    let cases = [
        (
            "valid api key",
            Some("ApiKey my-secret-key"),
            Ok("my-secret-key"),
        ),
        ("missing authorization header", None, Err(AuthError::NoAuthHeader)),
        (
            "malformed authorization header, no key",
            Some("ApiKey"),
            Err(AuthError::MalformedAuthHeader),
        ),
        (
            "malformed authorization header, wrong prefix",
            Some("Bearer my-secret-key"),
            Err(AuthError::MalformedAuthHeader),
        ),
        (
            "empty authorization header",
            Some(""),
            Err(AuthError::NoAuthHeader),
        ),
    ];

    for (name, authorization, expected) in cases {
        let headers = headers(authorization);

        assert_eq!(get_api_key(&headers), expected, "case: {name}");
    }
}

#[test]
fn get_api_key_is_idempotent() {
    init_tracing();

    for authorization in [Some("ApiKey key"), Some("Bearer key"), Some(""), None] {
        let headers = headers(authorization);

        assert_eq!(get_api_key(&headers), get_api_key(&headers));
    }
}

#[test]
fn error_messages() {
    assert_eq!(
        AuthError::NoAuthHeader.to_string(),
        "no authorization header included"
    );
    assert_eq!(
        AuthError::MalformedAuthHeader.to_string(),
        "malformed authorization header"
    );
}
