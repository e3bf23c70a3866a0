mod api_key_extractor;
mod impls;

pub use api_key_extractor::{ApiKeyExtractor, ApiKeyExtractorExt, MapError};
pub use impls::default_api_key_extractor::{
    get_api_key, parse_api_key, DefaultApiKeyExtractor, API_KEY_SCHEME,
};
