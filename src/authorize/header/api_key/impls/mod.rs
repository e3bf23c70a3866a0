pub mod default_api_key_extractor;
