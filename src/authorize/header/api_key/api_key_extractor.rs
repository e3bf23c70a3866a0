use http::HeaderMap;

pub trait ApiKeyExtractor {
    type Error;

    fn extract_api_key<'a>(&self, headers: &'a HeaderMap) -> Result<&'a str, Self::Error>;
}

pub trait ApiKeyExtractorExt: Sized + ApiKeyExtractor {
    fn map_err<Fn>(self, map_err: Fn) -> MapError<Self, Fn>;
}

impl<T> ApiKeyExtractorExt for T
where
    T: Sized + ApiKeyExtractor,
{
    fn map_err<Fn>(self, map_err: Fn) -> MapError<Self, Fn> {
        MapError::new(self, map_err)
    }
}

#[derive(Debug, Clone)]
pub struct MapError<T, Fn> {
    inner: T,
    map_err: Fn,
}

impl<T, Fn> MapError<T, Fn> {
    pub const fn new(inner: T, map_err: Fn) -> Self {
        Self { inner, map_err }
    }
}

impl<A, Fn, E> ApiKeyExtractor for MapError<A, Fn>
where
    A: ApiKeyExtractor,
    Fn: FnOnce(A::Error) -> E + Copy,
{
    type Error = E;

    #[tracing::instrument(skip_all)]
    fn extract_api_key<'a>(&self, headers: &'a HeaderMap) -> Result<&'a str, Self::Error> {
        self.inner.extract_api_key(headers).map_err(self.map_err)
    }
}
