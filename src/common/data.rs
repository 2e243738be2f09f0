use crate::common::util::{read_body, read_body_async, BoxError};
use serde::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};
use std::fmt;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid url '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("cannot build request: {0}")]
    RequestConstructionError(#[from] http::Error),
    #[error("cannot send request: {0}")]
    SendError(#[from] hyper_util::client::legacy::Error),
    #[error("cannot receive response: {0}")]
    HyperError(#[from] hyper::Error),
    #[error("cannot read body: {0}")]
    BodyReadError(String),
    #[error("runtime error: {0}")]
    RuntimeError(#[from] tokio::task::JoinError),
    #[error("cannot start client runtime: {0}")]
    RuntimeSetupError(#[from] std::io::Error),
    #[error("cannot set up TLS: {0}")]
    TlsSetupError(String),
    #[error("invalid configuration: {0}")]
    ConfigError(String),
    #[error("cannot convert recorded data from JSON: {0}")]
    JSONConversionError(#[from] serde_json::Error),
}

// ===============================================================================================
// Headers
// ===============================================================================================

/// HTTP headers as an insertion-ordered mapping from a header name to all of its values.
///
/// Names are looked up ASCII case-insensitively, so `content-type` and `Content-Type` refer to
/// the same entry. The name is stored in the spelling it was first inserted with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: Vec<(String, Vec<String>)>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the first value of the header with the given name, if there is one.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.get_all(name).first().map(String::as_str)
    }

    /// Returns all values of the header with the given name in the order they were added.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    /// Adds a value to the header with the given name, keeping any values already present.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values_mut(name.into()).push(value.into());
    }

    /// Replaces all values of the header with the given name by a single value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let values = self.values_mut(name.into());
        values.clear();
        values.push(value.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|(k, _)| k.eq_ignore_ascii_case(name))
    }

    /// Header names in insertion order. Every name appears once.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, values)| (k.as_str(), values.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn values_mut(&mut self, name: String) -> &mut Vec<String> {
        let idx = match self
            .entries
            .iter()
            .position(|(k, _)| k.eq_ignore_ascii_case(&name))
        {
            Some(idx) => idx,
            None => {
                self.entries.push((name, Vec::new()));
                self.entries.len() - 1
            }
        };

        &mut self.entries[idx].1
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Headers {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.append(name, value);
        }
        headers
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Headers {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<&http::HeaderMap> for Headers {
    fn from(map: &http::HeaderMap) -> Self {
        let mut headers = Headers::new();
        for name in map.keys() {
            for value in map.get_all(name) {
                // Header values are not guaranteed to be valid UTF-8.
                headers.append(name.as_str(), String::from_utf8_lossy(value.as_bytes()));
            }
        }
        headers
    }
}

impl Serialize for Headers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(k, values)| (k, values)))
    }
}

impl<'de> Deserialize<'de> for Headers {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct HeadersVisitor;

        impl<'de> Visitor<'de> for HeadersVisitor {
            type Value = Headers;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map from header names to lists of values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Headers, A::Error> {
                let mut headers = Headers::new();
                while let Some((name, values)) = access.next_entry::<String, Vec<String>>()? {
                    headers.values_mut(name).extend(values);
                }
                Ok(headers)
            }
        }

        deserializer.deserialize_map(HeadersVisitor)
    }
}

// ===============================================================================================
// Request
// ===============================================================================================

/// The fields of an HTTP request that matter when checking it in a test.
///
/// It is used as the expected side of a comparison, and as a snapshot of an actual request
/// (see [HttpRequest::from_request]). It serializes to JSON with the field names `header`,
/// `method`, `url` and `body`, so a mock API can hand the requests it recorded back to a test.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpRequest {
    #[serde(default)]
    pub header: Headers,
    pub method: String,
    pub url: String,
    #[serde(default)]
    pub body: String,
}

impl HttpRequest {
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.header.append(name, value);
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Takes a snapshot of a live request. The body is read to the end and consumed.
    ///
    /// The URL is the full string form of the request URI, so an origin-form request
    /// (`/path?query`) yields only the path and query.
    ///
    /// This blocks the calling thread while the body is read. Inside a hyper service, or any
    /// other task that the body depends on, use [HttpRequest::from_request_async] instead.
    pub fn from_request<B>(req: http::Request<B>) -> Result<Self, Error>
    where
        B: hyper::body::Body,
        B::Error: Into<BoxError>,
    {
        let (parts, body) = req.into_parts();
        Ok(Self::from_parts(&parts, read_body(body)?))
    }

    /// Like [HttpRequest::from_request], but awaits the body instead of blocking on it.
    pub async fn from_request_async<B>(req: http::Request<B>) -> Result<Self, Error>
    where
        B: hyper::body::Body,
        B::Error: Into<BoxError>,
    {
        let (parts, body) = req.into_parts();
        Ok(Self::from_parts(&parts, read_body_async(body).await?))
    }

    fn from_parts(parts: &http::request::Parts, body: String) -> Self {
        Self {
            header: Headers::from(&parts.headers),
            method: parts.method.to_string(),
            url: parts.uri.to_string(),
            body,
        }
    }

    /// Parses a single recorded request from its JSON representation.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Parses a JSON array of recorded requests, e.g. the list a mock API returns after it
/// captured the requests sent to it.
pub fn parse_recorded_requests(json: &str) -> Result<Vec<HttpRequest>, Error> {
    Ok(serde_json::from_str(json)?)
}

// ===============================================================================================
// Response
// ===============================================================================================

/// The fields of an HTTP response that matter when checking it in a test.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status_code: u16,
    #[serde(default)]
    pub header: Headers,
    #[serde(default)]
    pub body: String,
}

impl HttpResponse {
    pub fn new(status_code: u16) -> Self {
        Self {
            status_code,
            header: Headers::new(),
            body: String::new(),
        }
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.header.append(name, value);
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Takes a snapshot of a live response. The body is read to the end and consumed.
    ///
    /// Blocks the calling thread while the body is read; see [HttpResponse::from_response_async]
    /// for async callers.
    pub fn from_response<B>(res: http::Response<B>) -> Result<Self, Error>
    where
        B: hyper::body::Body,
        B::Error: Into<BoxError>,
    {
        let (parts, body) = res.into_parts();
        Ok(Self::from_parts(&parts, read_body(body)?))
    }

    /// Like [HttpResponse::from_response], but awaits the body instead of blocking on it.
    pub async fn from_response_async<B>(res: http::Response<B>) -> Result<Self, Error>
    where
        B: hyper::body::Body,
        B::Error: Into<BoxError>,
    {
        let (parts, body) = res.into_parts();
        Ok(Self::from_parts(&parts, read_body_async(body).await?))
    }

    fn from_parts(parts: &http::response::Parts, body: String) -> Self {
        Self {
            status_code: parts.status.as_u16(),
            header: Headers::from(&parts.headers),
            body,
        }
    }
}
