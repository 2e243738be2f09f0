use async_trait::async_trait;
use bytes::Bytes;
use http::{Request, Response};
use http_body_util::{BodyExt, Full};
#[cfg(feature = "https")]
use hyper_rustls::HttpsConnector;
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use std::sync::{Arc, OnceLock};
use tokio::runtime::Runtime;
use url::Url;

use crate::common::{
    data::Error,
    runtime,
    util::{read_env, Join},
};

const WORKER_THREADS_ENV: &str = "HTTPDIFF_CLIENT_WORKER_THREADS";

#[async_trait]
pub trait HttpClient {
    async fn send(&self, req: Request<Bytes>) -> Result<Response<Bytes>, Error>;
}

/// A small HTTP client for sending the requests a test wants to check the responses of.
///
/// Without a runtime, [HttpClient::send] must be awaited inside a tokio runtime. With a
/// runtime, the exchange is spawned onto it and the returned future can be polled from anywhere.
pub struct HttpDiffClient {
    runtime: Option<Arc<Runtime>>,
    #[cfg(feature = "https")]
    client: Arc<Client<HttpsConnector<HttpConnector>, Full<Bytes>>>,
    #[cfg(not(feature = "https"))]
    client: Arc<Client<HttpConnector, Full<Bytes>>>,
}

impl HttpDiffClient {
    #[cfg(feature = "https")]
    pub fn new(runtime: Option<Arc<Runtime>>) -> Result<Self, Error> {
        // see https://github.com/rustls/rustls/issues/1938
        if rustls::crypto::CryptoProvider::get_default().is_none() {
            // Losing the race against another thread installing a provider is fine.
            let _ = rustls::crypto::ring::default_provider().install_default();
        }

        let https_connector = hyper_rustls::HttpsConnectorBuilder::new()
            .with_native_roots()
            .map_err(|e| Error::TlsSetupError(e.to_string()))?
            .https_or_http()
            .enable_http1()
            .build();

        Ok(Self {
            runtime,
            client: Arc::new(Client::builder(TokioExecutor::new()).build(https_connector)),
        })
    }

    #[cfg(not(feature = "https"))]
    pub fn new(runtime: Option<Arc<Runtime>>) -> Result<Self, Error> {
        Ok(Self {
            runtime,
            client: Arc::new(Client::builder(TokioExecutor::new()).build(HttpConnector::new())),
        })
    }
}

#[async_trait]
impl HttpClient for HttpDiffClient {
    async fn send(&self, req: Request<Bytes>) -> Result<Response<Bytes>, Error> {
        let (req_parts, req_body) = req.into_parts();
        let hyper_req = Request::from_parts(req_parts, Full::new(req_body));

        tracing::trace!("Sending {} {}", hyper_req.method(), hyper_req.uri());

        let client = self.client.clone();
        let exchange = async move {
            let res = client.request(hyper_req).await?;
            let (res_parts, res_body) = res.into_parts();
            let body = res_body.collect().await?.to_bytes();
            Ok::<_, Error>(Response::from_parts(res_parts, body))
        };

        match self.runtime.clone() {
            Some(rt) => rt.spawn(exchange).await?,
            None => exchange.await,
        }
    }
}

fn default_client() -> Result<&'static HttpDiffClient, Error> {
    static CLIENT: OnceLock<HttpDiffClient> = OnceLock::new();

    if let Some(client) = CLIENT.get() {
        return Ok(client);
    }

    let worker_threads = read_env(WORKER_THREADS_ENV, "1")
        .parse::<usize>()
        .map_err(|e| Error::ConfigError(format!("{}: {}", WORKER_THREADS_ENV, e)))?;
    let client = HttpDiffClient::new(Some(Arc::new(runtime::new(worker_threads)?)))?;

    Ok(CLIENT.get_or_init(|| client))
}

/// Creates a request that is ready to be sent. Unlike a bare `http::Request`, the URL has to be
/// absolute (scheme and host included).
pub fn new_http_request(
    method: &str,
    url: &str,
    body: impl Into<Bytes>,
) -> Result<Request<Bytes>, Error> {
    let parsed = Url::parse(url).map_err(|source| Error::InvalidUrl {
        url: url.to_string(),
        source,
    })?;

    Ok(Request::builder()
        .method(method)
        .uri(parsed.as_str())
        .body(body.into())?)
}

/// Like [new_http_request], but panics if the request cannot be created.
pub fn must_new_http_request(method: &str, url: &str, body: impl Into<Bytes>) -> Request<Bytes> {
    new_http_request(method, url, body).unwrap_or_else(|e| panic!("{}", e))
}

/// Sends a request with the shared default client and blocks until the whole response has
/// been received. The response can be passed to `check_http_response` as is.
///
/// Must not be called from within an async context. Use an [HttpDiffClient] there.
pub fn send_http_request(req: Request<Bytes>) -> Result<Response<Full<Bytes>>, Error> {
    let res = default_client()?.send(req).join()?;
    Ok(res.map(Full::new))
}

/// Like [send_http_request], but panics if the request cannot be sent.
pub fn must_send_http_request(req: Request<Bytes>) -> Response<Full<Bytes>> {
    send_http_request(req).unwrap_or_else(|e| panic!("{}", e))
}
