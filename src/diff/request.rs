use crate::{
    common::{
        data::{Error, Headers, HttpRequest},
        util::BoxError,
    },
    diff::{
        message::{BodyCheck, HeaderCheck},
        run_checks, Check, HttpMessage,
    },
};

const TITLE: &str = "request does not match what is expected:";

impl HttpMessage for HttpRequest {
    fn headers(&self) -> &Headers {
        &self.header
    }

    fn body_text(&self) -> &str {
        &self.body
    }
}

struct MethodCheck;

impl Check<HttpRequest> for MethodCheck {
    fn diffs(&self, got: &HttpRequest, want: &HttpRequest) -> Vec<String> {
        if got.method == want.method {
            return Vec::new();
        }

        vec![format!("got method {:?}, want {:?}", got.method, want.method)]
    }
}

struct UrlCheck;

impl Check<HttpRequest> for UrlCheck {
    fn diffs(&self, got: &HttpRequest, want: &HttpRequest) -> Vec<String> {
        if got.url == want.url {
            return Vec::new();
        }

        vec![format!("got url:\n  {:?}\nwant:\n  {:?}", got.url, want.url)]
    }
}

// Order matters: it is the order of the entries in the diff.
fn request_checks() -> Vec<Box<dyn Check<HttpRequest> + Send + Sync>> {
    vec![
        Box::new(HeaderCheck),
        Box::new(MethodCheck),
        Box::new(UrlCheck),
        Box::new(BodyCheck),
    ]
}

/// Compares a request against the expected one and returns an empty string if they match.
///
/// Headers are only checked for the names present in `want`, using the first value of each;
/// extra headers on `got` are ignored. Method, URL and body have to match exactly. All
/// mismatches are reported, one entry each, in the order headers, method, URL, body.
pub fn compare_http_requests(got: &HttpRequest, want: &HttpRequest) -> String {
    run_checks(TITLE, &request_checks(), got, want)
}

/// Like [compare_http_requests], but takes a live request. Its body is read and consumed.
///
/// An error means the body could not be read, which is a problem with the test setup and
/// never a mismatch. The body is read by blocking the calling thread, so async code must use
/// [check_http_request_async].
pub fn check_http_request<B>(got: http::Request<B>, want: &HttpRequest) -> Result<String, Error>
where
    B: hyper::body::Body,
    B::Error: Into<BoxError>,
{
    let got = HttpRequest::from_request(got)?;
    Ok(compare_http_requests(&got, want))
}

/// Like [check_http_request], but awaits the body instead of blocking on it. Use this inside
/// async code, e.g. in the handler of a mock server that checks the requests it receives.
pub async fn check_http_request_async<B>(
    got: http::Request<B>,
    want: &HttpRequest,
) -> Result<String, Error>
where
    B: hyper::body::Body,
    B::Error: Into<BoxError>,
{
    let got = HttpRequest::from_request_async(got).await?;
    Ok(compare_http_requests(&got, want))
}
