use crate::{
    common::{
        data::{Error, Headers, HttpResponse},
        util::BoxError,
    },
    diff::{
        message::{BodyCheck, HeaderCheck},
        run_checks, Check, HttpMessage,
    },
};

const TITLE: &str = "response does not match what is expected:";

impl HttpMessage for HttpResponse {
    fn headers(&self) -> &Headers {
        &self.header
    }

    fn body_text(&self) -> &str {
        &self.body
    }
}

struct StatusCodeCheck;

impl Check<HttpResponse> for StatusCodeCheck {
    fn diffs(&self, got: &HttpResponse, want: &HttpResponse) -> Vec<String> {
        if got.status_code == want.status_code {
            return Vec::new();
        }

        vec![format!(
            "got status code {}, want {}",
            got.status_code, want.status_code
        )]
    }
}

fn response_checks() -> Vec<Box<dyn Check<HttpResponse> + Send + Sync>> {
    vec![
        Box::new(StatusCodeCheck),
        Box::new(HeaderCheck),
        Box::new(BodyCheck),
    ]
}

/// Compares a response against the expected one and returns an empty string if they match.
///
/// Uses the same header policy as [compare_http_requests](crate::compare_http_requests).
/// Entries are reported in the order status code, headers, body.
pub fn compare_http_responses(got: &HttpResponse, want: &HttpResponse) -> String {
    run_checks(TITLE, &response_checks(), got, want)
}

/// Like [compare_http_responses], but takes a live response. Its body is read and consumed by
/// blocking the calling thread; async code must use [check_http_response_async].
pub fn check_http_response<B>(
    got: http::Response<B>,
    want: &HttpResponse,
) -> Result<String, Error>
where
    B: hyper::body::Body,
    B::Error: Into<BoxError>,
{
    let got = HttpResponse::from_response(got)?;
    Ok(compare_http_responses(&got, want))
}

/// Like [check_http_response], but awaits the body instead of blocking on it. Use this inside
/// async code, e.g. in the handler of a mock server that checks the responses it receives.
pub async fn check_http_response_async<B>(
    got: http::Response<B>,
    want: &HttpResponse,
) -> Result<String, Error>
where
    B: hyper::body::Body,
    B::Error: Into<BoxError>,
{
    let got = HttpResponse::from_response_async(got).await?;
    Ok(compare_http_responses(&got, want))
}
