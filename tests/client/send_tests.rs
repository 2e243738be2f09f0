use bytes::Bytes;
use http::HeaderValue;
use http_body_util::Full;
use httpdiff::{
    assert_no_diff, check_http_request, check_http_response, must_new_http_request,
    must_send_http_request, send_http_request, Error, HttpRequest, HttpResponse,
};
use httpmock::prelude::*;

#[test]
fn sent_request_gets_expected_response() {
    let _ = env_logger::try_init();

    // Arrange
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/greet")
            .header("X-Token", "abc")
            .body("hi");
        then.status(201).header("X-Id", "7").body("welcome");
    });

    let mut req = must_new_http_request("POST", &server.url("/greet"), "hi");
    req.headers_mut()
        .insert("X-Token", HeaderValue::from_static("abc"));

    // Act
    let res = must_send_http_request(req);

    // Assert
    let want = HttpResponse::new(201).header("X-Id", "7").body("welcome");
    assert_no_diff("unexpected response", &check_http_response(res, &want).unwrap());
    mock.assert();
}

#[test]
fn response_mismatch_is_reported_not_raised() {
    let _ = env_logger::try_init();

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/missing");
        then.status(404).body("nope");
    });

    let res = must_send_http_request(must_new_http_request(
        "GET",
        &server.url("/missing"),
        Bytes::new(),
    ));

    let diff = check_http_response(res, &HttpResponse::new(200).body("nope")).unwrap();
    assert_eq!(
        diff,
        "response does not match what is expected:\ngot status code 404, want 200"
    );
}

#[test]
fn built_request_can_be_compared() {
    let url = "http://api.test/items?page=2";
    let mut req = must_new_http_request("PUT", url, "{\"a\":1}");
    req.headers_mut()
        .insert("Content-Type", HeaderValue::from_static("application/json"));

    let want = HttpRequest::new("PUT", url)
        .header("Content-Type", "application/json")
        .body("{\"a\":1}");

    assert_eq!(check_http_request(req.map(Full::new), &want).unwrap(), "");
}

#[test]
fn unreachable_server_is_a_setup_error() {
    let req = must_new_http_request("GET", "http://127.0.0.1:1/", Bytes::new());
    let err = send_http_request(req).unwrap_err();
    assert!(matches!(err, Error::SendError(_)), "{}", err);
}
