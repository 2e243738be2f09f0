use bytes::Bytes;
use http_body_util::Full;
use httpdiff::{check_http_request, compare_http_requests, compare_strings, HttpRequest};

fn live_request(
    method: &str,
    uri: &str,
    headers: &[(&str, &str)],
    body: &'static str,
) -> http::Request<Full<Bytes>> {
    let mut builder = http::Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    builder.body(Full::new(Bytes::from_static(body.as_bytes()))).unwrap()
}

#[test]
fn requests_not_equal() {
    let _ = env_logger::try_init();

    // Arrange
    let got = live_request(
        "DELETE",
        "http://hello.com/",
        &[("Header1", "some value"), ("Header2", "some other value")],
        "hello buddy!",
    );
    let want = HttpRequest::new("POST", "http://hello-there.com/")
        .header("Header1", "a different value")
        .body("goodbye buddy!");

    // Act
    let diff = check_http_request(got, &want).unwrap();

    // Assert
    let expected = r#"request does not match what is expected:
header "Header1" got value "some value", want "a different value"
got method "DELETE", want "POST"
got url:
  "http://hello.com/"
want:
  "http://hello-there.com/"
body is not expected, strings differ at index 0, from that index on:
##### got string #####
hello buddy!
##### want string #####
goodbye buddy!"#;
    assert_eq!(compare_strings(&diff, expected), "");
    assert!(!diff.contains("Header2"));
}

#[test]
fn requests_equal() {
    let _ = env_logger::try_init();

    let got = live_request(
        "POST",
        "http://hello.com/",
        &[("Header1", "a different value"), ("Header2", "some value")],
        "hello buddy!",
    );
    let want = HttpRequest::new("POST", "http://hello.com/")
        .header("Header1", "a different value")
        .body("hello buddy!");

    assert_eq!(check_http_request(got, &want).unwrap(), "");
}

#[test]
fn request_diff_entries_keep_their_order() {
    let got = HttpRequest::new("DELETE", "http://hello.com/a")
        .header("Header1", "some value")
        .header("Header2", "x")
        .body("abc");
    let want = HttpRequest::new("POST", "http://hello.com/b")
        .header("Header1", "a different value")
        .body("abd");

    let diff = compare_http_requests(&got, &want);
    let lines: Vec<&str> = diff.lines().collect();

    assert_eq!(lines[0], "request does not match what is expected:");
    assert!(lines[1].starts_with("header \"Header1\""));
    assert!(lines[2].starts_with("got method"));
    assert!(lines[3].starts_with("got url:"));
    assert!(lines[7].starts_with("body is not expected, "));
    assert!(!diff.contains("Header2"));
}

#[test]
fn header_names_are_matched_case_insensitively() {
    // http::HeaderMap lowercases every header name.
    let got = live_request("GET", "http://hello.com/", &[("X-Request-Id", "42")], "");
    let want = HttpRequest::new("GET", "http://hello.com/").header("X-Request-Id", "42");

    assert_eq!(check_http_request(got, &want).unwrap(), "");
}

#[test]
fn comparing_twice_gives_the_same_diff() {
    let got = HttpRequest::new("GET", "http://hello.com/").body("one");
    let want = HttpRequest::new("PUT", "http://hello.com/").body("two");

    assert_eq!(
        compare_http_requests(&got, &want),
        compare_http_requests(&got, &want)
    );
}
