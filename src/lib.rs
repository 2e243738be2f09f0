//! `httpdiff` produces readable diffs for the things tests usually compare: strings, error
//! messages, outgoing HTTP requests and HTTP responses.
//!
//! Every comparison returns a `String`. An empty string means the values match, anything else
//! explains what is different. Tests usually only check for emptiness and print the text when
//! it is not empty, e.g. with [assert_no_diff].
//!
//! # Strings
//! [compare_strings] reports the first byte at which two strings diverge, together with the
//! remainder of both strings, or the characters one string has in excess of the other.
//!
//! # Errors
//! [check_err_has_msg] checks that an error message starts with an expected prefix, or, with
//! an empty prefix, that there is no error.
//!
//! # Requests and responses
//! [HttpRequest] and [HttpResponse] hold the parts of a request or response worth checking.
//! [compare_http_requests] and [compare_http_responses] compare such values; headers are only
//! checked for the names the expected side lists, so headers added by the transport do not
//! get in the way. [check_http_request] and [check_http_response] accept live `http` types and
//! read their bodies; inside async code, such as the handler of a mock server, use
//! [check_http_request_async] and [check_http_response_async] instead.
//!
//! ```
//! use httpdiff::{compare_http_requests, HttpRequest};
//!
//! let got = HttpRequest::new("DELETE", "http://hello.com/")
//!     .header("Header1", "some value")
//!     .header("Header2", "some other value")
//!     .body("hello buddy!");
//!
//! let want = HttpRequest::new("POST", "http://hello-there.com/")
//!     .header("Header1", "a different value")
//!     .body("goodbye buddy!");
//!
//! assert_eq!(
//!     compare_http_requests(&got, &want),
//!     r#"request does not match what is expected:
//! header "Header1" got value "some value", want "a different value"
//! got method "DELETE", want "POST"
//! got url:
//!   "http://hello.com/"
//! want:
//!   "http://hello-there.com/"
//! body is not expected, strings differ at index 0, from that index on:
//! ###### got string #####
//! hello buddy!
//! ###### want string #####
//! goodbye buddy!"#
//! );
//! ```
//!
//! # Setup failures
//! Failing to build or send a request or to read a body is never reported as a diff. Functions
//! that can fail this way return [Error]; their `must_` variants panic instead, since such a
//! failure is a broken test and not a mismatch.
mod common;
mod diff;
mod output;

pub use common::{
    data::{parse_recorded_requests, Error, Headers, HttpRequest, HttpResponse},
    http::{
        must_new_http_request, must_send_http_request, new_http_request, send_http_request,
        HttpClient, HttpDiffClient,
    },
    util::{must_read_all, read_all},
};
pub use diff::{
    errors::{check_err_has_msg, check_result_err_has_msg},
    request::{check_http_request, check_http_request_async, compare_http_requests},
    response::{check_http_response, check_http_response_async, compare_http_responses},
    strings::compare_strings,
};
pub use output::assert_no_diff;
