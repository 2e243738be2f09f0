use std::fmt::Display;

/// Checks that an error is present and that its message starts with `want_msg`, or, when
/// `want_msg` is empty, that there is no error at all.
///
/// Returns an empty string if the check passes and a description of the problem otherwise.
/// Matching a prefix instead of the whole message keeps tests stable when details get
/// appended to an error.
pub fn check_err_has_msg<E: Display + ?Sized>(err: Option<&E>, want_msg: &str) -> String {
    match err {
        Some(err) if want_msg.is_empty() => format!("got non-nil error: {}", err),
        _ if want_msg.is_empty() => String::new(),
        Some(err) => {
            let got = err.to_string();
            if got.starts_with(want_msg) {
                String::new()
            } else {
                wrong_message(&got, want_msg)
            }
        }
        None => wrong_message("<nil>", want_msg),
    }
}

/// Like [check_err_has_msg], but takes the error from a `Result`.
pub fn check_result_err_has_msg<T, E: Display>(result: &Result<T, E>, want_msg: &str) -> String {
    check_err_has_msg(result.as_ref().err(), want_msg)
}

fn wrong_message(got: &str, want: &str) -> String {
    format!(
        "got error message:\n  {}\nwant error message to start with the string:\n  {}",
        got, want
    )
}
