use httpdiff::{check_err_has_msg, check_result_err_has_msg, Error, HttpRequest};

#[test]
fn parse_error_has_expected_prefix() {
    let result = "abc".parse::<u32>();
    assert_eq!(check_result_err_has_msg(&result, "invalid digit"), "");
}

#[test]
fn successful_result_when_error_was_wanted() {
    let result = "42".parse::<u32>();
    assert_eq!(
        check_result_err_has_msg(&result, "invalid digit"),
        "got error message:\n  <nil>\nwant error message to start with the string:\n  invalid digit"
    );
}

#[test]
fn crate_errors_can_be_checked() {
    let err = HttpRequest::from_json("not json").unwrap_err();
    assert_eq!(
        check_err_has_msg(Some(&err), "cannot convert recorded data from JSON"),
        ""
    );
    assert!(matches!(err, Error::JSONConversionError(_)));
}

#[test]
fn unsized_errors_can_be_checked() {
    let err: Box<dyn std::error::Error> = "connection refused".into();
    assert_eq!(check_err_has_msg(Some(err.as_ref()), "connection"), "");
    assert_eq!(check_err_has_msg(None::<&dyn std::error::Error>, ""), "");
}
