use crate::diff::{strings::compare_strings, Check, HttpMessage};

/// Checks that every header the test wants is present in what it got, with the same first
/// value. Headers that only appear on the received side are ignored: transport layers add
/// headers that a test has no control over.
pub(crate) struct HeaderCheck;

impl<T: HttpMessage> Check<T> for HeaderCheck {
    fn diffs(&self, got: &T, want: &T) -> Vec<String> {
        want.headers()
            .names()
            .filter_map(|name| {
                let got_value = got.headers().get(name).unwrap_or_default();
                let want_value = want.headers().get(name).unwrap_or_default();

                (got_value != want_value).then(|| {
                    format!(
                        "header {:?} got value {:?}, want {:?}",
                        name, got_value, want_value
                    )
                })
            })
            .collect()
    }
}

pub(crate) struct BodyCheck;

impl<T: HttpMessage> Check<T> for BodyCheck {
    fn diffs(&self, got: &T, want: &T) -> Vec<String> {
        let diff = compare_strings(got.body_text(), want.body_text());
        if diff.is_empty() {
            return Vec::new();
        }

        vec![format!("body is not expected, {}", diff)]
    }
}
