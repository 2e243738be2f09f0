use crate::common::data::Headers;

pub(crate) mod errors;
pub(crate) mod message;
pub(crate) mod request;
pub(crate) mod response;
pub(crate) mod strings;

/// One aspect of a request or response that is compared between what a test got and what it
/// wanted. Every entry returned by [Check::diffs] describes one mismatch.
pub(crate) trait Check<T> {
    fn diffs(&self, got: &T, want: &T) -> Vec<String>;
}

/// The parts shared by requests and responses.
pub(crate) trait HttpMessage {
    fn headers(&self) -> &Headers;
    fn body_text(&self) -> &str;
}

/// Runs all checks in order and joins their entries below the title. Returns an empty string
/// if no check reported a mismatch.
pub(crate) fn run_checks<T>(
    title: &str,
    checks: &[Box<dyn Check<T> + Send + Sync>],
    got: &T,
    want: &T,
) -> String {
    let diffs: Vec<String> = checks
        .iter()
        .flat_map(|check| check.diffs(got, want))
        .collect();

    if diffs.is_empty() {
        return String::new();
    }

    tracing::debug!("Found {} differences: {}", diffs.len(), title);

    format!("{}\n{}", title, diffs.join("\n"))
}
