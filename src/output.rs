#[cfg(feature = "color")]
use colored::Colorize;

/// Panics with `context` followed by `diff` if `diff` is not empty.
///
/// Meant for the diffs returned by the comparison functions of this crate:
///
/// ```
/// use httpdiff::{assert_no_diff, compare_strings};
///
/// assert_no_diff("greeting", &compare_strings("hello", "hello"));
/// ```
#[track_caller]
pub fn assert_no_diff(context: &str, diff: &str) {
    if diff.is_empty() {
        return;
    }

    #[cfg(feature = "color")]
    let context = context.red().bold().to_string();

    panic!("{}\n{}", context, diff)
}
