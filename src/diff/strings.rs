use std::borrow::Cow;

/// Compares two strings and describes where they start to differ, or returns an empty string
/// if they are equal. Useful when large strings need to be compared.
///
/// Only the first point of divergence is reported, together with the rest of both strings
/// from there on. Indexes count bytes, not characters: for multi-byte text the reported index
/// may point into the middle of a character, in which case the partial character is shown as
/// U+FFFD.
///
/// ```
/// use httpdiff::compare_strings;
///
/// assert_eq!(compare_strings("same", "same"), "");
/// assert_eq!(
///     compare_strings("hello there!!", "hello there"),
///     "got a longer string than what we wanted (characters match otherwise) and the extra characters are: !!"
/// );
/// ```
pub fn compare_strings(got: &str, want: &str) -> String {
    let got = got.as_bytes();
    let want = want.as_bytes();

    for (i, want_byte) in want.iter().enumerate() {
        match got.get(i) {
            None => {
                return format!(
                    "got a shorter string than what we wanted (characters match otherwise) and the missing characters are: {}",
                    suffix(want, i)
                )
            }
            Some(got_byte) if got_byte != want_byte => {
                return format!(
                    "strings differ at index {}, from that index on:\n##### got string #####\n{}\n##### want string #####\n{}",
                    i,
                    suffix(got, i),
                    suffix(want, i)
                )
            }
            Some(_) => {}
        }
    }

    if got.len() > want.len() {
        return format!(
            "got a longer string than what we wanted (characters match otherwise) and the extra characters are: {}",
            suffix(got, want.len())
        );
    }

    String::new()
}

fn suffix(bytes: &[u8], from: usize) -> Cow<'_, str> {
    String::from_utf8_lossy(&bytes[from..])
}
