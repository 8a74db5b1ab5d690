//! String joining for the greeting line.

/// Join a sequence of strings with the `", "` separator.
///
/// The separator is inserted between each adjacent pair of elements — not
/// before the first, not after the last — so the result contains exactly
/// `len - 1` separators for a non-empty input and is the empty string for an
/// empty input. Elements pass through verbatim: duplicates and empty strings
/// are kept, nothing is escaped or validated.
///
/// Example
/// ```
/// use greeter::join_with_commas;
/// assert_eq!(join_with_commas(["a", "b", "c"]), "a, b, c");
/// assert_eq!(join_with_commas(Vec::<String>::new()), "");
/// ```
pub fn join_with_commas<I>(parts: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut out = String::new();
    for (i, part) in parts.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(part.as_ref());
    }
    out
}
