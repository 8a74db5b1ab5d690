use crate::format::join_with_commas;
use anyhow::Result;
use std::io::Write;

/// Compose the greeting line for a list of names.
///
/// The names are joined with `", "` and wrapped in the fixed `"Hello "`
/// prefix and `"!"` suffix. No line terminator is appended; that is the
/// output sink's concern, see [`write_greeting`].
///
/// Example
/// ```
/// use greeter::greeting::greeting_line;
/// assert_eq!(greeting_line(["Alice", "Bob"]), "Hello Alice, Bob!");
/// ```
pub fn greeting_line<I>(names: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    format!("Hello {}!", join_with_commas(names))
}

/// Write the greeting line for `names`, newline-terminated, to `out`.
///
/// The only failure is an I/O error from the sink, which is propagated
/// unchanged.
pub fn write_greeting<I>(out: &mut dyn Write, names: I) -> Result<()>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    writeln!(out, "{}", greeting_line(names))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names;

    #[test]
    fn test_greeting_line_joins_names_with_commas() {
        assert_eq!(greeting_line(["Alice", "Bob"]), "Hello Alice, Bob!");
    }

    #[test]
    fn test_greeting_line_single_name() {
        assert_eq!(greeting_line(["Alice"]), "Hello Alice!");
    }

    #[test]
    fn test_greeting_line_without_names() {
        assert_eq!(greeting_line(Vec::<String>::new()), "Hello !");
    }

    #[test]
    fn test_write_greeting_appends_newline() {
        let mut out = Vec::new();
        write_greeting(&mut out, ["Ada"]).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "Hello Ada!\n");
    }

    #[test]
    fn test_write_greeting_default_names() {
        let mut out = Vec::new();
        write_greeting(&mut out, names::DEFAULT_NAMES).unwrap();

        let s = String::from_utf8(out).unwrap();
        assert_eq!(s, "Hello Alice, Bob, Carol!\n");
    }
}
