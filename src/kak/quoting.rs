//! Kakoune single-quote quoting.
//!
//! Kakoune quotes a word as `'...'`, doubling any embedded `'`. The same
//! form comes back from `echo -quoting kakoune`.

/// Quote a word for a Kakoune command line.
///
/// # Example
///
/// ```
/// use kks::kak::quoting::quote;
///
/// assert_eq!(quote("it's"), "'it''s'");
/// ```
pub fn quote(word: &str) -> String {
    format!("'{}'", word.replace('\'', "''"))
}

/// Split `echo -quoting kakoune` output into its values.
///
/// Quoted words are unescaped, unquoted words are taken verbatim, and
/// whitespace between words is dropped. An unterminated quote runs to the
/// end of the input.
///
/// # Example
///
/// ```
/// use kks::kak::quoting::parse_quoted;
///
/// assert_eq!(parse_quoted("'a.txt' 'it''s.md'"), vec!["a.txt", "it's.md"]);
/// ```
pub fn parse_quoted(output: &str) -> Vec<String> {
    let mut values = Vec::new();
    let mut chars = output.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        let mut value = String::new();
        if c == '\'' {
            chars.next();
            while let Some(c) = chars.next() {
                if c == '\'' {
                    if chars.peek() == Some(&'\'') {
                        chars.next();
                        value.push('\'');
                    } else {
                        break;
                    }
                } else {
                    value.push(c);
                }
            }
        } else {
            while let Some(&c) = chars.peek() {
                if c.is_whitespace() {
                    break;
                }
                value.push(c);
                chars.next();
            }
        }
        values.push(value);
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_plain_word() {
        assert_eq!(quote("main"), "'main'");
    }

    #[test]
    fn quote_empty_word() {
        assert_eq!(quote(""), "''");
    }

    #[test]
    fn parse_empty_output() {
        assert!(parse_quoted("").is_empty());
        assert!(parse_quoted("  \n").is_empty());
    }

    #[test]
    fn parse_keeps_inner_whitespace() {
        assert_eq!(
            parse_quoted("'my file.txt' '*debug*'"),
            vec!["my file.txt", "*debug*"]
        );
    }

    #[test]
    fn parse_keeps_newlines_inside_values() {
        assert_eq!(parse_quoted("'line one\nline two'"), vec!["line one\nline two"]);
    }

    #[test]
    fn parse_empty_quoted_value() {
        assert_eq!(parse_quoted("'' 'x'"), vec!["", "x"]);
    }

    #[test]
    fn parse_unquoted_words() {
        assert_eq!(parse_quoted("42 'b'"), vec!["42", "b"]);
    }

    #[test]
    fn parse_unterminated_quote() {
        assert_eq!(parse_quoted("'abc"), vec!["abc"]);
    }

    #[test]
    fn quote_then_parse_recovers_word() {
        let word = "don't 'stop'";
        assert_eq!(parse_quoted(&quote(word)), vec![word]);
    }
}
