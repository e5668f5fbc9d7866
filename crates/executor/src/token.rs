//! Quote-aware tokenization of command argument text.
//!
//! Splits on a single separator character; a region between double-quote
//! characters is immune to splitting. The quote state toggles on every `"`
//! seen, with no nesting. Produced tokens keep their surrounding spaces;
//! callers strip them with [`trim_spaces`] before further parsing.

/// Lazy splitter over `source`, separating on `sep` outside double quotes.
///
/// The iterator is finite and non-restartable: each `next` consumes the
/// token it returns and advances through the remaining text.
#[derive(Debug)]
pub struct SplitOutsideQuotes<'a> {
    rest: Option<&'a str>,
    sep: char,
}

/// Split `source` on `sep`, treating double-quoted regions as opaque.
pub fn split_outside_quotes(source: &str, sep: char) -> SplitOutsideQuotes<'_> {
    SplitOutsideQuotes {
        rest: Some(source),
        sep,
    }
}

impl<'a> Iterator for SplitOutsideQuotes<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest?;
        let mut in_quotes = false;
        for (i, c) in rest.char_indices() {
            if c == '"' {
                in_quotes = !in_quotes;
            } else if c == self.sep && !in_quotes {
                self.rest = Some(&rest[i + c.len_utf8()..]);
                return Some(&rest[..i]);
            }
        }
        self.rest = None;
        Some(rest)
    }
}

/// Strip space characters (only `' '`, not general whitespace) from both
/// ends of a token.
pub fn trim_spaces(token: &str) -> &str {
    token.trim_matches(' ')
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn split(source: &str, sep: char) -> Vec<&str> {
        split_outside_quotes(source, sep).collect()
    }

    #[test]
    fn test_plain_split() {
        assert_eq!(split("a,b,c", ','), vec!["a", "b", "c"]);
        assert_eq!(split("a b c", ' '), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_quotes_suppress_splitting() {
        assert_eq!(
            split("unit_model=\"a,b\",driver=\"c\"", ','),
            vec!["unit_model=\"a,b\"", "driver=\"c\""]
        );
        assert_eq!(
            split("unit_model==\"a b\" unit_id>5", ' '),
            vec!["unit_model==\"a b\"", "unit_id>5"]
        );
    }

    #[test]
    fn test_quote_state_toggles_without_nesting() {
        // Three quotes: the separator after the third quote is outside.
        assert_eq!(split("\"a,b\"c\",d", ','), vec!["\"a,b\"c\",d"]);
    }

    #[test]
    fn test_empty_and_edge_tokens() {
        assert_eq!(split("", ','), vec![""]);
        assert_eq!(split(",", ','), vec!["", ""]);
        assert_eq!(split("a,,b", ','), vec!["a", "", "b"]);
        assert_eq!(split("a,", ','), vec!["a", ""]);
    }

    #[test]
    fn test_trim_spaces_only_spaces() {
        assert_eq!(trim_spaces("  a b  "), "a b");
        assert_eq!(trim_spaces("\ta\t"), "\ta\t");
        assert_eq!(trim_spaces("   "), "");
    }

    proptest! {
        #[test]
        fn prop_join_then_split_roundtrips(
            tokens in proptest::collection::vec("[a-z0-9=']{0,12}", 1..6)
        ) {
            let joined = tokens.join(",");
            let split: Vec<&str> = split_outside_quotes(&joined, ',').collect();
            prop_assert_eq!(split, tokens);
        }

        #[test]
        fn prop_quoted_regions_stay_whole(body in "[a-z ,]{0,16}") {
            let source = format!("x=\"{body}\"");
            let tokens: Vec<&str> = split_outside_quotes(&source, ',').collect();
            prop_assert_eq!(tokens, vec![source.as_str()]);
        }
    }
}
