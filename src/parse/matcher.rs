//! @acp:module "Annotation Matcher"
//! @acp:summary "Recognizes a TODO marker and splits description from metadata tail"
//! @acp:domain cli
//! @acp:layer service

use std::sync::LazyLock;

use regex::Regex;

/// Matches a TODO marker at the start of comment content.
/// Leading comment punctuation is skipped; the marker must be followed by a
/// colon, whitespace or end of text.
/// Groups: 1=everything after the marker
static TODO_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)^[\s/*#!;-]*todo(?:\s*:|\s|$)(.*)$").unwrap()
});

/// @acp:summary "Description and raw metadata tail of one annotation"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationMatch {
    /// Trimmed free text before the first unescaped `|`
    pub description: String,
    /// Unparsed text after the first unescaped `|`, if any
    pub metadata_tail: Option<String>,
}

/// @acp:summary "Match a TODO marker in one comment span"
/// Returns `None` when there is no marker or nothing follows it.
pub fn match_annotation(text: &str) -> Option<AnnotationMatch> {
    let caps = TODO_PATTERN.captures(text)?;
    let rest = caps.get(1).map(|m| m.as_str()).unwrap_or_default();

    let (head, tail) = match find_unescaped_pipe(rest) {
        Some(idx) => (&rest[..idx], Some(&rest[idx + 1..])),
        None => (rest, None),
    };

    let description = unescape_pipes(head).trim().to_string();
    if description.is_empty() {
        return None;
    }

    let metadata_tail = tail
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string);

    Some(AnnotationMatch {
        description,
        metadata_tail,
    })
}

/// Byte index of the first `|` not preceded by a backslash
fn find_unescaped_pipe(s: &str) -> Option<usize> {
    let mut escaped = false;
    for (idx, ch) in s.char_indices() {
        match ch {
            '\\' if !escaped => escaped = true,
            '|' if !escaped => return Some(idx),
            _ => escaped = false,
        }
    }
    None
}

/// Split on unescaped `|`, unescaping `\|` inside each segment
pub(crate) fn split_unescaped_pipes(s: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut rest = s;
    while let Some(idx) = find_unescaped_pipe(rest) {
        segments.push(unescape_pipes(&rest[..idx]));
        rest = &rest[idx + 1..];
    }
    segments.push(unescape_pipes(rest));
    segments
}

fn unescape_pipes(s: &str) -> String {
    s.replace("\\|", "|")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(text: &str) -> (String, Option<String>) {
        let m = match_annotation(text).expect("expected a match");
        (m.description, m.metadata_tail)
    }

    #[test]
    fn test_line_comment_with_colon() {
        assert_eq!(
            matched("// TODO: Fix the parser  "),
            ("Fix the parser".to_string(), None)
        );
    }

    #[test]
    fn test_marker_is_case_insensitive() {
        assert_eq!(matched("todo: a").0, "a");
        assert_eq!(matched("ToDo: b").0, "b");
        assert_eq!(matched("TODO c").0, "c");
    }

    #[test]
    fn test_colon_is_optional() {
        assert_eq!(matched("TODO handle retries").0, "handle retries");
        assert_eq!(matched("TODO : spaced colon").0, "spaced colon");
        assert_eq!(matched("TODO:no space").0, "no space");
    }

    #[test]
    fn test_leading_comment_punctuation_is_skipped() {
        assert_eq!(matched("   * TODO: inside javadoc").0, "inside javadoc");
        assert_eq!(matched("# todo: python").0, "python");
        assert_eq!(matched("/// TODO: rustdoc").0, "rustdoc");
        assert_eq!(matched("//! TODO: inner doc").0, "inner doc");
        assert_eq!(matched("-- TODO: sql").0, "sql");
    }

    #[test]
    fn test_metadata_tail_is_split_at_first_pipe() {
        let (desc, tail) = matched("// todo: Fix null check | priority: high | category: bug");
        assert_eq!(desc, "Fix null check");
        assert_eq!(tail.as_deref(), Some("priority: high | category: bug"));
    }

    #[test]
    fn test_escaped_pipe_stays_in_description() {
        let (desc, tail) = matched(r"TODO: support a \| b syntax | priority: low");
        assert_eq!(desc, "support a | b syntax");
        assert_eq!(tail.as_deref(), Some("priority: low"));
    }

    #[test]
    fn test_blank_tail_is_none() {
        assert_eq!(matched("TODO: done soon |   "), ("done soon".to_string(), None));
    }

    #[test]
    fn test_marker_without_content_does_not_match() {
        assert!(match_annotation("// TODO").is_none());
        assert!(match_annotation("// TODO:   ").is_none());
        assert!(match_annotation("// TODO: | priority: high").is_none());
    }

    #[test]
    fn test_text_without_marker_does_not_match() {
        for text in [
            "",
            "// regular comment",
            "// fix later",
            "let x = 1;",
            "/* block */",
        ] {
            assert!(match_annotation(text).is_none(), "{:?}", text);
        }
    }

    #[test]
    fn test_marker_must_be_a_whole_word() {
        assert!(match_annotation("// TODOs are tracked elsewhere").is_none());
        assert!(match_annotation("// todo-list widget").is_none());
    }

    #[test]
    fn test_marker_not_at_start_does_not_match() {
        assert!(match_annotation("// remember the TODO: later").is_none());
    }

    #[test]
    fn test_split_unescaped_pipes() {
        assert_eq!(
            split_unescaped_pipes(r"a | b\|c | d"),
            vec!["a ".to_string(), " b|c ".to_string(), " d".to_string()]
        );
        assert_eq!(split_unescaped_pipes("single"), vec!["single".to_string()]);
    }
}
