//! @acp:module "Comment Lexer"
//! @acp:summary "Line-by-line comment span detection for C-style and hash-style languages"
//! @acp:domain cli
//! @acp:layer parser
//!
//! Works one line at a time and carries only an `in_block` flag between
//! lines. String literals are skipped within a line; strings spanning
//! several lines are not tracked.

use std::path::Path;

use crate::item::{Defaults, TodoItem};
use crate::parse::parse_annotation;

/// @acp:summary "Comment delimiters and string quotes of one language"
#[derive(Debug, Clone, Copy)]
pub struct CommentSyntax {
    /// Prefixes that open a comment running to end of line
    pub line_prefixes: &'static [&'static str],
    /// Opening and closing sequence of block comments
    pub block: Option<(&'static str, &'static str)>,
    /// Characters that open and close a string literal
    pub string_delims: &'static [char],
    /// Openers and closers of strings without backslash escapes, longest first
    pub raw_strings: &'static [(&'static str, &'static str)],
    /// `'` opens a char literal (`'x'`, `'\n'`) or is left alone (lifetimes)
    pub char_literals: bool,
}

/// A comment fragment found on one source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSpan<'a> {
    /// 1-based line number
    pub line_number: usize,
    /// Comment text with the opening delimiter removed
    pub text: &'a str,
}

/// @acp:summary "Collect comment spans of a whole source text, in line order"
pub fn comment_spans<'a>(source: &'a str, syntax: &CommentSyntax) -> Vec<RawSpan<'a>> {
    let mut spans = Vec::new();
    let mut in_block = false;

    for (idx, line) in source.lines().enumerate() {
        scan_line(line, idx + 1, syntax, &mut in_block, &mut spans);
    }

    spans
}

fn scan_line<'a>(
    line: &'a str,
    line_number: usize,
    syntax: &CommentSyntax,
    in_block: &mut bool,
    spans: &mut Vec<RawSpan<'a>>,
) {
    let mut pos = 0;

    if *in_block {
        let Some((_, close)) = syntax.block else {
            *in_block = false;
            return;
        };
        match line.find(close) {
            Some(end) => {
                spans.push(RawSpan { line_number, text: &line[..end] });
                *in_block = false;
                pos = end + close.len();
            }
            None => {
                spans.push(RawSpan { line_number, text: line });
                return;
            }
        }
    }

    while pos < line.len() {
        let rest = &line[pos..];

        if let Some(prefix) = syntax.line_prefixes.iter().find(|p| rest.starts_with(**p)) {
            spans.push(RawSpan {
                line_number,
                text: &rest[prefix.len()..],
            });
            return;
        }

        if let Some((open, close)) = syntax.block {
            if let Some(body) = rest.strip_prefix(open) {
                match body.find(close) {
                    Some(end) => {
                        spans.push(RawSpan { line_number, text: &body[..end] });
                        pos += open.len() + end + close.len();
                        continue;
                    }
                    None => {
                        spans.push(RawSpan { line_number, text: body });
                        *in_block = true;
                        return;
                    }
                }
            }
        }

        if let Some((open, close)) = raw_string_at(line, pos, syntax) {
            let body = pos + open.len();
            pos = line[body..]
                .find(close)
                .map_or(line.len(), |end| body + end + close.len());
            continue;
        }

        let Some(ch) = rest.chars().next() else {
            break;
        };
        pos += ch.len_utf8();
        if ch == '\'' && syntax.char_literals {
            pos = skip_char_literal(line, pos).unwrap_or(pos);
        } else if syntax.string_delims.contains(&ch) {
            pos = skip_string(line, pos, ch);
        }
    }
}

/// Raw string opener starting at `pos`. Openers beginning with a letter
/// (`r"`, `br#"`) must not continue an identifier.
fn raw_string_at(
    line: &str,
    pos: usize,
    syntax: &CommentSyntax,
) -> Option<(&'static str, &'static str)> {
    let rest = &line[pos..];
    let (open, close) = syntax
        .raw_strings
        .iter()
        .find(|(open, _)| rest.starts_with(*open))?;

    let starts_with_letter = open.chars().next().is_some_and(|c| c.is_alphabetic());
    let continues_ident = line[..pos]
        .chars()
        .next_back()
        .is_some_and(|c| c.is_alphanumeric() || c == '_');
    if starts_with_letter && continues_ident {
        return None;
    }
    Some((*open, *close))
}

/// Byte offset just past a char literal whose opening quote ends at `start`,
/// or `None` when the quote is a lifetime or label.
fn skip_char_literal(line: &str, start: usize) -> Option<usize> {
    let rest = &line[start..];
    let mut chars = rest.char_indices();
    let (_, first) = chars.next()?;

    if first == '\\' {
        let (escaped_at, escaped) = chars.next()?;
        let search_from = escaped_at + escaped.len_utf8();
        // longest escape is `\u{10FFFF}`
        let end = rest[search_from..].find('\'').filter(|&end| end <= 8)?;
        return Some(start + search_from + end + 1);
    }

    let (close_at, close) = chars.next()?;
    (close == '\'').then_some(start + close_at + 1)
}

/// Byte offset just past the closing quote, or end of line if unterminated
fn skip_string(line: &str, start: usize, quote: char) -> usize {
    let mut escaped = false;
    for (offset, ch) in line[start..].char_indices() {
        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == quote {
            return start + offset + ch.len_utf8();
        }
    }
    line.len()
}

/// @acp:summary "Extract TODO items from source text using the given comment syntax"
/// At most one item is produced per line; items are line-ascending.
pub fn extract_items(
    path: &Path,
    source: &str,
    syntax: &CommentSyntax,
    defaults: &Defaults,
) -> Vec<TodoItem> {
    let mut items = Vec::new();
    let mut last_line = 0;

    for span in comment_spans(source, syntax) {
        if span.line_number == last_line {
            continue;
        }
        if let Some(item) = parse_annotation(span.text, path, span.line_number, defaults) {
            last_line = span.line_number;
            items.push(item);
        }
    }

    items
}
