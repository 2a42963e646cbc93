//! Field splitting.

use crate::options::Delimiter;

/// Split one line into raw fields.
///
/// There is no quoting or escaping, but a brace group such as `{1,2,3}` is
/// never split by the outer delimiter. A `{` with no `}` after it on the line
/// is an ordinary character.
pub fn split_fields(line: &str, delimiter: Delimiter) -> Vec<&str> {
    match delimiter {
        Delimiter::Whitespace => split_whitespace_runs(line),
        Delimiter::Char(separator) => split_on_char(line, separator),
    }
}

fn split_whitespace_runs(line: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut start: Option<usize> = None;
    let mut in_braces = false;
    for (i, ch) in line.char_indices() {
        if ch.is_whitespace() && !in_braces {
            if let Some(begin) = start.take() {
                fields.push(&line[begin..i]);
            }
            continue;
        }
        match ch {
            '{' if opens_group(line, i) => in_braces = true,
            '}' => in_braces = false,
            _ => {}
        }
        start.get_or_insert(i);
    }
    if let Some(begin) = start {
        fields.push(&line[begin..]);
    }
    fields
}

fn split_on_char(line: &str, separator: char) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut begin = 0;
    let mut in_braces = false;
    for (i, ch) in line.char_indices() {
        match ch {
            _ if ch == separator && !in_braces => {
                fields.push(&line[begin..i]);
                begin = i + ch.len_utf8();
            }
            '{' if opens_group(line, i) => in_braces = true,
            '}' => in_braces = false,
            _ => {}
        }
    }
    fields.push(&line[begin..]);
    fields
}

/// Whether the `{` at byte `open` is closed later on the line.
fn opens_group(line: &str, open: usize) -> bool {
    line[open + 1..].contains('}')
}
