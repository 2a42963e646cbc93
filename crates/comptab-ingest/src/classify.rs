//! Data-line selection and header extraction.

use crate::options::Delimiter;
use crate::tokenize::split_fields;

/// A line is data when it is not blank and its first character is not one of
/// the `skip` markers.
pub fn is_data_line(line: &str, skip: &str) -> bool {
    if line.trim().is_empty() {
        return false;
    }
    line.chars().next().is_some_and(|first| !skip.contains(first))
}

/// The data lines of `lines`, in order, with trailing whitespace removed.
pub fn data_lines<'a, S: AsRef<str>>(lines: &'a [S], skip: &str) -> Vec<&'a str> {
    lines
        .iter()
        .map(|line| line.as_ref())
        .filter(|line| is_data_line(line, skip))
        .map(str::trim_end)
        .collect()
}

/// Column names from line `row` of the original line sequence.
///
/// Leading skip markers are stripped before splitting, so `# a b c` yields
/// `["a", "b", "c"]`. Returns `None` when `row` is not below `total_rows`.
pub fn header_names<S: AsRef<str>>(
    lines: &[S],
    total_rows: usize,
    row: usize,
    skip: &str,
    delimiter: Delimiter,
) -> Option<Vec<String>> {
    if row >= total_rows {
        return None;
    }
    let line = lines.get(row)?.as_ref();
    let stripped = line.trim_start_matches(|ch: char| skip.contains(ch));
    let names = split_fields(stripped.trim_end(), delimiter)
        .into_iter()
        .map(|name| name.trim().to_string())
        .collect();
    Some(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_data_line() {
        assert!(is_data_line("1 2 3", "#"));
        assert!(!is_data_line("# comment", "#"));
        assert!(!is_data_line("   \t", "#"));
        assert!(!is_data_line("", "#"));
        // only the very first character is checked
        assert!(is_data_line("  # indented", "#"));
        assert!(!is_data_line("%x", "#%"));
        assert!(is_data_line("#x", ""));
    }

    #[test]
    fn test_data_lines() {
        let lines = ["# a b", "", "1 2   ", "#", "3 4"];
        assert_eq!(data_lines(&lines, "#"), vec!["1 2", "3 4"]);
    }

    #[test]
    fn test_header_names() {
        let lines = ["## sma   intens  ", "1 2"];
        assert_eq!(
            header_names(&lines, 2, 0, "#", Delimiter::Whitespace),
            Some(vec!["sma".to_string(), "intens".to_string()])
        );
        assert_eq!(header_names(&lines, 2, 2, "#", Delimiter::Whitespace), None);
        // bounded by total_rows, not by the number of lines held
        assert_eq!(header_names(&lines, 1, 1, "#", Delimiter::Whitespace), None);
    }

    #[test]
    fn test_header_names_with_char_delimiter() {
        let lines = ["#a, b ,c"];
        assert_eq!(
            header_names(&lines, 1, 0, "#", Delimiter::Char(',')),
            Some(vec!["a".to_string(), "b".to_string(), "c".to_string()])
        );
    }
}
