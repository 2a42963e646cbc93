//! Reader configuration.

use std::collections::BTreeSet;
use std::str::FromStr;

/// Field separator for table lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Delimiter {
    /// Any run of whitespace; leading and trailing whitespace is dropped.
    #[default]
    Whitespace,
    /// Every occurrence of the character; empty fields are kept.
    Char(char),
}

impl FromStr for Delimiter {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "" | "whitespace" | "ws" => Ok(Delimiter::Whitespace),
            "tab" | "\\t" => Ok(Delimiter::Char('\t')),
            _ => {
                let mut chars = value.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Ok(Delimiter::Char(ch)),
                    _ => Err(format!(
                        "delimiter must be a single character, 'tab' or 'whitespace', got '{value}'"
                    )),
                }
            }
        }
    }
}

/// How brace-delimited sub-list fields such as `{1,2,3}` are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubListMode {
    /// Sub-list fields are kept as raw strings.
    #[default]
    Off,
    /// Each sub-list column becomes one column holding n parallel arrays.
    Convert,
    /// Each sub-list column is replaced by n float columns.
    Expand,
}

impl SubListMode {
    pub fn recognizes_sub_lists(self) -> bool {
        !matches!(self, SubListMode::Off)
    }
}

/// Options for reading composite tables.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadOptions {
    /// Lines whose first character is one of these are skipped.
    pub skip: String,
    pub delimiter: Delimiter,
    /// Columns (0-based, original numbering) converted to integers.
    pub int_cols: BTreeSet<usize>,
    /// Columns left as raw strings.
    pub no_convert: BTreeSet<usize>,
    /// Substitute for unparsable entries in float columns.
    pub blank_value: f64,
    pub sub_lists: SubListMode,
    /// 0-based line number (counting every line of the source) holding the
    /// column names.
    pub column_row: Option<usize>,
    /// Suffixes for names of expanded sub-list columns; must match the
    /// sub-list arity.
    pub sub_list_suffixes: Option<Vec<String>>,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            skip: "#".to_string(),
            delimiter: Delimiter::Whitespace,
            int_cols: BTreeSet::new(),
            no_convert: BTreeSet::new(),
            blank_value: 0.0,
            sub_lists: SubListMode::Off,
            column_row: None,
            sub_list_suffixes: None,
        }
    }
}

impl ReadOptions {
    #[must_use]
    pub fn with_skip(mut self, skip: impl Into<String>) -> Self {
        self.skip = skip.into();
        self
    }

    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }

    #[must_use]
    pub fn with_int_cols(mut self, columns: impl IntoIterator<Item = usize>) -> Self {
        self.int_cols = columns.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_no_convert(mut self, columns: impl IntoIterator<Item = usize>) -> Self {
        self.no_convert = columns.into_iter().collect();
        self
    }

    #[must_use]
    pub fn with_blank_value(mut self, blank_value: f64) -> Self {
        self.blank_value = blank_value;
        self
    }

    #[must_use]
    pub fn with_sub_lists(mut self, mode: SubListMode) -> Self {
        self.sub_lists = mode;
        self
    }

    #[must_use]
    pub fn with_column_row(mut self, row: usize) -> Self {
        self.column_row = Some(row);
        self
    }

    #[must_use]
    pub fn with_sub_list_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sub_list_suffixes = Some(suffixes.into_iter().map(Into::into).collect());
        self
    }
}
