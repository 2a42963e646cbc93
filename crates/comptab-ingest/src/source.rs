//! Line sources and line counting.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use crate::classify::is_data_line;
use crate::error::{IngestError, Result};

/// Every line of a source, loaded eagerly.
#[derive(Debug, Clone)]
pub struct SourceLines {
    pub lines: Vec<String>,
    /// Number of lines used to bound the header-row index. For files this is
    /// the number of terminated lines, after `\r\n` and lone `\r` endings
    /// are read as `\n`.
    pub total_rows: usize,
}

/// Something the readers can pull a complete set of lines from.
pub trait LineSource {
    /// Human-readable name used in logs and errors.
    fn describe(&self) -> String;

    fn load(self) -> Result<SourceLines>;
}

/// A table file on disk.
#[derive(Debug, Clone, Copy)]
pub struct FileSource<'a> {
    path: &'a Path,
}

impl<'a> FileSource<'a> {
    pub fn new(path: &'a Path) -> Self {
        Self { path }
    }
}

impl LineSource for FileSource<'_> {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(self) -> Result<SourceLines> {
        let content =
            std::fs::read_to_string(self.path).map_err(|e| read_error(self.path, e))?;
        let content = normalize_line_endings(content);
        let total_rows = content.bytes().filter(|&byte| byte == b'\n').count();
        let lines = content.lines().map(str::to_string).collect();
        Ok(SourceLines { lines, total_rows })
    }
}

/// Lines already held in memory.
#[derive(Debug, Clone, Copy)]
pub struct TextSource<'a, S> {
    lines: &'a [S],
}

impl<'a, S: AsRef<str>> TextSource<'a, S> {
    pub fn new(lines: &'a [S]) -> Self {
        Self { lines }
    }
}

impl<S: AsRef<str>> LineSource for TextSource<'_, S> {
    fn describe(&self) -> String {
        format!("<{} lines of text>", self.lines.len())
    }

    fn load(self) -> Result<SourceLines> {
        let lines: Vec<String> = self
            .lines
            .iter()
            .map(|line| line.as_ref().trim_end_matches(['\n', '\r']).to_string())
            .collect();
        let total_rows = lines.len();
        Ok(SourceLines { lines, total_rows })
    }
}

/// Classic Mac files end lines with a bare `\r`.
fn normalize_line_endings(content: String) -> String {
    if content.contains('\r') {
        content.replace("\r\n", "\n").replace('\r', "\n")
    } else {
        content
    }
}

fn read_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

fn open(path: &Path) -> Result<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| read_error(path, e))
}

/// Count `\n`-terminated lines in a file, like `wc -l`.
pub fn count_lines(path: &Path) -> Result<usize> {
    let mut reader = open(path)?;
    let mut count = 0usize;
    loop {
        let buffer = reader.fill_buf().map_err(|e| IngestError::FileRead {
            path: PathBuf::from(path),
            source: e,
        })?;
        if buffer.is_empty() {
            break;
        }
        count += buffer.iter().filter(|&&byte| byte == b'\n').count();
        let consumed = buffer.len();
        reader.consume(consumed);
    }
    Ok(count)
}

/// Count lines that are neither blank nor start with a `skip` character.
pub fn count_data_lines(path: &Path, skip: &str) -> Result<usize> {
    let reader = open(path)?;
    let mut count = 0usize;
    for line in reader.lines() {
        let line = line.map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        if is_data_line(&line, skip) {
            count += 1;
        }
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_table(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_count_lines_matches_newlines() {
        let file = create_temp_table("# header\n1 2\n\n3 4\n");
        assert_eq!(count_lines(file.path()).unwrap(), 4);

        // last line without a newline is not counted
        let file = create_temp_table("1 2\n3 4");
        assert_eq!(count_lines(file.path()).unwrap(), 1);
    }

    #[test]
    fn test_count_data_lines() {
        let file = create_temp_table("# header\n1 2\n\n   \n3 4\n%note\n");
        assert_eq!(count_data_lines(file.path(), "#").unwrap(), 3);
        assert_eq!(count_data_lines(file.path(), "#%").unwrap(), 2);
    }

    #[test]
    fn test_missing_file() {
        let result = count_lines(Path::new("/definitely/not/here.txt"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }

    #[test]
    fn test_file_source_load() {
        let file = create_temp_table("a b\r\n1 2\r\n3 4");
        let loaded = FileSource::new(file.path()).load().unwrap();
        assert_eq!(loaded.lines, vec!["a b", "1 2", "3 4"]);
        assert_eq!(loaded.total_rows, 2);
    }

    #[test]
    fn test_file_source_load_cr_only() {
        let file = create_temp_table("a b\r1 2\r3 4\r");
        let loaded = FileSource::new(file.path()).load().unwrap();
        assert_eq!(loaded.lines, vec!["a b", "1 2", "3 4"]);
        assert_eq!(loaded.total_rows, 3);

        let file = create_temp_table("a b\r\n1 2\r3 4\n");
        let loaded = FileSource::new(file.path()).load().unwrap();
        assert_eq!(loaded.lines, vec!["a b", "1 2", "3 4"]);
        assert_eq!(loaded.total_rows, 3);
    }

    #[test]
    fn test_text_source_load() {
        let text = ["a b\n", "1 2"];
        let loaded = TextSource::new(&text).load().unwrap();
        assert_eq!(loaded.lines, vec!["a b", "1 2"]);
        assert_eq!(loaded.total_rows, 2);
    }
}
