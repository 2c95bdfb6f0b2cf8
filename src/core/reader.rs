use crate::utils::error::{RepositoryError, Result};
use csv::{ReaderBuilder, StringRecordsIntoIter};
use std::fs::File;
use std::path::{Path, PathBuf};

pub const TAB: u8 = b'\t';

/// Single-pass reader producing fixed-arity string tuples from a delimited
/// text source. Exhausted once iterated; not restartable.
pub struct RecordReader {
    path: PathBuf,
    expected: usize,
    records: StringRecordsIntoIter<File>,
}

impl RecordReader {
    pub fn open(path: &Path, expected: usize, skip_header: bool) -> Result<Self> {
        Self::open_with_separator(path, expected, TAB, skip_header)
    }

    pub fn open_with_separator(
        path: &Path,
        expected: usize,
        separator: u8,
        skip_header: bool,
    ) -> Result<Self> {
        let file = File::open(path).map_err(|source| RepositoryError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        // Quoting off: the sources carry raw text, no interior quoting.
        // Flexible so the arity check below reports the mismatch, not csv.
        let records = ReaderBuilder::new()
            .delimiter(separator)
            .has_headers(skip_header)
            .quoting(false)
            .flexible(true)
            .from_reader(file)
            .into_records();

        Ok(Self {
            path: path.to_path_buf(),
            expected,
            records,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Iterator for RecordReader {
    type Item = Result<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = match self.records.next()? {
            Ok(record) => record,
            Err(err) => return Some(Err(err.into())),
        };

        if record.len() != self.expected {
            let line = record
                .position()
                .map(|pos| pos.line() as usize - 1)
                .unwrap_or(0);
            return Some(Err(RepositoryError::MalformedRecord {
                path: self.path.clone(),
                line,
                actual: record.len(),
                expected: self.expected,
            }));
        }

        Some(Ok(record.iter().map(str::to_string).collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_reads_fixed_arity_tuples() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(
            &dir,
            "students.txt",
            "10103\tBaldwin, C\tSFEN\n10115\tWyatt, X\tSFEN\n",
        );

        let records: Vec<Vec<String>> = RecordReader::open(&path, 3, false)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0], vec!["10103", "Baldwin, C", "SFEN"]);
        assert_eq!(records[1], vec!["10115", "Wyatt, X", "SFEN"]);
    }

    #[test]
    fn test_malformed_record_reports_line_index() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(
            &dir,
            "grades.txt",
            "10103\tSSW 567\tA\t98765\n10103\tSSW 564\tA-\n",
        );

        let mut reader = RecordReader::open(&path, 4, false).unwrap();
        assert!(reader.next().unwrap().is_ok());

        match reader.next().unwrap() {
            Err(RepositoryError::MalformedRecord {
                line,
                actual,
                expected,
                ..
            }) => {
                assert_eq!(line, 1);
                assert_eq!(actual, 3);
                assert_eq!(expected, 4);
            }
            other => panic!("expected MalformedRecord, got {:?}", other),
        }
    }

    #[test]
    fn test_lines_before_fault_remain_valid() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "bad.txt", "a\tb\tc\nonly one field\n");

        let mut reader = RecordReader::open(&path, 3, false).unwrap();
        assert_eq!(reader.next().unwrap().unwrap(), vec!["a", "b", "c"]);
        assert!(reader.next().unwrap().is_err());
    }

    #[test]
    fn test_skip_header_discards_first_line() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(
            &dir,
            "with_header.txt",
            "CWID\tName\tMajor\n10103\tBaldwin, C\tSFEN\n",
        );

        let records: Vec<Vec<String>> = RecordReader::open(&path, 3, true)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0][0], "10103");
    }

    #[test]
    fn test_missing_source_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("does_not_exist.txt");

        match RecordReader::open(&path, 3, false) {
            Err(RepositoryError::SourceUnavailable { path: reported, .. }) => {
                assert_eq!(reported, path);
            }
            other => panic!("expected SourceUnavailable, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_crlf_terminators_are_trimmed() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "crlf.txt", "10103\tBaldwin, C\tSFEN\r\n");

        let records: Vec<Vec<String>> = RecordReader::open(&path, 3, false)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(records[0][2], "SFEN");
    }

    #[test]
    fn test_custom_separator() {
        let dir = TempDir::new().unwrap();
        let path = write_fixture(&dir, "pipes.txt", "10103|Baldwin, C|SFEN\n");

        let records: Vec<Vec<String>> = RecordReader::open_with_separator(&path, 3, b'|', false)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(records[0], vec!["10103", "Baldwin, C", "SFEN"]);
    }
}
