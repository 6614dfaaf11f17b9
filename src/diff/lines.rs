//! Line-addressable view over raw diff bytes.

use std::ops::Range;

/// The lines of a diff payload, without their terminators.
///
/// Lines are split on `\n`; a `\r` directly before the `\n` is dropped too.
/// All access is bounds-checked: asking for a line past the end yields `None`.
#[derive(Debug, Clone, Default)]
pub struct DiffLines {
    data: Vec<u8>,
    spans: Vec<Range<usize>>,
}

impl DiffLines {
    pub fn new(data: impl Into<Vec<u8>>) -> Self {
        let data = data.into();
        let mut spans = Vec::new();
        let mut start = 0;

        while start < data.len() {
            let end = data[start..]
                .iter()
                .position(|&b| b == b'\n')
                .map_or(data.len(), |offset| start + offset);

            let mut line_end = end;
            if line_end > start && data[line_end - 1] == b'\r' {
                line_end -= 1;
            }

            spans.push(start..line_end);
            start = end + 1;
        }

        Self { data, spans }
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The line at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        self.spans.get(index).map(|span| &self.data[span.clone()])
    }

    /// Whether the line at `index` exists and starts with `prefix`.
    pub fn starts_with(&self, index: usize, prefix: &[u8]) -> bool {
        self.get(index).is_some_and(|line| line.starts_with(prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_without_trailing_newline() {
        let lines = DiffLines::new(&b"one\ntwo"[..]);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines.get(0), Some(&b"one"[..]));
        assert_eq!(lines.get(1), Some(&b"two"[..]));
    }

    #[test]
    fn test_trailing_newline_adds_no_empty_line() {
        let lines = DiffLines::new(&b"one\ntwo\n"[..]);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_blank_lines_are_kept() {
        let lines = DiffLines::new(&b"one\n\nthree\n"[..]);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines.get(1), Some(&b""[..]));
    }

    #[test]
    fn test_crlf_is_stripped() {
        let lines = DiffLines::new(&b"one\r\ntwo\r\n"[..]);
        assert_eq!(lines.get(0), Some(&b"one"[..]));
        assert_eq!(lines.get(1), Some(&b"two"[..]));
    }

    #[test]
    fn test_out_of_bounds_is_none() {
        let lines = DiffLines::new(&b"only\n"[..]);
        assert_eq!(lines.get(1), None);
        assert!(!lines.starts_with(5, b"o"));
        assert!(lines.starts_with(0, b"on"));
    }

    #[test]
    fn test_empty_input() {
        let lines = DiffLines::new(Vec::new());
        assert!(lines.is_empty());
        assert_eq!(lines.get(0), None);
    }

    #[test]
    fn test_non_utf8_bytes_survive() {
        let lines = DiffLines::new(&b"caf\xe9\n"[..]);
        assert_eq!(lines.get(0), Some(&b"caf\xe9"[..]));
    }
}
