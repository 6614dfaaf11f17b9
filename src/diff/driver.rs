//! Generic section-splitting diff parser.
//!
//! The driver walks the diff line by line. At every line it asks the
//! [`HeaderHooks`] whether a file header starts there; if so a new
//! [`FileChange`] begins, otherwise the line is hunk body for the current one.
//! The header grammar lives entirely in the hooks, so one driver serves any
//! backend dialect.

use super::lines::DiffLines;
use super::record::{FileChange, HeaderInfo};

/// Extension points a backend implements to recognize its file headers.
///
/// Both hooks receive the index of the line to inspect and return the index
/// of the first line they did not consume. Returning `linenum` unchanged
/// means "nothing recognized here". Hooks must never fail: unrecognized or
/// truncated headers leave `info` partially filled.
pub trait HeaderHooks {
    /// Recognize a backend-specific header block preceding the standard markers.
    fn parse_special_header(
        &mut self,
        lines: &DiffLines,
        linenum: usize,
        info: &mut HeaderInfo,
    ) -> usize;

    /// Recognize the standard `---`/`+++` header (or its backend variant).
    fn parse_diff_header(&mut self, lines: &DiffLines, linenum: usize, info: &mut HeaderInfo)
    -> usize;
}

/// Streams the [`FileChange`] records of one diff payload in document order.
#[derive(Debug)]
pub struct DiffParser<H> {
    lines: DiffLines,
    hooks: H,
    pos: usize,
    current: Option<FileChange>,
}

impl<H: HeaderHooks> DiffParser<H> {
    pub fn new(data: impl Into<Vec<u8>>, hooks: H) -> Self {
        Self {
            lines: DiffLines::new(data),
            hooks,
            pos: 0,
            current: None,
        }
    }

    /// Try to read a file header at `linenum`.
    ///
    /// Returns the line after the header and the new record, or `None` when
    /// the hooks did not identify a file there.
    fn parse_change_header(&mut self, linenum: usize) -> Option<(usize, FileChange)> {
        let mut info = HeaderInfo::default();
        let next = self
            .hooks
            .parse_special_header(&self.lines, linenum, &mut info);
        let next = self.hooks.parse_diff_header(&self.lines, next, &mut info);

        let mut file = FileChange::from_header(info)?;

        // Always make progress, and never run past the end on a truncated header.
        let next = next.max(linenum + 1).min(self.lines.len().max(linenum + 1));

        for line in (linenum..next).filter_map(|i| self.lines.get(i)) {
            file.push_line(line);
        }

        log::debug!(
            "file section at line {}: {} -> {}",
            linenum + 1,
            file.orig_file_lossy(),
            file.new_file_lossy()
        );

        Some((next, file))
    }

    /// Attach one hunk body line to the current record.
    ///
    /// Preamble lines (before the first header) and body lines of binary
    /// records are dropped.
    fn parse_diff_line(&mut self, linenum: usize) {
        let (Some(line), Some(file)) = (self.lines.get(linenum), self.current.as_mut()) else {
            return;
        };

        if file.binary {
            return;
        }

        if line.starts_with(b"-") {
            file.delete_count += 1;
        } else if line.starts_with(b"+") {
            file.insert_count += 1;
        }
        file.push_line(line);
    }
}

impl<H: HeaderHooks> Iterator for DiffParser<H> {
    type Item = FileChange;

    fn next(&mut self) -> Option<FileChange> {
        while self.pos < self.lines.len() {
            match self.parse_change_header(self.pos) {
                Some((next, file)) => {
                    self.pos = next;
                    if let Some(finished) = self.current.replace(file) {
                        return Some(finished);
                    }
                }
                None => {
                    self.parse_diff_line(self.pos);
                    self.pos += 1;
                }
            }
        }

        self.current.take()
    }
}
