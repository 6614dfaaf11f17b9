//! Per-file change records produced by the diff parser.

use crate::revision::Revision;
use std::borrow::Cow;

/// Header facts gathered for one file section while its header is parsed.
///
/// Every field starts unset; the header hooks fill in what the text reveals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderInfo {
    pub orig_file: Option<Vec<u8>>,
    pub new_file: Option<Vec<u8>>,
    pub orig_info: Option<Revision>,
    pub new_info: Option<Revision>,
    pub copied: bool,
    pub deleted: bool,
    pub moved: bool,
    pub binary: bool,
}

/// One file touched by a diff.
///
/// Paths stay raw bytes; use the `*_lossy` accessors where text is needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChange {
    /// Path before the change.
    pub orig_file: Vec<u8>,
    /// Path after the change.
    pub new_file: Vec<u8>,
    /// Revision of the original side.
    pub orig_info: Revision,
    /// Revision of the new side.
    pub new_info: Revision,
    pub copied: bool,
    pub deleted: bool,
    pub moved: bool,
    pub binary: bool,
    /// Number of `+` lines in the hunk body.
    pub insert_count: usize,
    /// Number of `-` lines in the hunk body.
    pub delete_count: usize,
    /// The section's raw text: header lines followed by the hunk body.
    pub data: Vec<u8>,
}

impl FileChange {
    /// Finish a header into a record.
    ///
    /// Returns `None` unless the header named the new file. A missing
    /// original path defaults to the new one, missing revisions to
    /// [`Revision::Unknown`].
    pub fn from_header(info: HeaderInfo) -> Option<Self> {
        let new_file = info.new_file?;

        Some(Self {
            orig_file: info.orig_file.unwrap_or_else(|| new_file.clone()),
            new_file,
            orig_info: info.orig_info.unwrap_or(Revision::Unknown),
            new_info: info.new_info.unwrap_or(Revision::Unknown),
            copied: info.copied,
            deleted: info.deleted,
            moved: info.moved,
            binary: info.binary,
            insert_count: 0,
            delete_count: 0,
            data: Vec::new(),
        })
    }

    pub fn orig_file_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.orig_file)
    }

    pub fn new_file_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.new_file)
    }

    /// Append one line (plus newline) to the section text.
    pub(crate) fn push_line(&mut self, line: &[u8]) {
        self.data.extend_from_slice(line);
        self.data.push(b'\n');
    }
}
