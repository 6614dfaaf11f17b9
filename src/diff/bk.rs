//! BitKeeper's diff header dialect.
//!
//! A file section may open with a special header block:
//!
//! ```text
//! ==== src/new.c ====
//! <one metadata line>
//!   bk cp src/old.c src/new.c
//! ```
//!
//! The indented lines carry at most one operation (`bk cp`, `Delete:` or
//! `Rename:`). After the block comes either `Binary files differ` or a
//! `---`/`+++` pair whose paths are prefixed with the revision
//! (`--- 1.5/src/new.c<TAB>...`).

use super::driver::{DiffParser, HeaderHooks};
use super::helpers::{rfind, strip_revision_component};
use super::lines::DiffLines;
use super::record::HeaderInfo;
use crate::revision::Revision;
use regex::bytes::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static SPECIAL_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)^==== (?P<filename>.*) ====").expect("Invalid special header regex")
});

static OLD_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)^--- (?P<filename>(?P<revision>[^/]*).*?)\t")
        .expect("Invalid old marker regex")
});

static NEW_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)^\+\+\+ (?P<filename>(?P<revision>[^/]*).*?)\t")
        .expect("Invalid new marker regex")
});

/// Metadata lines in a special header block are indented by two spaces.
const INDENT: &[u8] = b"  ";

const DELIMITER: &[u8] = b"====";

const BINARY_MARKER: &[u8] = b"Binary files differ";

const NULL_DEVICE: &[u8] = b"/dev/null";

/// Copy destination → copy source, for one parse pass.
pub type CopyTable = HashMap<Vec<u8>, Vec<u8>>;

/// A BitKeeper diff parser: the generic driver with BitKeeper header hooks.
pub type BkDiffParser = DiffParser<BkHeaders>;

impl DiffParser<BkHeaders> {
    /// A fresh parser over `data` with an empty copy table.
    pub fn bitkeeper(data: impl Into<Vec<u8>>) -> Self {
        DiffParser::new(data, BkHeaders::default())
    }

    /// The changeset the diff was taken against.
    ///
    /// BitKeeper diffs carry per-file revisions only, so this is always `None`.
    pub fn orig_commit_id(&self) -> Option<&str> {
        None
    }
}

/// The operation recorded in a special header block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// `  bk cp <src> <dst>`
    Copied(Vec<u8>),
    /// `  Delete: <src>`
    Deleted(Vec<u8>),
    /// `  Rename: <src> -> <dst>`
    Moved(Vec<u8>),
}

impl Operation {
    /// Match an indented header line against the three operations, in the
    /// order copied, deleted, moved.
    pub fn parse(line: &[u8]) -> Option<Self> {
        if let Some(rest) = line.strip_prefix(b"  bk cp ") {
            let end = rfind(rest, b" ")?;
            return Some(Operation::Copied(rest[..end].to_vec()));
        }

        if let Some(rest) = line.strip_prefix(b"  Delete: ") {
            return Some(Operation::Deleted(rest.to_vec()));
        }

        if let Some(rest) = line.strip_prefix(b"  Rename: ") {
            let end = rfind(rest, b" -> ")?;
            return Some(Operation::Moved(rest[..end].to_vec()));
        }

        None
    }

    /// The path the operation started from.
    pub fn source(&self) -> &[u8] {
        match self {
            Operation::Copied(src) | Operation::Deleted(src) | Operation::Moved(src) => src,
        }
    }
}

/// A `---` or `+++` marker line.
struct Marker<'a> {
    filename: &'a [u8],
    revision: &'a [u8],
}

impl<'a> Marker<'a> {
    fn parse(pattern: &Regex, line: &'a [u8]) -> Option<Self> {
        let caps = pattern.captures(line)?;
        Some(Self {
            filename: caps.name("filename")?.as_bytes(),
            revision: caps.name("revision")?.as_bytes(),
        })
    }
}

/// Header hooks for BitKeeper diffs.
///
/// Owns the copy table for the parse pass it belongs to.
#[derive(Debug, Default)]
pub struct BkHeaders {
    copies: CopyTable,
}

impl BkHeaders {
    /// Copies seen so far in this pass.
    #[cfg(test)]
    pub(crate) fn copies(&self) -> &CopyTable {
        &self.copies
    }

    /// Record `op` for `filename` on `info`.
    fn apply(&mut self, op: Operation, filename: &[u8], info: &mut HeaderInfo) {
        match &op {
            Operation::Copied(src) => {
                log::debug!(
                    "copy {} <- {}",
                    String::from_utf8_lossy(filename),
                    String::from_utf8_lossy(src)
                );
                self.copies.insert(filename.to_vec(), src.clone());
                info.copied = true;
            }
            Operation::Deleted(_) => info.deleted = true,
            Operation::Moved(_) => info.moved = true,
        }

        info.orig_file = Some(op.source().to_vec());
        info.orig_info = Some(Revision::Unknown);
        info.new_info = Some(Revision::Unknown);
    }
}

impl HeaderHooks for BkHeaders {
    fn parse_special_header(
        &mut self,
        lines: &DiffLines,
        linenum: usize,
        info: &mut HeaderInfo,
    ) -> usize {
        let Some(filename) = lines
            .get(linenum)
            .and_then(|line| SPECIAL_HEADER.captures(line))
            .and_then(|caps| caps.name("filename"))
            .map(|m| m.as_bytes().to_vec())
        else {
            return linenum;
        };

        // The line after the delimiter is metadata we have no use for.
        let mut linenum = linenum + 2;

        if let Some(source) = self.copies.get(&filename) {
            info.orig_file = Some(source.clone());
            info.copied = true;
        } else {
            info.orig_file = Some(filename.clone());

            let op = lines
                .get(linenum)
                .filter(|line| line.starts_with(INDENT))
                .and_then(Operation::parse);
            if let Some(op) = op {
                self.apply(op, &filename, info);
            }
        }

        info.new_file = Some(filename);

        while lines.starts_with(linenum, INDENT) {
            linenum += 1;
        }

        linenum
    }

    fn parse_diff_header(
        &mut self,
        lines: &DiffLines,
        linenum: usize,
        info: &mut HeaderInfo,
    ) -> usize {
        let mut linenum = linenum;

        if lines.get(linenum) == Some(BINARY_MARKER) {
            info.binary = true;
            info.new_info = Some(Revision::Unknown);
            linenum += 1;

            if linenum + 1 < lines.len() && lines.starts_with(linenum, DELIMITER) {
                info.orig_info = Some(Revision::PreCreation);
                linenum += 2;
            } else {
                info.orig_info = Some(Revision::Unknown);
            }

            return linenum;
        }

        let orig = lines
            .get(linenum)
            .and_then(|line| Marker::parse(&OLD_MARKER, line));
        let new = lines
            .get(linenum + 1)
            .and_then(|line| Marker::parse(&NEW_MARKER, line));

        if let (Some(orig), Some(new)) = (orig, new) {
            info.orig_info = Some(if orig.filename == NULL_DEVICE {
                Revision::PreCreation
            } else {
                Revision::from_label(orig.revision)
            });
            info.new_info = Some(Revision::from_label(new.revision));

            // Without a special header the markers are all we know about the file.
            if info.new_file.is_none() {
                let path = if new.filename == NULL_DEVICE {
                    strip_revision_component(orig.filename, orig.revision)
                } else {
                    strip_revision_component(new.filename, new.revision)
                };
                info.new_file = Some(path.to_vec());
            }

            linenum += 2;
        }

        linenum
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_copy_takes_text_before_last_space() {
        assert_eq!(
            Operation::parse(b"  bk cp src/old.c src/new.c"),
            Some(Operation::Copied(b"src/old.c".to_vec()))
        );
        assert_eq!(
            Operation::parse(b"  bk cp my file.c copy.c"),
            Some(Operation::Copied(b"my file.c".to_vec()))
        );
    }

    #[test]
    fn test_operation_delete_takes_rest_of_line() {
        assert_eq!(
            Operation::parse(b"  Delete: src/gone.c"),
            Some(Operation::Deleted(b"src/gone.c".to_vec()))
        );
    }

    #[test]
    fn test_operation_rename_takes_text_before_arrow() {
        let op = Operation::parse(b"  Rename: src/a.c -> src/b.c").unwrap();
        assert_eq!(op, Operation::Moved(b"src/a.c".to_vec()));
        assert_eq!(op.source(), b"src/a.c");
    }

    #[test]
    fn test_operation_requires_exact_keyword() {
        assert_eq!(Operation::parse(b"  Rename: no arrow here"), None);
        assert_eq!(Operation::parse(b"  bk cp lonely"), None);
        assert_eq!(Operation::parse(b"Delete: src/gone.c"), None);
        assert_eq!(Operation::parse(b"  Mode change"), None);
    }

    #[test]
    fn test_marker_revision_is_leading_component() {
        let marker = Marker::parse(&OLD_MARKER, b"--- 1.5/src/a.c\t2016-01-01 00:00:00").unwrap();
        assert_eq!(marker.filename, b"1.5/src/a.c");
        assert_eq!(marker.revision, b"1.5");
    }

    #[test]
    fn test_marker_requires_tab() {
        assert!(Marker::parse(&NEW_MARKER, b"+++ 1.6/src/a.c").is_none());
    }

    #[test]
    fn test_null_device_marker_has_empty_revision() {
        let marker = Marker::parse(&OLD_MARKER, b"--- /dev/null\t1970-01-01").unwrap();
        assert_eq!(marker.filename, NULL_DEVICE);
        assert_eq!(marker.revision, b"");
    }

    #[test]
    fn test_special_header_matches_non_utf8_names() {
        let caps = SPECIAL_HEADER.captures(b"==== caf\xe9.txt ====").unwrap();
        assert_eq!(caps.name("filename").unwrap().as_bytes(), b"caf\xe9.txt");
    }
}
