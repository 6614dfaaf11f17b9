//! Diff parsing for BitKeeper output.
//!
//! The parser is split in two layers:
//! - [`DiffParser`] splits a payload into file sections and collects hunk
//!   bodies, delegating header recognition to a [`HeaderHooks`] implementation
//! - [`BkHeaders`] is that implementation for BitKeeper's dialect: `====`
//!   header blocks with copy/rename/delete annotations, binary markers, and
//!   revision-prefixed `---`/`+++` lines
//!
//! All input is treated as bytes. Paths stay bytes in [`FileChange`].

mod bk;
mod driver;
mod helpers;
mod lines;
mod record;


// Re-export public API
pub use bk::{BkDiffParser, BkHeaders, CopyTable, Operation};
pub use driver::{DiffParser, HeaderHooks};
pub use lines::DiffLines;
pub use record::{FileChange, HeaderInfo};

/// Parse a complete BitKeeper diff into its file records.
pub fn parse_bk_diff(data: impl Into<Vec<u8>>) -> Vec<FileChange> {
    BkDiffParser::bitkeeper(data).collect()
}
