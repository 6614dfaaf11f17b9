//! Implementation of the `bkreview revision` command.

use crate::cli::RevisionArgs;
use bkreview::error::Result;
use bkreview::tool::BkTool;

/// Execute the `bkreview revision` command.
///
/// Prints the filename and the revision token, tab separated.
pub fn cmd_revision(args: RevisionArgs) -> Result<()> {
    println!("{}", render_revision(&args.file, &args.revision));
    Ok(())
}

pub(super) fn render_revision(file: &str, revision: &str) -> String {
    let (file, token) = BkTool::parse_diff_revision(file.as_bytes(), revision.as_bytes());
    format!("{}\t{}", String::from_utf8_lossy(&file), token)
}
