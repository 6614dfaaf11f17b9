//! Implementation of the `bkreview cat` command.

use super::open_tool;
use crate::cli::CatArgs;
use bkreview::config::Config;
use bkreview::error::{BkError, Result};
use bkreview::revision::Revision;
use std::io::Write;

/// Execute the `bkreview cat` command.
///
/// Writes the raw file contents to stdout, byte for byte.
pub fn cmd_cat(config: &Config, args: CatArgs) -> Result<()> {
    let tool = open_tool(config)?;
    let revision = Revision::parse(&args.revision);

    let content = tool.get_file(&args.path, &revision, args.base_commit.as_deref())?;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(&content)
        .and_then(|()| stdout.flush())
        .map_err(|e| BkError::UserError(format!("failed to write to stdout: {}", e)))
}
