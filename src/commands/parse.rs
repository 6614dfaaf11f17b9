//! Implementation of the `bkreview parse` command.
//!
//! Reads a BitKeeper diff from a file or stdin and prints one JSON object per
//! file section. Parsing itself never fails; only I/O can.

use crate::cli::ParseArgs;
use bkreview::diff::{BkDiffParser, FileChange};
use bkreview::error::{BkError, Result};
use serde_json::{Value, json};
use std::io::{Read, Write};

/// Execute the `bkreview parse` command.
pub fn cmd_parse(args: ParseArgs) -> Result<()> {
    let data = match &args.file {
        Some(path) => std::fs::read(path).map_err(|e| {
            BkError::UserError(format!("failed to read diff '{}': {}", path.display(), e))
        })?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .map_err(|e| BkError::UserError(format!("failed to read stdin: {}", e)))?;
            buf
        }
    };

    let mut stdout = std::io::stdout().lock();
    write_records(data, &mut stdout)
        .map_err(|e| BkError::UserError(format!("failed to write to stdout: {}", e)))
}

/// Parse `data` and write one JSON line per record to `out`.
pub(super) fn write_records<W: Write>(data: Vec<u8>, out: &mut W) -> std::io::Result<()> {
    for file in BkDiffParser::bitkeeper(data) {
        writeln!(out, "{}", record_json(&file))?;
    }
    out.flush()
}

pub(super) fn record_json(file: &FileChange) -> Value {
    json!({
        "orig_file": file.orig_file_lossy(),
        "new_file": file.new_file_lossy(),
        "orig_info": file.orig_info.to_string(),
        "new_info": file.new_info.to_string(),
        "copied": file.copied,
        "deleted": file.deleted,
        "moved": file.moved,
        "binary": file.binary,
        "insert_count": file.insert_count,
        "delete_count": file.delete_count,
    })
}
