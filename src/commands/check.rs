//! Implementation of the `bkreview check` command.

use crate::cli::CheckArgs;
use bkreview::config::Config;
use bkreview::error::Result;
use bkreview::tool::BkTool;

/// Execute the `bkreview check` command.
pub fn cmd_check(config: &Config, args: CheckArgs) -> Result<()> {
    BkTool::check_repository(
        &args.path,
        args.username.as_deref(),
        args.password.as_deref(),
        config.local_site.as_deref(),
    )?;

    println!("{}: ok", args.path);
    Ok(())
}
