//! Command implementations for bkreview.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations, plus the config/tool setup they share.

mod cat;
mod check;
mod parse;
mod revision;


use crate::cli::{Cli, Command};
use bkreview::config::Config;
use bkreview::error::{BkError, Result};
use bkreview::tool::{BkTool, Repository};

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;

    match cli.command {
        Command::Cat(args) => cat::cmd_cat(&config, args),
        Command::Parse(args) => parse::cmd_parse(args),
        Command::Check(args) => check::cmd_check(&config, args),
        Command::Revision(args) => revision::cmd_revision(args),
    }
}

/// Load the config file and apply command-line overrides.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::discover(".")?,
    };

    if let Some(repo) = &cli.repo {
        config.repository = Some(repo.clone());
    }
    if let Some(site) = &cli.local_site {
        config.local_site = Some(site.clone());
    }

    config.validate()?;
    Ok(config)
}

/// Build a tool for the configured repository.
fn open_tool(config: &Config) -> Result<BkTool> {
    let path = config.repository.as_deref().ok_or_else(|| {
        BkError::UserError(
            "no repository configured.\n\
             Fix: pass --repo <PATH> or set `repository` in .bkreview.yaml."
                .to_string(),
        )
    })?;

    let mut repository = Repository::new(path);
    repository.local_site = config.local_site.clone();

    BkTool::with_config(&repository, config)
}
