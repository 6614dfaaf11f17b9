//! BitKeeper command runner and content fetcher.
//!
//! Every call into the `bk` executable goes through [`BkClient`]. Commands
//! are scoped to the repository with `bk -@<repo>`, run synchronously, and
//! their output is drained completely before the exit status is looked at.

use crate::config::Config;
use crate::error::{BkError, Result};
use crate::revision::{self, Revision};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Environment variable carrying the site scope into `bk`.
pub const LOCAL_SITE_ENV: &str = "RB_LOCAL_SITE";

/// URL schemes BitKeeper accepts for remote repositories.
const REMOTE_SCHEMES: &[&str] = &["bk://", "ssh://", "rsh://", "http://", "https://", "file://"];

/// A client bound to one BitKeeper repository.
#[derive(Debug, Clone)]
pub struct BkClient {
    path: String,
    local_site: Option<String>,
    executable: PathBuf,
    locale: String,
}

impl BkClient {
    /// Create a client for `path` using the default `bk` executable.
    ///
    /// Constructing the client is the repository existence probe; see
    /// [`BkClient::with_config`].
    pub fn new(path: &str, local_site: Option<&str>) -> Result<Self> {
        Self::with_config(path, local_site, &Config::default())
    }

    /// Create a client for `path`, taking the executable and locale from `config`.
    ///
    /// # Returns
    ///
    /// * `Ok(BkClient)` - `path` is a remote BitKeeper URL, or a local
    ///   directory containing `BitKeeper/etc` or `.bk`
    /// * `Err(BkError::RepositoryNotFound)` - anything else
    pub fn with_config(path: &str, local_site: Option<&str>, config: &Config) -> Result<Self> {
        probe_repository(path)?;

        Ok(Self {
            path: path.to_string(),
            local_site: local_site.map(str::to_string),
            executable: PathBuf::from(&config.executable),
            locale: config.locale.clone(),
        })
    }

    /// Point the client at a specific executable (e.g. the one `which` found).
    pub fn with_executable<P: Into<PathBuf>>(mut self, executable: P) -> Self {
        self.executable = executable.into();
        self
    }

    /// The repository path or URL this client is bound to.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The site scope commands run under, if any.
    pub fn local_site(&self) -> Option<&str> {
        self.local_site.as_deref()
    }

    /// The executable commands are run with.
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Fetch the contents of `path` at `revision`.
    ///
    /// If `base_commit_id` is given it overrides `revision` entirely.
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<u8>)` - The full file contents
    /// * `Err(BkError::NotFound)` - Empty path, or `bk get` exited non-zero
    ///   (including for `PRE-CREATION` and `UNKNOWN`, which name no revision)
    /// * `Err(BkError::ToolUnavailable)` - `bk` could not be started
    pub fn cat_file(
        &self,
        path: &str,
        revision: &Revision,
        base_commit_id: Option<&str>,
    ) -> Result<Vec<u8>> {
        let rev = revision::resolve(revision, base_commit_id);

        if path.is_empty() {
            return Err(BkError::not_found(path, rev));
        }

        let rev_flag = format!("-pqr{}", rev);
        let output = self.run_bk(&["get", &rev_flag, path])?;

        if output.status.success() {
            Ok(output.stdout)
        } else {
            log::debug!(
                "bk get {}@{} failed (exit code {}): {}",
                path,
                rev,
                output.status.code().unwrap_or(-1),
                String::from_utf8_lossy(&output.stderr).trim()
            );
            Err(BkError::not_found(path, rev))
        }
    }

    /// Run `bk -@<repo> <args>` and collect its output.
    ///
    /// A non-zero exit status is not an error here; callers decide what it means.
    fn run_bk(&self, args: &[&str]) -> Result<Output> {
        let mut command = Command::new(&self.executable);
        command
            .arg(format!("-@{}", self.path))
            .args(args)
            .env("LC_ALL", &self.locale)
            .env("LANGUAGE", &self.locale);

        if let Some(site) = &self.local_site {
            command.env(LOCAL_SITE_ENV, site);
        }

        log::debug!(
            "running {} -@{} {}",
            self.executable.display(),
            self.path,
            args.join(" ")
        );

        command.output().map_err(|e| {
            BkError::ToolUnavailable(format!(
                "failed to execute {} {}: {}",
                self.executable.display(),
                args.first().unwrap_or(&""),
                e
            ))
        })
    }
}

/// Check that `path` can back a client without talking to `bk`.
fn probe_repository(path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(BkError::RepositoryNotFound(
            "repository path is empty".to_string(),
        ));
    }

    if is_remote_url(path) {
        return Ok(());
    }

    let root = Path::new(path);
    if !root.is_dir() {
        return Err(BkError::RepositoryNotFound(format!(
            "{}: no such directory",
            path
        )));
    }

    if root.join("BitKeeper").join("etc").is_dir() || root.join(".bk").is_dir() {
        Ok(())
    } else {
        Err(BkError::RepositoryNotFound(format!(
            "{}: not a BitKeeper repository",
            path
        )))
    }
}

fn is_remote_url(path: &str) -> bool {
    REMOTE_SCHEMES.iter().any(|scheme| path.starts_with(scheme))
}
