//! The BitKeeper tool facade a review platform talks to.
//!
//! [`BkTool`] wires the revision resolver and content fetcher together and
//! hands out diff parsers. It is cheap to construct per request; instances
//! share no mutable state.

use crate::client::BkClient;
use crate::config::Config;
use crate::diff::BkDiffParser;
use crate::error::{BkError, Result};
use crate::revision::Revision;

/// Human-readable backend name.
pub const TOOL_NAME: &str = "BitKeeper";

const NULL_DEVICE: &[u8] = b"/dev/null";

/// Repository metadata supplied by the host platform.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Repository {
    /// Local path or BitKeeper URL.
    pub path: String,
    /// Site scope the repository belongs to, if the platform has several.
    pub local_site: Option<String>,
}

impl Repository {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            local_site: None,
        }
    }

    pub fn with_local_site(mut self, local_site: impl Into<String>) -> Self {
        self.local_site = Some(local_site.into());
        self
    }
}

/// BitKeeper support for one repository.
#[derive(Debug, Clone)]
pub struct BkTool {
    client: BkClient,
}

impl BkTool {
    /// Create a tool for `repository` with the default configuration.
    pub fn new(repository: &Repository) -> Result<Self> {
        Self::with_config(repository, &Config::default())
    }

    /// Create a tool for `repository`.
    ///
    /// # Returns
    ///
    /// * `Ok(BkTool)` - The executable was found and the repository probed
    /// * `Err(BkError::ToolUnavailable)` - `config.executable` is not on the search path
    /// * `Err(BkError::RepositoryNotFound)` - The repository path is unusable
    pub fn with_config(repository: &Repository, config: &Config) -> Result<Self> {
        let executable = which::which(&config.executable).map_err(|e| {
            BkError::ToolUnavailable(format!(
                "'{}' not found: {}\nFix: install BitKeeper or set `executable` in the config.",
                config.executable, e
            ))
        })?;

        let client = BkClient::with_config(
            &repository.path,
            repository.local_site.as_deref(),
            config,
        )?
        .with_executable(executable);

        Ok(Self { client })
    }

    /// The backend's display name.
    pub fn name(&self) -> &'static str {
        TOOL_NAME
    }

    /// Executables this tool needs on the search path.
    pub fn dependencies() -> &'static [&'static str] {
        &["bk"]
    }

    /// The underlying client.
    pub fn client(&self) -> &BkClient {
        &self.client
    }

    /// Fetch `path` at `revision`; `base_commit_id` overrides the revision.
    pub fn get_file(
        &self,
        path: &str,
        revision: &Revision,
        base_commit_id: Option<&str>,
    ) -> Result<Vec<u8>> {
        self.client.cat_file(path, revision, base_commit_id)
    }

    /// Interpret the filename and revision fields of a diff marker.
    ///
    /// `/dev/null` means the file did not exist; an empty revision means the
    /// diff did not say.
    pub fn parse_diff_revision(file: &[u8], revision: &[u8]) -> (Vec<u8>, Revision) {
        let token = if file == NULL_DEVICE {
            Revision::PreCreation
        } else if revision.is_empty() {
            Revision::Unknown
        } else {
            Revision::from_label(revision)
        };

        (file.to_vec(), token)
    }

    /// BitKeeper diffs name files relative to the repository root.
    pub fn get_diffs_use_absolute_paths(&self) -> bool {
        true
    }

    /// A fresh parser over `data`.
    pub fn get_parser(&self, data: impl Into<Vec<u8>>) -> BkDiffParser {
        BkDiffParser::bitkeeper(data)
    }

    /// Check that `path` is a usable repository.
    ///
    /// BitKeeper has no credentials to verify here; `username` and
    /// `password` are accepted for interface parity and ignored. Building a
    /// client is the probe.
    pub fn check_repository(
        path: &str,
        _username: Option<&str>,
        _password: Option<&str>,
        local_site: Option<&str>,
    ) -> Result<()> {
        BkClient::new(path, local_site)?;
        Ok(())
    }
}
