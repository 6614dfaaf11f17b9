//! Configuration constants and defaults for bkreview.

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = ".bkreview.yaml";

// Default value functions for serde
pub(crate) fn default_executable() -> String {
    "bk".to_string()
}
pub(crate) fn default_locale() -> String {
    "en_US.UTF-8".to_string()
}
