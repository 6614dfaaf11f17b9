//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for talking to a BitKeeper repository.
///
/// This struct represents the contents of `.bkreview.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name or path of the BitKeeper executable (default: "bk").
    #[serde(default = "default_executable")]
    pub executable: String,

    /// Repository path or BitKeeper URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,

    /// Site scope the repository belongs to, exported to `bk` as `RB_LOCAL_SITE`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_site: Option<String>,

    /// Locale forced on `bk` through `LC_ALL` and `LANGUAGE`.
    #[serde(default = "default_locale")]
    pub locale: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            executable: default_executable(),
            repository: None,
            local_site: None,
            locale: default_locale(),
        }
    }
}
