//! Revision tokens and their resolution to BitKeeper revision syntax.
//!
//! A [`Revision`] is what the review platform hands around: either a concrete
//! revision label, or one of three sentinels. [`resolve`] turns a token into
//! the string `bk get -r` understands. It never touches the backend.

use std::fmt;

/// BitKeeper's spelling of "the latest revision".
pub const BK_HEAD: &str = "@";

/// A revision as seen by the review platform.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Revision {
    /// The most recent revision.
    #[default]
    Head,
    /// The file did not exist before this change.
    PreCreation,
    /// No revision could be determined from the diff text.
    Unknown,
    /// A concrete backend revision label (e.g. `1.5`, a changeset key, a tag).
    Named(String),
}

impl Revision {
    /// Parse a revision as typed by a user or stored by the platform.
    ///
    /// The sentinel spellings `HEAD`, `PRE-CREATION` and `UNKNOWN` map back
    /// to their variants; anything else is a named revision.
    pub fn parse(s: &str) -> Self {
        match s {
            "HEAD" => Revision::Head,
            "PRE-CREATION" => Revision::PreCreation,
            "UNKNOWN" => Revision::Unknown,
            other => Revision::Named(other.to_string()),
        }
    }

    /// Build a named revision from raw diff bytes.
    pub fn from_label(label: &[u8]) -> Self {
        Revision::Named(String::from_utf8_lossy(label).into_owned())
    }

    /// Whether this token is one of the three sentinels.
    pub fn is_sentinel(&self) -> bool {
        !matches!(self, Revision::Named(_))
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Revision::Head => write!(f, "HEAD"),
            Revision::PreCreation => write!(f, "PRE-CREATION"),
            Revision::Unknown => write!(f, "UNKNOWN"),
            Revision::Named(name) => write!(f, "{}", name),
        }
    }
}

/// Resolve a revision token to BitKeeper revision syntax.
///
/// A `base_override` (a revision known out-of-band, such as a base commit id
/// from repository metadata) always wins over the token.
///
/// `HEAD` becomes [`BK_HEAD`]; every other token passes through as its text.
pub fn resolve(token: &Revision, base_override: Option<&str>) -> String {
    if let Some(base) = base_override {
        return base.to_string();
    }

    match token {
        Revision::Head => BK_HEAD.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_tokens() -> Vec<Revision> {
        vec![
            Revision::Head,
            Revision::PreCreation,
            Revision::Unknown,
            Revision::Named("1.5".to_string()),
            Revision::Named("+".to_string()),
        ]
    }

    #[test]
    fn test_head_resolves_to_bk_latest() {
        assert_eq!(resolve(&Revision::Head, None), "@");
    }

    #[test]
    fn test_named_passes_through_unchanged() {
        let token = Revision::Named("1.12.1.3".to_string());
        assert_eq!(resolve(&token, None), "1.12.1.3");
    }

    #[test]
    fn test_other_sentinels_pass_through_as_text() {
        assert_eq!(resolve(&Revision::PreCreation, None), "PRE-CREATION");
        assert_eq!(resolve(&Revision::Unknown, None), "UNKNOWN");
    }

    #[test]
    fn test_base_override_wins_for_every_token() {
        for token in all_tokens() {
            assert_eq!(
                resolve(&token, Some("deadbeef")),
                "deadbeef",
                "override should win over {:?}",
                token
            );
        }
    }

    #[test]
    fn test_parse_round_trips_display() {
        for token in all_tokens() {
            assert_eq!(Revision::parse(&token.to_string()), token);
        }
    }

    #[test]
    fn test_from_label_is_lossy_on_invalid_utf8() {
        let rev = Revision::from_label(b"1.\xff");
        assert_eq!(rev, Revision::Named("1.\u{fffd}".to_string()));
        assert!(!rev.is_sentinel());
    }

    #[test]
    fn test_default_is_head() {
        assert_eq!(Revision::default(), Revision::Head);
        assert!(Revision::default().is_sentinel());
    }
}
