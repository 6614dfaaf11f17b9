//! Byte-string helpers for diff parsing.

/// Index of the last occurrence of `needle` in `haystack`.
pub(super) fn rfind(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).rposition(|w| w == needle)
}

/// Drop the leading `<revision>/` component from a marker filename.
///
/// `1.5/src/a.c` with revision `1.5` becomes `src/a.c`.
pub(super) fn strip_revision_component<'a>(filename: &'a [u8], revision: &[u8]) -> &'a [u8] {
    let rest = filename.strip_prefix(revision).unwrap_or(filename);
    rest.strip_prefix(b"/").unwrap_or(rest)
}
