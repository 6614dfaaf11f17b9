//! bkreview: BitKeeper support for a code-review platform.
//!
//! The crate is the library half of the `bkreview` CLI:
//! - [`revision`] maps review-platform revision tokens to BitKeeper ones
//! - [`client`] fetches file contents by running `bk get`
//! - [`diff`] turns BitKeeper diffs into per-file change records
//! - [`tool`] is the facade the platform talks to

pub mod client;
pub mod config;
pub mod diff;
pub mod error;
pub mod exit_codes;
pub mod revision;
pub mod tool;

#[cfg(test)]
mod test_support;
