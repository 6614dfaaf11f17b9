//! Exit code constants for the bkreview CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, bad config)
//! - 2: File not found at the requested revision
//! - 3: The `bk` executable is unavailable
//! - 4: Repository not found

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or an invalid configuration file.
pub const USER_ERROR: i32 = 1;

/// The requested file could not be produced at the requested revision.
pub const NOT_FOUND: i32 = 2;

/// The BitKeeper executable could not be located or started.
pub const TOOL_UNAVAILABLE: i32 = 3;

/// The repository path does not point at a usable BitKeeper repository.
pub const REPOSITORY_NOT_FOUND: i32 = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            USER_ERROR,
            NOT_FOUND,
            TOOL_UNAVAILABLE,
            REPOSITORY_NOT_FOUND,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }
}
