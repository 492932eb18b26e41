//! Unified exit codes for the markset CLI.
//! These codes are part of the public contract and stay stable across commands.

pub const SUCCESS: i32 = 0;
pub const UNKNOWN_MARKER: i32 = 1; // Lookup of a name absent from the registry
pub const INTERNAL_ERROR: i32 = 2; // Setup or usage error
