//! Exit code constants for the strata CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid state)
//! - 2: Configuration failure (missing or malformed layers.json)
//! - 3: Sync failure (clone errors, failed layers)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or invalid state.
pub const USER_ERROR: i32 = 1;

/// Configuration failure: layers.json missing, unparseable, or invalid.
pub const CONFIG_FAILURE: i32 = 2;

/// Sync failure: a clone failed or at least one layer could not be installed.
pub const SYNC_FAILURE: i32 = 3;
