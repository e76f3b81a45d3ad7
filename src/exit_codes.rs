//! Exit code constants for the dailycode CLI.
//!
//! - 0: Success
//! - 1: User error (bad arguments, invalid config, bad selection, unsafe file name)
//! - 2: Algorithm error (invalid argument, arithmetic overflow)
//! - 3: I/O failure while writing the generated file

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or an unusable template selection.
pub const USER_ERROR: i32 = 1;

/// An algorithm rejected its input or overflowed its result type.
pub const ALGORITHM_FAILURE: i32 = 2;

/// Reading config or writing the generated file failed.
pub const IO_FAILURE: i32 = 3;
