//! Exit code constants for the ralph bridge.
//!
//! Bridge-owned codes:
//! - 0: Success
//! - 1: User error (bad args, missing PROMPT.md, environment not ready)
//!
//! Codes produced by `ralph run` and passed through verbatim:
//! - 0: LOOP_COMPLETE, all tasks finished
//! - 1: execution failure
//! - 2: iteration or time limit exceeded
//! - 130: interrupted by the user

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid state, or an environment that is not ready.
pub const USER_ERROR: i32 = 1;

/// The loop finished every task.
pub const LOOP_COMPLETE: i32 = 0;

/// The loop failed; diagnostics live under `.ralph/`.
pub const LOOP_FAILURE: i32 = 1;

/// The loop hit its iteration or time limit.
pub const LOOP_LIMIT: i32 = 2;

/// The loop was interrupted (SIGINT, 128 + 2).
pub const LOOP_INTERRUPTED: i32 = 130;

/// Convert an exit code into the byte handed back to the OS.
///
/// Codes outside `0..=255` cannot be represented and collapse to [`USER_ERROR`].
pub fn to_process_byte(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(USER_ERROR as u8)
}
