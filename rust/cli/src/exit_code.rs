//! Process exit statuses returned by [`crate::run`].

/// The command finished and its output is complete.
pub const SUCCESS: i32 = 0;

/// Bad arguments, invalid configuration, a rejected game shape or a failed write.
pub const ERROR: i32 = 2;
