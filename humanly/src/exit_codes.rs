#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,

    /// Invalid CLI flags or config file contents (unknown units, bad precision specs, etc.).
    InvalidInput = 30,

    /// Internal/runtime error (unreadable config file, stdout closed).
    RuntimeError = 40,
}

impl ExitCode {
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}
