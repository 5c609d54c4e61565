pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid format `{0}` (expected e.g. %.1f, %.2f, %d)")]
    InvalidFormat(String),

    #[error("unknown unit `{0}`")]
    UnknownUnit(String),

    /// The value has no representation for the requested operation; callers fall back
    /// to its plain text.
    #[error("cannot humanize `{value}` as {expected}")]
    Unrepresentable { value: String, expected: &'static str },
}

impl Error {
    pub(crate) fn unrepresentable(value: impl std::fmt::Display, expected: &'static str) -> Self {
        Self::Unrepresentable {
            value: value.to_string(),
            expected,
        }
    }
}
