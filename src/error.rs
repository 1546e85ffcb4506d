use thiserror::Error;

/// Enum listing possible errors from uniquemap.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum Error {
    /// `add` was given a key that is already present.
    #[error("the key already exists")]
    DuplicateKey,
    /// `add` was given a value that is already present, under any key.
    #[error("the value already exists")]
    DuplicateValue,
    /// No pair has the requested key.
    #[error("the key was not found")]
    KeyNotFound,
    /// No pair has the requested value.
    #[error("the value was not found")]
    ValueNotFound,
}
