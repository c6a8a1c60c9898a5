use thiserror::Error;

pub type DisplayResult<T> = std::result::Result<T, DisplayError>;

/// Errors surfaced while rendering text for the confirmation screen.
///
/// Registry misses and invalid paths are ordinary outcomes and are returned
/// as `Option`/`bool` values, never through this type. Only a write that
/// would exceed the destination's capacity is a hard error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DisplayError {
    #[error("Rendered output needs {required} bytes but the display buffer holds {capacity}.")]
    Overflow { required: usize, capacity: usize },
}
