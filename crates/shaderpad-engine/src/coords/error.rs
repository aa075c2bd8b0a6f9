use thiserror::Error;

/// Rejected vector-like input.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum ValidationError {
    /// A dynamically sized pair did not have exactly two elements.
    #[error("invalid vector size {len}, expected 2")]
    InvalidSize { len: usize },
}

/// Checks that a dynamically sized pair has exactly two elements.
pub(crate) fn expect_pair(values: &[f32]) -> Result<[f32; 2], ValidationError> {
    match *values {
        [x, y] => Ok([x, y]),
        _ => Err(ValidationError::InvalidSize { len: values.len() }),
    }
}
