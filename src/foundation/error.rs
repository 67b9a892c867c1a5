/// Convenience result type used across tryon.
pub type TryonResult<T> = Result<T, TryonError>;

/// Top-level error taxonomy used by compositing APIs.
///
/// A keyword miss during classification is not an error; it selects the default
/// placement profile.
#[derive(thiserror::Error, Debug)]
pub enum TryonError {
    /// An input byte source could not be decoded as an image.
    #[error("decode error: {0}")]
    Decode(String),

    /// The drawing surface could not be allocated or the output could not be encoded.
    #[error("render error: {0}")]
    Render(String),

    /// Invalid options or draw parameters.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TryonError {
    /// Build a [`TryonError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`TryonError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`TryonError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
