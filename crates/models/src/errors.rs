use thiserror::Error;

/// Rejections raised by the models before anything reaches the store.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
}
