use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Secure random source unavailable: {0}")]
    RandomSourceUnavailable(String),
}

// Convenience type alias
pub type Result<T> = std::result::Result<T, AppError>;

// Convert from other error types
impl From<rand::Error> for AppError {
    fn from(err: rand::Error) -> Self {
        AppError::RandomSourceUnavailable(err.to_string())
    }
}
