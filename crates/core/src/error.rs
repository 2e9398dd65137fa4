use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Scan failed at {}: {message}", .path.display())]
    Scan { path: PathBuf, message: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}

impl From<walkdir::Error> for CoreError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(PathBuf::from).unwrap_or_default();
        let message = match err.io_error() {
            Some(io) => io.to_string(),
            None => err.to_string(),
        };
        CoreError::Scan { path, message }
    }
}
