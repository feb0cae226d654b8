use thiserror::Error;

/// Errors that can occur while reading tabular input
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("xlsx error in {path}: {message}")]
    Xlsx { path: String, message: String },
}

pub type Result<T> = std::result::Result<T, SheetError>;
