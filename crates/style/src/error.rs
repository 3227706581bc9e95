use thiserror::Error;

#[derive(Error, Debug)]
pub enum StyleError {
    #[error("Invalid {field} color: {message}")]
    InvalidColor { field: &'static str, message: String },
}
