use quotepress_render::RenderError;
use quotepress_style::StyleError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Style(#[from] StyleError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error("invalid section configuration: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
