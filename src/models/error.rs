#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Render error: {0}")]
    Render(String),

    #[error("Missing element: {0}")]
    MissingElement(String),
}
