use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Failed to parse site content: {0}")]
    Content(#[from] serde_json::Error),
    #[error("Site content has no {0}")]
    MissingContent(&'static str),
    #[error("Service `{0}` has no matching page")]
    UnknownService(String),
    #[error("Navigation entry `{0}` has no matching page")]
    UnknownNavTarget(String),
    #[error("Browser window is not available")]
    NoWindow,
    #[error("Location update failed: {0}")]
    Location(String),
}
