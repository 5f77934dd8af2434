use thiserror::Error;

/// Errors that can occur while loading configuration, fetching recipes or
/// running an interactive session
#[derive(Error, Debug)]
pub enum FoodyError {
    /// Missing or invalid setting detected before any search runs
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// The layered configuration could not be loaded
    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    /// Network failure while talking to a remote source
    #[error("Failed to fetch recipes: {0}")]
    Transport(#[from] reqwest::Error),

    /// Remote source answered with something other than 200 OK
    #[error("received non-ok response {status}, {body}")]
    Status { status: u16, body: String },

    /// Response body was not the expected JSON shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The CSV file could not be read
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File or terminal I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A source that reports zero hits as a failure found nothing
    #[error("no results found for search query '{query}'")]
    EmptyResults { query: String },

    /// The external image renderer failed
    #[error("Image render failed: {0}")]
    Render(String),
}

impl FoodyError {
    /// Whether this error belongs to the class reported once at startup,
    /// before any interactive loop begins
    pub fn is_configuration(&self) -> bool {
        matches!(self, FoodyError::Configuration(_) | FoodyError::Settings(_))
    }
}

pub type Result<T> = std::result::Result<T, FoodyError>;
