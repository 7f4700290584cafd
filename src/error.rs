use thiserror::Error;

/// Unified error type for image-tags operations
#[derive(Error, Debug)]
pub enum ImageTagsError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Couldn't find tags for repository {url}")]
    Fetch {
        url: String,
        #[source]
        source: git2::Error,
    },

    #[error("Context error: {0}")]
    Context(String),

    #[error("Output error: {0}")]
    Output(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Event parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Convenience type alias for Results in image-tags
pub type Result<T> = std::result::Result<T, ImageTagsError>;

impl ImageTagsError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ImageTagsError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ImageTagsError::Version(msg.into())
    }

    /// Create a fetch error for `url`, keeping the git failure as its source
    pub fn fetch(url: impl Into<String>, source: git2::Error) -> Self {
        ImageTagsError::Fetch {
            url: url.into(),
            source,
        }
    }

    /// Create a context error with context
    pub fn context(msg: impl Into<String>) -> Self {
        ImageTagsError::Context(msg.into())
    }

    /// Create an output error with context
    pub fn output(msg: impl Into<String>) -> Self {
        ImageTagsError::Output(msg.into())
    }
}
