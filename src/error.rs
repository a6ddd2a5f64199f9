use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("Invalid YouTube video URL: {input}")]
    InvalidUrl { input: String },

    #[error("Failed to fetch {endpoint}. Status code: {status}")]
    Fetch {
        endpoint: String,
        status: u16,
        message: Option<String>,
    },

    #[error("Video not found: {video_id}")]
    VideoNotFound { video_id: String },

    #[error("IO operation failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write spreadsheet: {message}")]
    Export { message: String },

    #[error("Network error occurred: {message}")]
    Network { message: String },

    #[error("Request timed out after {seconds} seconds")]
    Timeout { seconds: u64 },

    #[error("Unexpected response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Comment pagination exceeded the limit of {max_pages} pages")]
    PageLimitExceeded { max_pages: u32 },

    #[error("Operation was cancelled by user")]
    Cancelled,
}

pub trait UserFriendlyError {
    fn user_message(&self) -> String;
    fn suggestion(&self) -> Option<String>;
}

impl UserFriendlyError for ScraperError {
    fn user_message(&self) -> String {
        match self {
            ScraperError::InvalidUrl { input } => {
                if input.is_empty() {
                    "Invalid YouTube video URL: no URL was entered".to_string()
                } else {
                    format!("Invalid YouTube video URL: {}", input)
                }
            }
            ScraperError::Fetch {
                endpoint,
                status,
                message: Some(message),
            } => {
                format!(
                    "Failed to fetch {}. Status code: {} ({})",
                    endpoint, status, message
                )
            }
            ScraperError::VideoNotFound { video_id } => {
                format!("Video not found: no video with ID {}", video_id)
            }
            ScraperError::Export { message } => {
                format!("Could not write the spreadsheet: {}", message)
            }
            ScraperError::Network { message } => {
                format!("Network error: {}", message)
            }
            ScraperError::Config { message } => {
                format!("Configuration error: {}", message)
            }
            _ => self.to_string(),
        }
    }

    fn suggestion(&self) -> Option<String> {
        match self {
            ScraperError::InvalidUrl { .. } => Some(
                "Provide a full video URL such as https://www.youtube.com/watch?v=dQw4w9WgXcQ or https://youtu.be/dQw4w9WgXcQ".to_string()
            ),
            ScraperError::Fetch { status: 400, .. } => Some(
                "The API rejected the request. Check that the API key is valid for the YouTube Data API v3.".to_string()
            ),
            ScraperError::Fetch { status: 403, .. } => Some(
                "Access was denied. The API key may be invalid, its quota may be exhausted, or comments may be disabled for this video.".to_string()
            ),
            ScraperError::Fetch { status: 404, .. } => Some(
                "The video could not be found or its comment threads are unavailable.".to_string()
            ),
            ScraperError::VideoNotFound { .. } => Some(
                "Check that the video exists and is not private or removed.".to_string()
            ),
            ScraperError::Io(_) | ScraperError::Export { .. } => Some(
                "Ensure the output directory is writable and the spreadsheet is not open in another program.".to_string()
            ),
            ScraperError::Network { .. } => Some(
                "Check your internet connection and try again.".to_string()
            ),
            ScraperError::Timeout { .. } => Some(
                "The API did not respond in time. Try again or increase the timeout with --timeout.".to_string()
            ),
            ScraperError::Config { .. } => Some(
                "Set the API key with --api-key, the YOUTUBE_API_KEY environment variable, or the [api] section of yt-comments.toml.".to_string()
            ),
            ScraperError::PageLimitExceeded { .. } => Some(
                "Raise the limit with --max-pages, or remove it to fetch every page.".to_string()
            ),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for ScraperError {
    fn from(error: toml::de::Error) -> Self {
        ScraperError::Config {
            message: error.to_string(),
        }
    }
}

impl From<rust_xlsxwriter::XlsxError> for ScraperError {
    fn from(error: rust_xlsxwriter::XlsxError) -> Self {
        match error {
            rust_xlsxwriter::XlsxError::IoError(e) => ScraperError::Io(e),
            other => ScraperError::Export {
                message: other.to_string(),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ScraperError>;
