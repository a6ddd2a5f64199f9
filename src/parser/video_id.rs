use crate::error::{Result, ScraperError};
use regex::Regex;
use serde::Serialize;
use std::fmt;

pub const VIDEO_ID_LEN: usize = 11;

/// Matches the 11 characters following either `v=` or a `/`. Anything after the
/// identifier is ignored.
const VIDEO_ID_PATTERN: &str = r"(?:v=|/)([0-9A-Za-z_-]{11}).*";

/// An 11-character YouTube video identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct VideoId(String);

impl VideoId {
    /// Wraps a bare identifier, checking its length and character class.
    pub fn new(id: &str) -> Result<Self> {
        if id.len() == VIDEO_ID_LEN && id.chars().all(is_id_char) {
            Ok(Self(id.to_string()))
        } else {
            Err(ScraperError::InvalidUrl {
                input: id.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

pub struct VideoIdParser {
    pattern: Regex,
}

impl VideoIdParser {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(VIDEO_ID_PATTERN).map_err(|e| ScraperError::Config {
            message: format!("Failed to compile video ID pattern: {}", e),
        })?;

        Ok(Self { pattern })
    }

    /// Returns the first identifier found in `url`. No other URL forms are tried
    /// when the pattern does not match.
    pub fn parse(&self, url: &str) -> Result<VideoId> {
        let input = url.trim();

        self.pattern
            .captures(input)
            .and_then(|captures| captures.get(1))
            .map(|id| VideoId(id.as_str().to_string()))
            .ok_or_else(|| ScraperError::InvalidUrl {
                input: input.to_string(),
            })
    }
}

pub fn extract_video_id(url: &str) -> Result<VideoId> {
    VideoIdParser::new()?.parse(url)
}
