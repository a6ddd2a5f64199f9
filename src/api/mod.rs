pub mod client;
pub mod comments;
pub mod models;
pub mod videos;

pub use client::{Endpoint, YouTubeClient};
pub use comments::{Comment, CommentBatch, CommentFetcher, FetchProgress};
pub use videos::fetch_video_title;
