use crate::api::client::{Endpoint, YouTubeClient};
use crate::api::models::VideoListResponse;
use crate::error::{Result, ScraperError};
use crate::parser::VideoId;
use tracing::info;

/// Looks up the display title of a single video.
///
/// A response without items means the video does not exist or is not visible
/// to the API key; that is reported as [`ScraperError::VideoNotFound`].
pub async fn fetch_video_title(client: &YouTubeClient, video_id: &VideoId) -> Result<String> {
    let response: VideoListResponse = client
        .get_json(
            Endpoint::Videos,
            &[("id", video_id.as_str()), ("part", "snippet")],
        )
        .await?;

    let title = response
        .items
        .into_iter()
        .next()
        .map(|item| item.snippet.title)
        .ok_or_else(|| ScraperError::VideoNotFound {
            video_id: video_id.to_string(),
        })?;

    info!(%video_id, %title, "fetched video title");
    Ok(title)
}
