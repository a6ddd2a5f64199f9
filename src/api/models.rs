//! Response bodies of the YouTube Data API v3, limited to the fields this crate reads.

use serde::Deserialize;

/// `GET /videos?part=snippet`
#[derive(Debug, Clone, Deserialize)]
pub struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoItem {
    pub snippet: VideoSnippet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoSnippet {
    pub title: String,
}

/// `GET /commentThreads?part=snippet`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadListResponse {
    #[serde(default)]
    pub items: Vec<CommentThread>,
    pub next_page_token: Option<String>,
}

impl CommentThreadListResponse {
    /// The cursor for the following page. An empty token ends pagination.
    pub fn continuation(&self) -> Option<&str> {
        self.next_page_token
            .as_deref()
            .filter(|token| !token.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentThread {
    pub snippet: CommentThreadSnippet,
}

impl CommentThread {
    pub fn into_text_display(self) -> String {
        self.snippet.top_level_comment.snippet.text_display
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentThreadSnippet {
    pub top_level_comment: TopLevelComment,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopLevelComment {
    pub snippet: CommentSnippet,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSnippet {
    pub text_display: String,
}

/// Error envelope returned alongside non-2xx statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_list_parsing() {
        let body = r#"{"kind":"youtube#videoListResponse","items":[{"id":"dQw4w9WgXcQ","snippet":{"title":"Sample: Video","channelTitle":"x"}}]}"#;
        let response: VideoListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].snippet.title, "Sample: Video");
    }

    #[test]
    fn test_video_list_without_items() {
        let response: VideoListResponse = serde_json::from_str(r#"{"pageInfo":{}}"#).unwrap();
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_comment_page_parsing() {
        let body = r#"{
            "nextPageToken": "abc",
            "items": [
                {"snippet": {"topLevelComment": {"snippet": {"textDisplay": "Nice!", "likeCount": 3}}, "totalReplyCount": 0}}
            ]
        }"#;
        let page: CommentThreadListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.continuation(), Some("abc"));
        assert_eq!(page.items[0].clone().into_text_display(), "Nice!");
    }

    #[test]
    fn test_empty_or_missing_continuation() {
        let page: CommentThreadListResponse =
            serde_json::from_str(r#"{"items":[],"nextPageToken":""}"#).unwrap();
        assert_eq!(page.continuation(), None);

        let page: CommentThreadListResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(page.continuation(), None);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_comment_missing_text_is_an_error() {
        let body = r#"{"items":[{"snippet":{"topLevelComment":{"snippet":{}}}}]}"#;
        assert!(serde_json::from_str::<CommentThreadListResponse>(body).is_err());
    }

    #[test]
    fn test_api_error_parsing() {
        let body = r#"{"error":{"code":403,"message":"The video has disabled comments.","errors":[]}}"#;
        let response: ApiErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response.error.message.as_deref(),
            Some("The video has disabled comments.")
        );
    }
}
