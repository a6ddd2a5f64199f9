use crate::api::client::{Endpoint, YouTubeClient};
use crate::api::models::{CommentThread, CommentThreadListResponse};
use crate::config::MAX_PAGE_SIZE;
use crate::error::{Result, ScraperError};
use crate::parser::VideoId;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

/// Display text of one top-level comment.
pub type Comment = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchProgress {
    pub pages_fetched: u32,
    pub comments_fetched: usize,
}

/// All top-level comments of a video, in the order the API returned them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommentBatch {
    comments: Vec<Comment>,
    pages_fetched: u32,
}

impl CommentBatch {
    pub fn new(comments: Vec<Comment>, pages_fetched: u32) -> Self {
        Self {
            comments,
            pages_fetched,
        }
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }
}

/// Walks the commentThreads endpoint page by page until the server stops
/// returning a continuation token.
///
/// Without [`with_max_pages`](Self::with_max_pages) there is no upper bound on
/// the number of requests: a server that always returns a token keeps the
/// fetcher looping. With a limit set, reaching it while a token is still
/// present fails with [`ScraperError::PageLimitExceeded`].
pub struct CommentFetcher<'a> {
    client: &'a YouTubeClient,
    page_size: u32,
    max_pages: Option<u32>,
    progress_callback: Option<Box<dyn Fn(FetchProgress) + Send + Sync + 'a>>,
    running: Option<Arc<AtomicBool>>,
}

impl<'a> CommentFetcher<'a> {
    pub fn new(client: &'a YouTubeClient) -> Self {
        Self {
            client,
            page_size: MAX_PAGE_SIZE,
            max_pages: None,
            progress_callback: None,
            running: None,
        }
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.clamp(1, MAX_PAGE_SIZE);
        self
    }

    pub fn with_max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn with_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(FetchProgress) + Send + Sync + 'a,
    {
        self.progress_callback = Some(Box::new(callback));
        self
    }

    /// Stop before the next request once `running` flips to false.
    pub fn with_cancellation(mut self, running: Arc<AtomicBool>) -> Self {
        self.running = Some(running);
        self
    }

    pub async fn fetch_all(&self, video_id: &VideoId) -> Result<CommentBatch> {
        let page_size = self.page_size.to_string();
        let mut comments: Vec<Comment> = Vec::new();
        let mut cursor: Option<String> = None;
        let mut pages_fetched: u32 = 0;

        loop {
            self.check_running()?;

            let page: CommentThreadListResponse = {
                let mut params = vec![
                    ("textFormat", "plainText"),
                    ("part", "snippet"),
                    ("videoId", video_id.as_str()),
                    ("maxResults", page_size.as_str()),
                ];
                if let Some(ref token) = cursor {
                    params.push(("pageToken", token.as_str()));
                }

                self.client
                    .get_json(Endpoint::CommentThreads, &params)
                    .await?
            };

            pages_fetched += 1;
            let next_cursor = page.continuation().map(str::to_string);
            let received = page.items.len();
            comments.extend(page.items.into_iter().map(CommentThread::into_text_display));

            debug!(
                page = pages_fetched,
                received,
                total = comments.len(),
                has_next = next_cursor.is_some(),
                "fetched comment page"
            );

            if let Some(ref callback) = self.progress_callback {
                callback(FetchProgress {
                    pages_fetched,
                    comments_fetched: comments.len(),
                });
            }

            match next_cursor {
                None => break,
                Some(token) => {
                    if let Some(max_pages) = self.max_pages {
                        if pages_fetched >= max_pages {
                            return Err(ScraperError::PageLimitExceeded { max_pages });
                        }
                    }
                    cursor = Some(token);
                }
            }
        }

        info!(
            %video_id,
            comments = comments.len(),
            pages = pages_fetched,
            "finished fetching comments"
        );

        Ok(CommentBatch::new(comments, pages_fetched))
    }

    fn check_running(&self) -> Result<()> {
        match self.running {
            Some(ref running) if !running.load(Ordering::SeqCst) => Err(ScraperError::Cancelled),
            _ => Ok(()),
        }
    }
}
