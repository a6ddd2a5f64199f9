pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod exporter;
pub mod parser;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use config::{ApiConfig, CliOverrides, Config, OutputConfig};
pub use error::{Result, ScraperError, UserFriendlyError};

// Core functionality re-exports
pub use api::{fetch_video_title, Comment, CommentBatch, CommentFetcher, FetchProgress, YouTubeClient};
pub use exporter::{output_file_name, sanitize_title, ExportOutcome, SpreadsheetExporter};
pub use parser::{extract_video_id, VideoId, VideoIdParser};
pub use ui::{GracefulShutdown, OutputFormatter, OutputMode, ProgressManager};

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;
use ui::ProgressAwareOutput;

/// Summary of one completed run.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeReport {
    pub video_id: VideoId,
    pub title: String,
    pub comment_count: usize,
    pub pages_fetched: u32,
    /// Absent when the video had no comments and nothing was written.
    pub output_file: Option<String>,
    pub elapsed_ms: u64,
    pub scraped_at: DateTime<Utc>,
}

/// Main library interface: URL in, spreadsheet out.
pub struct CommentScraper {
    config: Config,
    client: YouTubeClient,
    parser: VideoIdParser,
    exporter: SpreadsheetExporter,
    output_formatter: OutputFormatter,
    progress_manager: ProgressManager,
    shutdown: GracefulShutdown,
}

impl CommentScraper {
    /// Create a new CommentScraper; installs the Ctrl+C handler.
    pub fn new(config: Config, output_mode: OutputMode, verbose: u8, quiet: bool) -> Result<Self> {
        let shutdown = GracefulShutdown::new()?;
        Self::with_shutdown(config, output_mode, verbose, quiet, shutdown)
    }

    /// Create a CommentScraper with a caller-supplied shutdown handle.
    pub fn with_shutdown(
        config: Config,
        output_mode: OutputMode,
        verbose: u8,
        quiet: bool,
        shutdown: GracefulShutdown,
    ) -> Result<Self> {
        let client = YouTubeClient::from_config(&config)?;
        let parser = VideoIdParser::new()?;
        let exporter = SpreadsheetExporter::new(config.output.directory.clone());
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);
        let progress_manager = ProgressManager::new(!quiet && output_mode == OutputMode::Human);

        Ok(Self {
            config,
            client,
            parser,
            exporter,
            output_formatter,
            progress_manager,
            shutdown,
        })
    }

    /// Create a new CommentScraper for testing (no signal handler conflicts)
    #[cfg(test)]
    pub fn new_for_test(config: Config) -> Result<Self> {
        Self::with_shutdown(config, OutputMode::Plain, 0, true, GracefulShutdown::new_for_test())
    }

    /// Parse the URL, fetch title and comments, then write the spreadsheet.
    ///
    /// Any failure aborts the run; nothing is written unless every comment page
    /// was fetched.
    pub async fn scrape(&self, video_url: &str) -> Result<ScrapeReport> {
        let start_time = Instant::now();
        self.shutdown.check_shutdown()?;

        // Step 1: Resolve the video ID
        let video_id = self.resolve_video_id(video_url)?;
        self.output_formatter.detail("Video ID", video_id.as_str());

        // Step 2: Fetch the title
        let title = fetch_video_title(&self.client, &video_id).await?;
        self.output_formatter.detail("Video Title", &title);
        self.shutdown.check_shutdown()?;

        // Step 3: Fetch every comment page
        let batch = self.fetch_comments(&video_id).await?;
        self.shutdown.check_shutdown()?;

        // Step 4: Export
        let file_name = output_file_name(&title, &video_id);
        let outcome = self.export_comments(&batch, &file_name)?;

        Ok(ScrapeReport {
            video_id,
            title,
            comment_count: batch.len(),
            pages_fetched: batch.pages_fetched(),
            output_file: outcome.path().map(|p| p.display().to_string()),
            elapsed_ms: start_time.elapsed().as_millis() as u64,
            scraped_at: Utc::now(),
        })
    }

    pub fn resolve_video_id(&self, video_url: &str) -> Result<VideoId> {
        self.parser.parse(video_url)
    }

    async fn fetch_comments(&self, video_id: &VideoId) -> Result<CommentBatch> {
        self.output_formatter.start_operation("Fetching comments...");

        let fetch_progress = self.progress_manager.create_fetch_progress();
        let progress_callback = {
            let pb = fetch_progress.clone();
            move |progress: FetchProgress| {
                ui::progress::update_fetch_progress(&pb, &progress);
            }
        };

        let fetcher = CommentFetcher::new(&self.client)
            .with_page_size(self.config.api.page_size)
            .with_max_pages(self.config.api.max_pages)
            .with_cancellation(self.shutdown.running_flag())
            .with_progress(progress_callback);

        let batch = match fetcher.fetch_all(video_id).await {
            Ok(batch) => batch,
            Err(e) => {
                fetch_progress.abandon_with_message("failed");
                return Err(e);
            }
        };

        ui::progress::finish_progress_with_summary(
            &fetch_progress,
            &format!("Fetched {} pages", batch.pages_fetched()),
            fetch_progress.elapsed(),
        );

        let output = ProgressAwareOutput::new(&self.output_formatter, Some(&self.progress_manager));
        output.success(&format!("Downloaded {} comments.", batch.len()));
        output.info(&format!("{} pages requested", batch.pages_fetched()));

        Ok(batch)
    }

    fn export_comments(&self, batch: &CommentBatch, file_name: &str) -> Result<ExportOutcome> {
        let outcome = self.exporter.export(batch.comments(), file_name)?;

        match outcome {
            ExportOutcome::Written { ref path, .. } => {
                self.output_formatter
                    .success(&format!("Comments saved to '{}'", path.display()));
            }
            ExportOutcome::SkippedEmpty => {
                tracing::warn!("video has no comments, nothing exported");
                self.output_formatter.warning("No comments to save.");
            }
        }

        Ok(outcome)
    }

    /// Generate sample configuration file
    pub fn generate_sample_config<P: AsRef<Path>>(output_path: P) -> Result<()> {
        let sample_config = Config::create_sample_config();
        std::fs::write(output_path.as_ref(), sample_config)?;
        Ok(())
    }

    /// Get output formatter reference
    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &ScraperError) {
        self.progress_manager.clear();
        self.output_formatter.print_user_friendly_error(error);
    }
}
