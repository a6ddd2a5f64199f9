use crate::config::{CliOverrides, Config, MAX_PAGE_SIZE};
use crate::error::Result;
use crate::ui::OutputMode;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "yt-comments")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Export the comments of a YouTube video to a spreadsheet")]
#[command(
    long_about = "yt-comments fetches the title and every top-level comment of a YouTube video \
                  through the YouTube Data API v3 and saves the comment text to \
                  '<video title>.xlsx', one comment per row."
)]
#[command(before_help = "💬 yt-comments - YouTube Comment Exporter")]
#[command(after_help = "EXAMPLES:\n  \
    yt-comments https://www.youtube.com/watch?v=dQw4w9WgXcQ\n  \
    yt-comments https://youtu.be/dQw4w9WgXcQ --output-dir exports --max-pages 50\n  \
    YOUTUBE_API_KEY=... yt-comments            (prompts for the URL)\n  \
    yt-comments --generate-config --config yt-comments.toml")]
pub struct Cli {
    /// YouTube video URL (prompted for when omitted)
    pub video_url: Option<String>,

    /// Directory to write the spreadsheet into (defaults to the current directory)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// YouTube Data API v3 key
    #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Comments requested per page
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=MAX_PAGE_SIZE as i64))]
    pub page_size: Option<u32>,

    /// Fail instead of requesting more than this many comment pages
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_pages: Option<u32>,

    /// HTTP request timeout in seconds
    #[arg(long, help = "Timeout for each API request (seconds)")]
    pub timeout: Option<u64>,

    /// Configuration file path
    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Dry run (show what would be done without executing)
    #[arg(long, help = "Resolve the video ID and settings without calling the API")]
    pub dry_run: bool,

    /// Generate sample configuration file
    #[arg(long, help = "Generate a sample configuration file")]
    pub generate_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// JSON formatted output
    Json,
    /// Plain text output
    Plain,
}

impl From<OutputFormat> for OutputMode {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Human => OutputMode::Human,
            OutputFormat::Json => OutputMode::Json,
            OutputFormat::Plain => OutputMode::Plain,
        }
    }
}

impl Cli {
    pub fn load_config(&self) -> Result<Config> {
        let mut config = Config::load_with_defaults(self.config.as_ref())?;

        let overrides = self.create_cli_overrides();
        config.merge_with_cli_args(&overrides);
        config.validate()?;

        Ok(config)
    }

    pub fn create_cli_overrides(&self) -> CliOverrides {
        CliOverrides::new()
            .with_api_key(self.api_key.clone())
            .with_page_size(self.page_size)
            .with_max_pages(self.max_pages)
            .with_timeout(self.timeout)
            .with_output_dir(self.output_dir.clone())
    }

    pub fn output_mode(&self) -> OutputMode {
        self.output_format.into()
    }

    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_url_is_optional() {
        let cli = Cli::try_parse_from(["yt-comments"]).unwrap();
        assert!(cli.video_url.is_none());
        assert_eq!(cli.output_format, OutputFormat::Human);
    }

    #[test]
    fn test_full_argument_parsing() {
        let cli = Cli::try_parse_from([
            "yt-comments",
            "https://youtu.be/dQw4w9WgXcQ",
            "--output-dir",
            "exports",
            "--api-key",
            "abc",
            "--page-size",
            "50",
            "--max-pages",
            "10",
            "--timeout",
            "15",
            "--output-format",
            "json",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.video_url.as_deref(), Some("https://youtu.be/dQw4w9WgXcQ"));
        assert_eq!(cli.output_dir, Some(PathBuf::from("exports")));
        assert_eq!(cli.api_key.as_deref(), Some("abc"));
        assert_eq!(cli.page_size, Some(50));
        assert_eq!(cli.max_pages, Some(10));
        assert_eq!(cli.timeout, Some(15));
        assert_eq!(cli.output_mode(), OutputMode::Json);
        assert_eq!(cli.verbosity_level(), 2);
    }

    #[test]
    fn test_page_size_range() {
        assert!(Cli::try_parse_from(["yt-comments", "--page-size", "0"]).is_err());
        assert!(Cli::try_parse_from(["yt-comments", "--page-size", "101"]).is_err());
        assert!(Cli::try_parse_from(["yt-comments", "--page-size", "100"]).is_ok());
        assert!(Cli::try_parse_from(["yt-comments", "--max-pages", "0"]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["yt-comments", "-q", "-v"]).is_err());

        let cli = Cli::try_parse_from(["yt-comments", "-q"]).unwrap();
        assert_eq!(cli.verbosity_level(), 0);
    }

    #[test]
    fn test_cli_overrides_are_applied() {
        let cli = Cli::try_parse_from([
            "yt-comments",
            "--api-key",
            "from-cli",
            "--max-pages",
            "4",
        ])
        .unwrap();

        let mut config = Config::default();
        config.merge_with_cli_args(&cli.create_cli_overrides());
        assert_eq!(config.api_key(), Some("from-cli"));
        assert_eq!(config.api.max_pages, Some(4));
        assert_eq!(config.api.page_size, 100);
    }
}
