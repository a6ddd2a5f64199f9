use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;
use yt_comments::ui::prompt_for_url;
use yt_comments::{
    Cli, CommentScraper, Config, OutputFormatter, ScraperError, UserFriendlyError, VideoIdParser,
};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let exit_code = run().await;
    process::exit(exit_code);
}

async fn run() -> i32 {
    // Parse CLI arguments
    let cli = Cli::parse();
    setup_logging(cli.verbosity_level());

    // Handle special commands first
    if cli.generate_config {
        return handle_generate_config(&cli);
    }

    let formatter = OutputFormatter::new(cli.output_mode(), cli.verbosity_level(), cli.quiet);

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            formatter.print_user_friendly_error(&e);
            return exit_code_for(&e);
        }
    };

    let video_url = match cli.video_url.clone() {
        Some(url) => url,
        None => match prompt_for_url() {
            Ok(url) => url,
            Err(e) => {
                formatter.print_user_friendly_error(&e);
                return exit_code_for(&e);
            }
        },
    };

    // Handle dry run mode
    if cli.dry_run {
        return handle_dry_run(&config, &formatter, &video_url);
    }

    let scraper = match CommentScraper::new(
        config,
        cli.output_mode(),
        cli.verbosity_level(),
        cli.quiet,
    ) {
        Ok(scraper) => scraper,
        Err(e) => {
            formatter.print_user_friendly_error(&e);
            return exit_code_for(&e);
        }
    };

    // Execute main export workflow
    match scraper.scrape(&video_url).await {
        Ok(report) => {
            scraper.output_formatter().print_scrape_report(&report);
            0
        }
        Err(e) => {
            scraper.handle_error(&e);
            exit_code_for(&e)
        }
    }
}

fn exit_code_for(error: &ScraperError) -> i32 {
    match error {
        ScraperError::Cancelled => 130, // Interrupted (SIGINT)
        ScraperError::InvalidUrl { .. } => 2,
        ScraperError::VideoNotFound { .. } => 3,
        ScraperError::Fetch { .. } | ScraperError::Decode { .. } => 4,
        ScraperError::Network { .. } => 5,
        ScraperError::Io(_) | ScraperError::Export { .. } => 6,
        ScraperError::Config { .. } => 7,
        ScraperError::PageLimitExceeded { .. } => 8,
        ScraperError::Timeout { .. } => 9,
    }
}

fn handle_generate_config(cli: &Cli) -> i32 {
    let config_path = cli
        .config
        .as_ref()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|| "yt-comments.toml".to_string());

    match CommentScraper::generate_sample_config(&config_path) {
        Ok(()) => {
            println!("Generated sample configuration file: {}", config_path);
            println!("\nAdd your API key under [api] as key = \"...\", then run:");
            println!("  yt-comments <video-url> --config {}", config_path);
            0
        }
        Err(e) => {
            eprintln!(
                "Failed to generate configuration file: {}",
                e.user_message()
            );
            if let Some(suggestion) = e.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            1
        }
    }
}

fn handle_dry_run(config: &Config, formatter: &OutputFormatter, video_url: &str) -> i32 {
    formatter.info("DRY RUN MODE - No requests will be sent and no files written");
    formatter.print_separator();

    let video_id = match VideoIdParser::new().and_then(|parser| parser.parse(video_url)) {
        Ok(id) => id,
        Err(e) => {
            formatter.print_user_friendly_error(&e);
            return exit_code_for(&e);
        }
    };
    formatter.success(&format!("Video ID resolved: {}", video_id));

    let base = config.api.base_url.trim_end_matches('/');
    let max_pages = config
        .api
        .max_pages
        .map(|n| n.to_string())
        .unwrap_or_else(|| "unbounded".to_string());

    formatter.detail("API base URL", base);
    formatter.detail("Page size", &config.api.page_size.to_string());
    formatter.detail("Max pages", &max_pages);
    formatter.detail("Request timeout", &format!("{}s", config.api.timeout));
    formatter.detail(
        "Output directory",
        &config.output.directory.display().to_string(),
    );

    formatter.print_separator();
    formatter.detail(
        "Title request",
        &format!("GET {}/videos?id={}&part=snippet", base, video_id),
    );
    formatter.detail(
        "Comment requests",
        &format!(
            "GET {}/commentThreads?textFormat=plainText&part=snippet&videoId={}&maxResults={}[&pageToken=...]",
            base, video_id, config.api.page_size
        ),
    );
    formatter.detail("Output file", "<sanitized video title>.xlsx");

    formatter.print_separator();
    formatter.success("Dry run completed successfully");

    0
}

fn setup_logging(verbosity: u8) {
    let default_directive = match verbosity {
        0 => "warn",
        1 => "yt_comments=info",
        _ => "yt_comments=debug",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    // A subscriber may already be installed (e.g. by tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
