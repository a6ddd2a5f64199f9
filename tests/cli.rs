use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SAMPLE_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

fn yt_comments(work_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("yt-comments").unwrap();
    cmd.current_dir(work_dir.path())
        .env_remove("YOUTUBE_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn generate_config_writes_sample_file() {
    let work_dir = TempDir::new().unwrap();
    let config_path = work_dir.path().join("custom.toml");

    yt_comments(&work_dir)
        .args(["--generate-config", "--config"])
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated sample configuration file"));

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("[api]"));
    assert!(content.contains("[output]"));
}

#[test]
fn dry_run_resolves_video_id() {
    let work_dir = TempDir::new().unwrap();

    yt_comments(&work_dir)
        .args(["--dry-run", "--api-key", "test-key", "--output-format", "plain", SAMPLE_URL])
        .assert()
        .success()
        .stdout(predicate::str::contains("dQw4w9WgXcQ"))
        .stdout(predicate::str::contains("unbounded"));

    assert_eq!(fs::read_dir(work_dir.path()).unwrap().count(), 0);
}

#[test]
fn dry_run_reads_url_from_prompt() {
    let work_dir = TempDir::new().unwrap();

    yt_comments(&work_dir)
        .args(["--dry-run", "--api-key", "test-key", "--output-format", "plain"])
        .write_stdin("https://youtu.be/dQw4w9WgXcQ\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter the YouTube video URL: "))
        .stdout(predicate::str::contains("dQw4w9WgXcQ"));
}

#[test]
fn invalid_url_exits_with_code_two() {
    let work_dir = TempDir::new().unwrap();

    yt_comments(&work_dir)
        .args(["--dry-run", "--api-key", "test-key", "--output-format", "plain", "not-a-url"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid YouTube video URL"));
}

#[test]
fn json_errors_are_written_to_stderr() {
    let work_dir = TempDir::new().unwrap();

    yt_comments(&work_dir)
        .args(["--dry-run", "--api-key", "test-key", "--output-format", "json", "not-a-url"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(r#""level":"error""#))
        .stderr(predicate::str::contains("Invalid YouTube video URL: not-a-url"))
        .stdout(predicate::str::contains("Invalid YouTube video URL").not())
        .stdout(predicate::str::contains("suggestion").not());
}

#[test]
fn generate_config_into_missing_directory_exits_with_code_one() {
    let work_dir = TempDir::new().unwrap();
    let config_path = work_dir.path().join("missing").join("yt-comments.toml");

    yt_comments(&work_dir)
        .args(["--generate-config", "--config"])
        .arg(&config_path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to generate configuration file"));

    assert!(!config_path.exists());
}

#[test]
fn missing_api_key_is_a_configuration_error() {
    let work_dir = TempDir::new().unwrap();

    yt_comments(&work_dir)
        .args(["--output-format", "plain", SAMPLE_URL])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("API key"));
}

#[test]
fn api_key_is_read_from_environment() {
    let work_dir = TempDir::new().unwrap();

    yt_comments(&work_dir)
        .env("YOUTUBE_API_KEY", "from-env")
        .args(["--dry-run", "--output-format", "plain", SAMPLE_URL])
        .assert()
        .success();
}

#[tokio::test(flavor = "multi_thread")]
async fn exports_comments_from_api() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"items":[{"snippet":{"title":"Sample: Video"}}]}"#),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"items":[{"snippet":{"topLevelComment":{"snippet":{"textDisplay":"Nice!"}}}}]}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let work_dir = TempDir::new().unwrap();
    fs::write(
        work_dir.path().join("yt-comments.toml"),
        format!("[api]\nkey = \"test-key\"\nbase_url = \"{}\"\n", server.uri()),
    )
    .unwrap();

    yt_comments(&work_dir)
        .args(["--output-format", "plain", "--output-dir"])
        .arg(work_dir.path())
        .arg(SAMPLE_URL)
        .assert()
        .success()
        .stdout(predicate::str::contains("Comments saved to"))
        .stdout(predicate::str::contains("Comments: 1"));

    assert!(work_dir.path().join("Sample_ Video.xlsx").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn comment_fetch_failure_reports_status_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"items":[{"snippet":{"title":"Locked"}}]}"#),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let work_dir = TempDir::new().unwrap();
    fs::write(
        work_dir.path().join("yt-comments.toml"),
        format!("[api]\nkey = \"test-key\"\nbase_url = \"{}\"\n", server.uri()),
    )
    .unwrap();

    yt_comments(&work_dir)
        .args(["--output-format", "plain", SAMPLE_URL])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("403"));

    assert!(!work_dir.path().join("Locked.xlsx").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn video_without_comments_writes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/videos"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"items":[{"snippet":{"title":"Quiet Video"}}]}"#),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"items":[]}"#))
        .expect(1)
        .mount(&server)
        .await;

    let work_dir = TempDir::new().unwrap();
    fs::write(
        work_dir.path().join("yt-comments.toml"),
        format!("[api]\nkey = \"test-key\"\nbase_url = \"{}\"\n", server.uri()),
    )
    .unwrap();

    yt_comments(&work_dir)
        .args(["--output-format", "plain", SAMPLE_URL])
        .assert()
        .success()
        .stdout(predicate::str::contains("No comments to save."))
        .stdout(predicate::str::contains("REPORT: Nothing exported"))
        .stdout(predicate::str::contains("Comments: 0"))
        .stderr(predicate::str::contains("video has no comments"));

    let spreadsheets = fs::read_dir(work_dir.path())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().extension().map_or(false, |ext| ext == "xlsx"))
        .count();
    assert_eq!(spreadsheets, 0);
}
