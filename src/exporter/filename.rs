use crate::parser::VideoId;

pub const EXCEL_FILE_EXTENSION: &str = ".xlsx";

/// Characters that Windows refuses in file names.
const ILLEGAL_FILENAME_CHARS: &[char] = &['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Replaces every character that is illegal in a file name with `_`.
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .map(|c| if ILLEGAL_FILENAME_CHARS.contains(&c) { '_' } else { c })
        .collect()
}

/// `<sanitized title>.xlsx`, falling back to the video ID for blank titles.
pub fn output_file_name(title: &str, video_id: &VideoId) -> String {
    let stem = sanitize_title(title);
    if stem.trim().is_empty() {
        format!("{}{}", video_id, EXCEL_FILE_EXTENSION)
    } else {
        format!("{}{}", stem, EXCEL_FILE_EXTENSION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_replaces_each_illegal_char() {
        assert_eq!(sanitize_title("My/Video:Title"), "My_Video_Title");
        assert_eq!(sanitize_title(r#"<>:"/\|?*"#), "_________");
        assert_eq!(sanitize_title("a?b*c"), "a_b_c");
    }

    #[test]
    fn test_sanitize_leaves_other_chars() {
        let title = "Rick Astley - Never Gonna Give You Up (Official Video) [4K] #1 ñ 日本";
        assert_eq!(sanitize_title(title), title);
        assert_eq!(sanitize_title(""), "");
    }

    #[test]
    fn test_output_file_name() {
        let id = VideoId::new("dQw4w9WgXcQ").unwrap();
        assert_eq!(output_file_name("Sample: Video", &id), "Sample_ Video.xlsx");
        assert_eq!(output_file_name("   ", &id), "dQw4w9WgXcQ.xlsx");
        assert_eq!(output_file_name("", &id), "dQw4w9WgXcQ.xlsx");
        assert_eq!(output_file_name("???", &id), "___.xlsx");
    }
}
