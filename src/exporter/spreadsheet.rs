use crate::api::Comment;
use crate::error::{Result, ScraperError};
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Header of the single column in the exported sheet.
pub const COMMENTS_COLUMN: &str = "Comments";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Written { path: PathBuf, rows: usize },
    /// Nothing to write; no file was created.
    SkippedEmpty,
}

impl ExportOutcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ExportOutcome::Written { path, .. } => Some(path),
            ExportOutcome::SkippedEmpty => None,
        }
    }
}

pub struct SpreadsheetExporter {
    output_directory: PathBuf,
}

impl SpreadsheetExporter {
    pub fn new<P: Into<PathBuf>>(output_directory: P) -> Self {
        Self {
            output_directory: output_directory.into(),
        }
    }

    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    pub fn output_path(&self, file_name: &str) -> PathBuf {
        self.output_directory.join(file_name)
    }

    /// Writes `comments` to `<output directory>/<file_name>`, overwriting any
    /// existing file. An empty slice is skipped without touching the disk.
    pub fn export(&self, comments: &[Comment], file_name: &str) -> Result<ExportOutcome> {
        if comments.is_empty() {
            info!(file_name, "no comments to export, skipping spreadsheet");
            return Ok(ExportOutcome::SkippedEmpty);
        }

        let path = self.output_path(file_name);
        write_comments(&path, comments)?;

        info!(path = %path.display(), rows = comments.len(), "wrote spreadsheet");
        Ok(ExportOutcome::Written {
            path,
            rows: comments.len(),
        })
    }
}

/// Single sheet, `Comments` in A1, one comment per row below it.
pub fn write_comments(path: &Path, comments: &[Comment]) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.write_string(0, 0, COMMENTS_COLUMN)?;

    for (index, comment) in comments.iter().enumerate() {
        let row = u32::try_from(index + 1).map_err(|_| ScraperError::Export {
            message: format!("Too many comments for one worksheet: {}", comments.len()),
        })?;
        worksheet.write_string(row, 0, comment.as_str())?;
    }

    debug!(path = %path.display(), "saving workbook");
    workbook.save(path)?;
    Ok(())
}
