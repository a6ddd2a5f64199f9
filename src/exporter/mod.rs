pub mod filename;
pub mod spreadsheet;

pub use filename::{output_file_name, sanitize_title, EXCEL_FILE_EXTENSION};
pub use spreadsheet::{ExportOutcome, SpreadsheetExporter, COMMENTS_COLUMN};
