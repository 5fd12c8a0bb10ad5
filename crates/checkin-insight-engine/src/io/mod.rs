use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("Report not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid reports directory: {0}")]
    InvalidReportsDir(String),
}

/// File extensions treated as saved analyst reports.
const REPORT_EXTENSIONS: [&str; 2] = ["txt", "md"];

/// Read a saved report file and return its text
pub fn read_report(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Scan for saved report files in the reports directory
pub fn scan_report_files(reports_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !reports_root.exists() {
        return Err(IoError::InvalidReportsDir(
            "reports directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(reports_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext.to_str().is_some_and(|e| REPORT_EXTENSIONS.contains(&e))
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_reports_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidReportsDir(
            "Directory does not exist".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_report, create_test_reports_dir};

    #[test]
    fn scan_finds_report_files_sorted() {
        let dir = create_test_reports_dir();
        create_test_report(&dir, "b_followup.txt", "- Second");
        create_test_report(&dir, "a_initial.md", "- First");

        let files = scan_report_files(dir.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].file_name().unwrap(), "a_initial.md");
        assert_eq!(files[1].file_name().unwrap(), "b_followup.txt");
    }

    #[test]
    fn scan_recurses_into_subdirectories() {
        let dir = create_test_reports_dir();
        create_test_report(&dir, "root.txt", "root report");
        create_test_report(&dir, "august/nested.txt", "nested report");

        let files = scan_report_files(dir.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|f| f.file_name().unwrap() == "nested.txt"));
    }

    #[test]
    fn scan_ignores_other_file_types() {
        let dir = create_test_reports_dir();
        create_test_report(&dir, "report.txt", "keep");
        create_test_report(&dir, "model.json", "{}");
        create_test_report(&dir, "scores.csv", "a,b");

        let files = scan_report_files(dir.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].file_name().unwrap(), "report.txt");
    }

    #[test]
    fn scan_rejects_missing_directory() {
        let result = scan_report_files(Path::new("/this/path/does/not/exist"));
        assert!(matches!(result, Err(IoError::InvalidReportsDir(_))));
    }

    #[test]
    fn read_report_returns_text() {
        let dir = create_test_reports_dir();
        let path = create_test_report(&dir, "report.txt", "### Heading\n\n- item");

        assert_eq!(read_report(&path).unwrap(), "### Heading\n\n- item");
    }

    #[test]
    fn read_missing_report_is_not_found() {
        let dir = create_test_reports_dir();
        let result = read_report(&dir.path().join("missing.txt"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn validate_accepts_existing_directory() {
        let dir = create_test_reports_dir();
        assert!(validate_reports_dir(dir.path()).is_ok());
    }

    #[test]
    fn validate_rejects_missing_directory() {
        let result = validate_reports_dir(Path::new("/nonexistent/reports"));
        assert!(matches!(result, Err(IoError::InvalidReportsDir(_))));
    }
}
