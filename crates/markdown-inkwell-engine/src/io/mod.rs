use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("File is not valid UTF-8: {0}")]
    InvalidUtf8(PathBuf),
}

/// Read a markdown file verbatim, line endings included
pub fn read_document(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|_| IoError::InvalidUtf8(path.to_path_buf()))
}

/// Write content to a markdown file exactly as given
pub fn write_document(path: &Path, content: &str) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Directory that relative image paths in `path` resolve against
pub fn base_dir_for(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{create_test_dir, create_test_file};

    #[test]
    fn test_read_keeps_line_endings() {
        // Given a file with mixed line endings
        let dir = create_test_dir();
        let path = create_test_file(&dir, "mixed.md", b"# a\r\n- b\rc\n");

        // When reading it
        let content = read_document(&path).unwrap();

        // Then nothing is normalized
        assert_eq!(content, "# a\r\n- b\rc\n");
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = create_test_dir();
        let path = dir.path().join("nope.md");
        assert!(matches!(read_document(&path), Err(IoError::NotFound(p)) if p == path));
    }

    #[test]
    fn test_invalid_utf8_is_reported() {
        let dir = create_test_dir();
        let path = create_test_file(&dir, "bad.md", &[0x66, 0xff, 0xfe]);
        assert!(matches!(read_document(&path), Err(IoError::InvalidUtf8(_))));
    }

    #[test]
    fn test_write_creates_parents_and_round_trips() {
        // Given a path in a directory that doesn't exist yet
        let dir = create_test_dir();
        let path = dir.path().join("notes/sub/doc.md");

        // When writing and reading back
        write_document(&path, "line\r\n\n**x**").unwrap();

        // Then the bytes are unchanged
        assert_eq!(read_document(&path).unwrap(), "line\r\n\n**x**");
    }

    #[test]
    fn test_base_dir_for() {
        assert_eq!(
            base_dir_for(Path::new("/notes/day/today.md")),
            PathBuf::from("/notes/day")
        );
        assert_eq!(base_dir_for(Path::new("today.md")), PathBuf::from("."));
    }
}
