use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid help directory: {0}")]
    InvalidHelpDir(PathBuf),
}

impl IoError {
    fn at(path: &Path) -> impl FnOnce(std::io::Error) -> Self + '_ {
        move |source| IoError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Split text into lines with their trailing spaces and tabs removed.
///
/// Leading tabs are kept: block rules depend on them.
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.trim_end_matches([' ', '\t', '\r']).to_string())
        .collect()
}

/// Read a help file as a list of lines
pub fn read_lines(path: &Path) -> Result<Vec<String>, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(IoError::at(path))?;
    Ok(split_lines(&text))
}

pub fn read_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::at(path))
}

/// Write content to a file, creating its parent directories
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::at(parent))?;
    }

    fs::write(path, content).map_err(IoError::at(path))
}

/// Scan for `*.txt` help files directly inside `dir`, sorted by path
pub fn scan_help_files(dir: &Path) -> Result<Vec<PathBuf>, IoError> {
    validate_help_dir(dir)?;

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(IoError::at(dir))? {
        let path = entry.map_err(IoError::at(dir))?.path();

        if path.is_file()
            && let Some(ext) = path.extension()
            && ext == "txt"
        {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

pub fn validate_help_dir(path: &Path) -> Result<(), IoError> {
    if !path.is_dir() {
        return Err(IoError::InvalidHelpDir(path.to_path_buf()));
    }

    Ok(())
}
