//! Script documents and their line views.
//!
//! A [`Document`] exposes two views of a script's content:
//!
//! - the *raw* view, one entry per physical line, used only by the
//!   whitespace rule;
//! - the *normalized* view, where every line is trimmed and comment or blank
//!   lines are dropped, used by every structural rule.
//!
//! Indices into the normalized view do not line up with physical line
//! numbers once comments or blank lines have been stripped before them.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Marker that starts a line comment.
pub const COMMENT_MARKER: char = ';';

/// Extension every linted script must carry.
const SCRIPT_EXTENSION: &str = "psc";

/// Errors raised while turning a path into a [`Document`].
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The path does not exist.
    #[error("cannot create parser: cannot read file {}, no such file or directory", .0.display())]
    NotFound(PathBuf),

    /// The path is a directory.
    #[error("cannot create parser: cannot use {}, path is directory", .0.display())]
    IsDirectory(PathBuf),

    /// The file does not carry the `.psc` extension.
    #[error("cannot create parser: cannot use file {0}, file does not have .psc extension")]
    Extension(String),

    /// The file name is not valid UTF-8.
    #[error("cannot create parser: file name of {} is not valid UTF-8", .0.display())]
    FileName(PathBuf),

    /// The current directory could not be resolved.
    #[error("cannot create parser: cannot get current directory")]
    CurrentDir(#[source] std::io::Error),

    /// The file exists but could not be read.
    #[error("cannot create parser: cannot read file {}: {source}", .path.display())]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },
}

/// A script under lint, built once per lint pass.
#[derive(Debug, Clone)]
pub struct Document {
    path: PathBuf,
    file_name: String,
    script_name: String,
    content: String,
    normalized: OnceLock<Vec<String>>,
}

impl Document {
    /// Creates a document from in-memory content.
    ///
    /// The file name and expected script name are derived from `path`: the
    /// base name, and the base name without its extension.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let script_name = path
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self::from_parts(path, file_name, script_name, content)
    }

    /// Creates a document with an explicit file name and expected script name.
    #[must_use]
    pub fn from_parts(
        path: impl Into<PathBuf>,
        file_name: impl Into<String>,
        script_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            file_name: file_name.into(),
            script_name: script_name.into(),
            content: content.into(),
            normalized: OnceLock::new(),
        }
    }

    /// Loads a `.psc` script from disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is missing, is a directory, lacks the
    /// `.psc` extension, or cannot be read.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            std::env::current_dir()
                .map_err(SourceError::CurrentDir)?
                .join(path)
        };

        let metadata =
            std::fs::metadata(&absolute).map_err(|_| SourceError::NotFound(absolute.clone()))?;
        if metadata.is_dir() {
            return Err(SourceError::IsDirectory(absolute));
        }

        let file_name = absolute
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| SourceError::FileName(absolute.clone()))?
            .to_string();

        let script_name = match absolute.extension().and_then(|e| e.to_str()) {
            Some(SCRIPT_EXTENSION) => absolute
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default()
                .to_string(),
            _ => return Err(SourceError::Extension(file_name)),
        };

        let content = std::fs::read_to_string(&absolute).map_err(|e| SourceError::Io {
            path: absolute.clone(),
            source: e,
        })?;

        tracing::debug!("Loaded {} ({} bytes)", absolute.display(), content.len());

        Ok(Self::from_parts(absolute, file_name, script_name, content))
    }

    /// Returns the path the document was created from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the base name of the script file (e.g., `MyQuest.psc`).
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the script name the header must declare (e.g., `MyQuest`).
    #[must_use]
    pub fn script_name(&self) -> &str {
        &self.script_name
    }

    /// Returns the full script content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the raw line view.
    #[must_use]
    pub fn raw_lines(&self) -> Vec<&str> {
        raw_lines(&self.content)
    }

    /// Returns the normalized line view, computed on first use.
    #[must_use]
    pub fn normalized_lines(&self) -> &[String] {
        self.normalized.get_or_init(|| normalize_lines(&self.content))
    }
}

/// Splits content into physical lines without any filtering.
#[must_use]
pub fn raw_lines(content: &str) -> Vec<&str> {
    content.lines().collect()
}

/// Builds the normalized line view of `content`.
///
/// Every line is trimmed; lines starting with [`COMMENT_MARKER`] and lines
/// that are empty after trimming are dropped.
#[must_use]
pub fn normalize_lines(content: &str) -> Vec<String> {
    content
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_MARKER))
        .map(String::from)
        .collect()
}
