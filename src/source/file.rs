//! File-backed line source.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::{debug, error};

use super::LineSource;
use crate::error::Result;

/// A text file read line by line.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for the file at `path`. The file is not opened until a
    /// traversal starts.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        FileSource { path: path.into() }
    }

    /// Path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the file, returning the I/O error instead of logging it.
    pub fn open(&self) -> Result<io::Lines<BufReader<File>>> {
        let file = File::open(&self.path)?;
        Ok(BufReader::new(file).lines())
    }
}

impl LineSource for FileSource {
    type Lines = FileLines;

    fn lines(&self) -> FileLines {
        let inner = match self.open() {
            Ok(lines) => {
                debug!("Opened {}", self.path.display());
                Some(lines)
            }
            Err(e) => {
                error!("Failed to open {}: {e:?}", self.path.display());
                None
            }
        };

        FileLines {
            inner,
            path: self.path.clone(),
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Best-effort line iterator over a file.
///
/// The file handle is owned by the iterator. It is closed as soon as the end
/// of the file or the first read error is reached, or when the iterator is
/// dropped, whichever comes first. After a read error the iterator is fused.
#[derive(Debug)]
pub struct FileLines {
    inner: Option<io::Lines<BufReader<File>>>,
    path: PathBuf,
}

impl FileLines {
    /// Whether the underlying file is still open.
    pub fn is_open(&self) -> bool {
        self.inner.is_some()
    }
}

impl Iterator for FileLines {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match self.inner.as_mut()?.next() {
            Some(Ok(line)) => Some(line),
            Some(Err(e)) => {
                error!("Failed to read {}: {e:?}", self.path.display());
                self.inner = None;
                None
            }
            None => {
                self.inner = None;
                None
            }
        }
    }
}
