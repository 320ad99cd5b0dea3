//! In-memory line source.

use std::sync::Arc;

use super::LineSource;

/// Lines held in memory, shared between traversals.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    lines: Arc<[String]>,
}

impl MemorySource {
    /// Create a source from a list of lines.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MemorySource {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a block of text into lines (`\n` or `\r\n` terminated).
    pub fn from_text(text: &str) -> Self {
        Self::new(text.lines())
    }

    /// Number of lines held.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether no lines are held.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Owning iterator over a [`MemorySource`] traversal.
#[derive(Debug, Clone)]
pub struct MemoryLines {
    lines: Arc<[String]>,
    next: usize,
}

impl Iterator for MemoryLines {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let line = self.lines.get(self.next)?.clone();
        self.next += 1;
        Some(line)
    }
}

impl LineSource for MemorySource {
    type Lines = MemoryLines;

    fn lines(&self) -> MemoryLines {
        MemoryLines {
            lines: Arc::clone(&self.lines),
            next: 0,
        }
    }

    fn describe(&self) -> String {
        format!("<memory: {} lines>", self.lines.len())
    }
}
