//! Line sources for word statistics.
//!
//! A [`LineSource`] hands out independent, lazily read traversals of a text's
//! lines. Every query opens its own traversal, so no state is shared between
//! queries.
//!
//! - [`file::FileSource`] - Reads a file from disk, best-effort
//! - [`memory::MemorySource`] - Serves lines held in memory

pub mod file;
pub mod memory;

pub use file::{FileLines, FileSource};
pub use memory::{MemoryLines, MemorySource};

/// A trait for anything that can produce the lines of a text, once per call.
///
/// Implementations never fail: an unreadable source logs the failure and
/// yields fewer lines (possibly none). Callers that need to observe the
/// failure use the source-specific strict accessors instead.
pub trait LineSource: Send + Sync + std::fmt::Debug {
    /// Iterator over the lines of one traversal, without line terminators.
    type Lines: Iterator<Item = String> + Send;

    /// Start a new traversal from the first line.
    fn lines(&self) -> Self::Lines;

    /// Human-readable name of the source for log messages.
    fn describe(&self) -> String;
}
