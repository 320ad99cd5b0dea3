//! Configuration for word statistics queries.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WordStatsError};
use crate::search::DEFAULT_TOP_N;
use crate::stats::Execution;

/// Configuration for a [`WordStats`](crate::engine::WordStats) engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    /// Whether folds run data-parallel on rayon.
    pub parallel: bool,

    /// Thread pool size for parallel folds.
    /// If None, uses rayon's global pool.
    pub thread_pool_size: Option<usize>,

    /// Number of entries reported by ranked search.
    pub top_n: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            thread_pool_size: None,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl StatsConfig {
    /// Create a default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: StatsConfig = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Enable or disable parallel folds.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Use a dedicated pool of `threads` workers for parallel folds.
    pub fn with_thread_pool_size(mut self, threads: usize) -> Self {
        self.thread_pool_size = Some(threads);
        self
    }

    /// Set the number of ranked search entries.
    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    /// Execution mode implied by `parallel`.
    pub fn execution(&self) -> Execution {
        if self.parallel {
            Execution::Parallel
        } else {
            Execution::Sequential
        }
    }

    /// Worker count parallel folds will use.
    pub fn effective_threads(&self) -> usize {
        self.thread_pool_size.unwrap_or_else(num_cpus::get)
    }

    /// Check that all values are usable.
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 {
            return Err(WordStatsError::invalid_config("top_n must be at least 1"));
        }
        if self.thread_pool_size == Some(0) {
            return Err(WordStatsError::invalid_config(
                "thread_pool_size must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = StatsConfig::default();
        assert!(!config.parallel);
        assert_eq!(config.top_n, 20);
        assert_eq!(config.execution(), Execution::Sequential);
        assert!(config.effective_threads() >= 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = StatsConfig::new()
            .with_parallel(true)
            .with_thread_pool_size(3)
            .with_top_n(5);

        assert_eq!(config.execution(), Execution::Parallel);
        assert_eq!(config.effective_threads(), 3);
        assert_eq!(config.top_n, 5);
    }

    #[test]
    fn test_validation() {
        assert!(StatsConfig::new().with_top_n(0).validate().is_err());
        assert!(StatsConfig::new().with_thread_pool_size(0).validate().is_err());
    }

    #[test]
    fn test_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"parallel": true, "top_n": 7}}"#).unwrap();

        let config = StatsConfig::from_json_file(file.path()).unwrap();
        assert!(config.parallel);
        assert_eq!(config.top_n, 7);
        assert_eq!(config.thread_pool_size, None);
    }

    #[test]
    fn test_from_json_file_errors() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = StatsConfig::from_json_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("failed to parse config file"));

        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"top_n": 0}}"#).unwrap();
        assert!(matches!(
            StatsConfig::from_json_file(file.path()),
            Err(WordStatsError::InvalidConfig(_))
        ));
    }
}
