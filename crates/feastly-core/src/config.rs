//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the core. The
//! core never reads process-wide environment variables itself; the host hands in the raw
//! values and the parsers here validate them.

use crate::constants::{DEFAULT_FEED_PATH, DEFAULT_STORIES_PATH, DEFAULT_VIEWPORT_WIDTH};
use crate::layout;
use crate::{CoreError, CoreResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoreConfig {
    feed_path: PathBuf,
    stories_path: PathBuf,
    viewport_width: u32,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidArgument` if `viewport_width` is zero.
    pub fn new(
        feed_path: PathBuf,
        stories_path: PathBuf,
        viewport_width: u32,
    ) -> CoreResult<Self> {
        if viewport_width == 0 {
            return Err(CoreError::InvalidArgument(
                "viewport_width must be positive".into(),
            ));
        }

        Ok(Self {
            feed_path,
            stories_path,
            viewport_width,
        })
    }

    /// Build a configuration from optional raw values, falling back to defaults.
    pub fn from_values(
        feed_path: Option<String>,
        stories_path: Option<String>,
        viewport_width: Option<String>,
    ) -> CoreResult<Self> {
        Self::new(
            path_from_env_value(feed_path, DEFAULT_FEED_PATH),
            path_from_env_value(stories_path, DEFAULT_STORIES_PATH),
            viewport_width_from_env_value(viewport_width)?,
        )
    }

    pub fn feed_path(&self) -> &Path {
        &self.feed_path
    }

    pub fn stories_path(&self) -> &Path {
        &self.stories_path
    }

    pub fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    /// Story carousel page size for the configured viewport.
    pub fn story_chunk_size(&self) -> usize {
        layout::story_chunk_size(self.viewport_width)
    }

    /// Number of feed columns for the configured viewport.
    pub fn feed_columns(&self) -> usize {
        layout::feed_columns(self.viewport_width)
    }
}

/// Parse a path from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns `default`.
pub fn path_from_env_value(value: Option<String>, default: &str) -> PathBuf {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(default))
}

/// Parse the viewport width from an optional string value.
///
/// If `value` is `None` or empty/whitespace, returns [`DEFAULT_VIEWPORT_WIDTH`].
pub fn viewport_width_from_env_value(value: Option<String>) -> CoreResult<u32> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    let Some(value) = value else {
        return Ok(DEFAULT_VIEWPORT_WIDTH);
    };

    match value.parse::<u32>() {
        Ok(0) | Err(_) => Err(CoreError::InvalidArgument(format!(
            "viewport width must be a positive integer, got {value:?}"
        ))),
        Ok(width) => Ok(width),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_use_defaults() {
        let cfg = CoreConfig::from_values(None, Some("  ".into()), None).expect("defaults");
        assert_eq!(cfg.feed_path(), Path::new(DEFAULT_FEED_PATH));
        assert_eq!(cfg.stories_path(), Path::new(DEFAULT_STORIES_PATH));
        assert_eq!(cfg.viewport_width(), DEFAULT_VIEWPORT_WIDTH);
        assert_eq!(cfg.story_chunk_size(), 5);
    }

    #[test]
    fn parses_explicit_width() {
        assert_eq!(viewport_width_from_env_value(Some(" 1024 ".into())), Ok(1024));
    }

    #[test]
    fn rejects_zero_and_garbage_widths() {
        for raw in ["0", "-3", "wide"] {
            let err = viewport_width_from_env_value(Some(raw.into())).expect_err(raw);
            assert!(matches!(err, CoreError::InvalidArgument(_)), "{raw}: {err:?}");
        }
    }

    #[test]
    fn width_drives_derived_layout() {
        let cfg = CoreConfig::from_values(Some("feed.yaml".into()), None, Some("320".into()))
            .expect("config");
        assert_eq!(cfg.feed_path(), Path::new("feed.yaml"));
        assert_eq!(cfg.story_chunk_size(), 4);
        assert_eq!(cfg.feed_columns(), 1);

        let wide = CoreConfig::from_values(None, None, Some("1200".into())).expect("wide");
        assert_eq!(wide.story_chunk_size(), 7);
        assert_eq!(wide.feed_columns(), 3);
        assert!(CoreConfig::new("a.json".into(), "b.json".into(), 0).is_err());
    }
}
