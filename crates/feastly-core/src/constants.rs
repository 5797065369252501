//! Constants used throughout the Feastly core crate.

/// Image reference shown for a story that has no images of its own.
pub const FALLBACK_STORY_IMAGE: &str = "meal2.jpg";

/// Viewport width assumed when the host does not report one.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 390;

/// Default location of the recipe feed file.
pub const DEFAULT_FEED_PATH: &str = "data/recipes.json";

/// Default location of the story list file.
pub const DEFAULT_STORIES_PATH: &str = "data/stories.json";

/// Story carousel page size below the small breakpoint.
pub const STORY_CHUNK_SMALL: usize = 4;

/// Story carousel page size between the small and medium breakpoints.
pub const STORY_CHUNK_MEDIUM: usize = 5;

/// Story carousel page size at or above the medium breakpoint.
pub const STORY_CHUNK_LARGE: usize = 7;

/// Widths below this use [`STORY_CHUNK_SMALL`].
pub const STORY_SMALL_BREAKPOINT: u32 = 375;

/// Widths below this (and at least [`STORY_SMALL_BREAKPOINT`]) use [`STORY_CHUNK_MEDIUM`].
pub const STORY_MEDIUM_BREAKPOINT: u32 = 768;

/// Feed widths at or above this render two columns.
pub const FEED_TWO_COLUMN_WIDTH: u32 = 700;

/// Feed widths at or above this render three columns.
pub const FEED_THREE_COLUMN_WIDTH: u32 = 1000;
