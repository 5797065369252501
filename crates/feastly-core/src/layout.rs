//! Viewport breakpoints for the story carousel and the recipe grid.

use crate::constants::{
    FEED_THREE_COLUMN_WIDTH, FEED_TWO_COLUMN_WIDTH, STORY_CHUNK_LARGE, STORY_CHUNK_MEDIUM,
    STORY_CHUNK_SMALL, STORY_MEDIUM_BREAKPOINT, STORY_SMALL_BREAKPOINT,
};

/// Stories per carousel page for a viewport `width` in logical pixels.
pub fn story_chunk_size(width: u32) -> usize {
    if width < STORY_SMALL_BREAKPOINT {
        STORY_CHUNK_SMALL
    } else if width < STORY_MEDIUM_BREAKPOINT {
        STORY_CHUNK_MEDIUM
    } else {
        STORY_CHUNK_LARGE
    }
}

/// Recipe grid columns for a viewport `width` in logical pixels.
pub fn feed_columns(width: u32) -> usize {
    if width >= FEED_THREE_COLUMN_WIDTH {
        3
    } else if width >= FEED_TWO_COLUMN_WIDTH {
        2
    } else {
        1
    }
}
