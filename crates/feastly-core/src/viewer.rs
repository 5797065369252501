//! Story detail navigation.
//!
//! Once a story is opened from the carousel, the viewer steps through its images and
//! rolls over into the neighbouring stories at either end. Moving to a different story
//! always starts at that story's first image.

use crate::stories::{resolve, Story};
use crate::{CoreError, CoreResult};

/// Position of the story detail view: which story and which of its images.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoryViewer {
    story: usize,
    image: usize,
}

impl StoryViewer {
    /// Open the viewer on the story at `global_index`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::IndexOutOfRange` if there is no story at `global_index`.
    pub fn open(stories: &[Story], global_index: usize) -> CoreResult<Self> {
        resolve(stories, global_index)?;
        Ok(Self {
            story: global_index,
            image: 0,
        })
    }

    pub fn story_index(&self) -> usize {
        self.story
    }

    pub fn image_index(&self) -> usize {
        self.image
    }

    pub fn next_story(&self, stories: &[Story]) -> Self {
        if self.story + 1 >= stories.len() {
            return *self;
        }
        Self {
            story: self.story + 1,
            image: 0,
        }
    }

    pub fn prev_story(&self) -> Self {
        if self.story == 0 {
            return *self;
        }
        Self {
            story: self.story - 1,
            image: 0,
        }
    }

    /// Advance one image, rolling over to the next story after the last image.
    pub fn next_image(&self, stories: &[Story]) -> Self {
        let count = stories.get(self.story).map_or(1, Story::image_count);
        if self.image + 1 < count {
            return Self {
                image: self.image + 1,
                ..*self
            };
        }
        self.next_story(stories)
    }

    /// Step back one image, rolling over to the previous story before the first image.
    pub fn prev_image(&self) -> Self {
        if self.image > 0 {
            return Self {
                image: self.image - 1,
                ..*self
            };
        }
        self.prev_story()
    }

    /// Image reference currently on screen.
    pub fn current_image<'a>(&self, stories: &'a [Story]) -> CoreResult<&'a str> {
        let story = resolve(stories, self.story)?;
        story.image_at(self.image).ok_or(CoreError::IndexOutOfRange {
            index: self.image,
            len: story.image_count(),
        })
    }
}
