//! Story carousel: chunking the global story list into pages and paginating over them.
//!
//! The global story list is ordered and that order defines each story's global index.
//! Chunks are borrowed views into the list and never reorder it.
//!
//! Pagination state is a small immutable value. Changing the page size with
//! [`Pagination::resize`] leaves the current page untouched, even if it no
//! longer exists; callers that want a valid page must call [`Pagination::clamped`].

use crate::constants::FALLBACK_STORY_IMAGE;
use crate::{CoreError, CoreResult, NonEmptyText};

/// A user story shown in the carousel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Story {
    pub username: NonEmptyText,
    pub profile_picture: Option<String>,
    /// Image references in display order. May be empty.
    pub images: Vec<String>,
    pub dish_title: String,
    pub cook_name: String,
    pub post_date: String,
    pub description: String,
    pub time_taken: String,
    pub difficulty: String,
    pub calories: String,
    /// Ingredient count as displayed, e.g. "8".
    pub ingredient_count: String,
}

impl Story {
    pub fn new(username: NonEmptyText, images: Vec<String>) -> Self {
        Self {
            username,
            profile_picture: None,
            images,
            dish_title: String::new(),
            cook_name: String::new(),
            post_date: String::new(),
            description: String::new(),
            time_taken: String::new(),
            difficulty: String::new(),
            calories: String::new(),
            ingredient_count: String::new(),
        }
    }

    /// Number of images to page through. A story without images still shows the
    /// fallback image, so this is never zero.
    pub fn image_count(&self) -> usize {
        self.images.len().max(1)
    }

    /// Image reference at `index`, using the fallback image for stories without images.
    pub fn image_at(&self, index: usize) -> Option<&str> {
        if self.images.is_empty() {
            return (index == 0).then_some(FALLBACK_STORY_IMAGE);
        }
        self.images.get(index).map(String::as_str)
    }
}

/// Split `items` into contiguous pages of `chunk_size`. The last page may be shorter.
///
/// # Errors
///
/// Returns `CoreError::InvalidArgument` if `chunk_size` is zero.
pub fn chunk<T>(items: &[T], chunk_size: usize) -> CoreResult<Vec<&[T]>> {
    ensure_chunk_size(chunk_size)?;
    Ok(items.chunks(chunk_size).collect())
}

/// Number of pages `len` items split into, rounding up.
pub fn chunk_count(len: usize, chunk_size: usize) -> CoreResult<usize> {
    ensure_chunk_size(chunk_size)?;
    Ok(len.div_ceil(chunk_size))
}

/// Position in the full list of the item at `index_in_chunk` on page `page`.
///
/// No bounds checking happens here; dereference the result with [`resolve`].
pub fn global_index(page: usize, chunk_size: usize, index_in_chunk: usize) -> usize {
    page * chunk_size + index_in_chunk
}

/// Look up the item at a global index.
///
/// # Errors
///
/// Returns `CoreError::IndexOutOfRange` if `index` is past the end of `items`.
pub fn resolve<T>(items: &[T], index: usize) -> CoreResult<&T> {
    items.get(index).ok_or(CoreError::IndexOutOfRange {
        index,
        len: items.len(),
    })
}

fn ensure_chunk_size(chunk_size: usize) -> CoreResult<()> {
    if chunk_size == 0 {
        return Err(CoreError::InvalidArgument(
            "chunk_size must be at least 1".into(),
        ));
    }
    Ok(())
}

/// Current carousel page and page size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    current_page: usize,
    chunk_size: usize,
}

impl Pagination {
    /// Start on the first page.
    pub fn new(chunk_size: usize) -> CoreResult<Self> {
        ensure_chunk_size(chunk_size)?;
        Ok(Self {
            current_page: 0,
            chunk_size,
        })
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Number of pages for a list of `item_count` items.
    pub fn page_count(&self, item_count: usize) -> usize {
        item_count.div_ceil(self.chunk_size)
    }

    /// Whether the current page exists for a list of `item_count` items.
    pub fn is_in_range(&self, item_count: usize) -> bool {
        self.current_page < self.page_count(item_count)
    }

    pub fn has_prev(&self) -> bool {
        self.current_page > 0
    }

    pub fn has_next(&self, item_count: usize) -> bool {
        self.current_page + 1 < self.page_count(item_count)
    }

    /// Previous page, or unchanged on the first page.
    pub fn prev(&self) -> Self {
        if !self.has_prev() {
            return *self;
        }
        Self {
            current_page: self.current_page - 1,
            ..*self
        }
    }

    /// Next page, or unchanged on the last page.
    pub fn next(&self, item_count: usize) -> Self {
        if !self.has_next(item_count) {
            return *self;
        }
        Self {
            current_page: self.current_page + 1,
            ..*self
        }
    }

    /// Change the page size, keeping the current page number as-is.
    pub fn resize(&self, chunk_size: usize) -> CoreResult<Self> {
        ensure_chunk_size(chunk_size)?;
        Ok(Self {
            chunk_size,
            ..*self
        })
    }

    /// Pull the current page back into `[0, page_count - 1]`.
    pub fn clamped(&self, item_count: usize) -> Self {
        let last = self.page_count(item_count).saturating_sub(1);
        Self {
            current_page: self.current_page.min(last),
            ..*self
        }
    }

    /// Items on the current page, or `None` if the page does not exist.
    pub fn current_chunk<'a, T>(&self, items: &'a [T]) -> Option<&'a [T]> {
        let chunk = items.chunks(self.chunk_size).nth(self.current_page);
        if chunk.is_none() && !items.is_empty() {
            tracing::warn!(
                page = self.current_page,
                pages = self.page_count(items.len()),
                "carousel page is out of range"
            );
        }
        chunk
    }

    /// Resolve a tap on the current page to its global index and item.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::IndexOutOfRange` if the current page does not exist or
    /// `index_in_chunk` is past the end of it.
    pub fn select<'a, T>(
        &self,
        items: &'a [T],
        index_in_chunk: usize,
    ) -> CoreResult<(usize, &'a T)> {
        let chunk = self
            .current_chunk(items)
            .ok_or(CoreError::IndexOutOfRange {
                index: self.current_page,
                len: self.page_count(items.len()),
            })?;
        if index_in_chunk >= chunk.len() {
            return Err(CoreError::IndexOutOfRange {
                index: index_in_chunk,
                len: chunk.len(),
            });
        }
        let index = global_index(self.current_page, self.chunk_size, index_in_chunk);
        Ok((index, resolve(items, index)?))
    }
}
