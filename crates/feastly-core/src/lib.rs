//! # Feastly Core
//!
//! Pure client-side logic for the Feastly recipe feed:
//! - Recipe categorisation by keyword and combined category + search filtering
//! - Story carousel chunking, pagination and global index resolution
//! - Story detail navigation, optimistic like/follow toggles and viewport breakpoints
//!
//! **No I/O**: every operation reads its arguments and returns new values. Loading feeds
//! belongs in `feastly-wire`, and process configuration is resolved by the host binary.

pub mod category;
pub mod config;
pub mod constants;
pub mod error;
pub mod filter;
pub mod layout;
pub mod recipe;
pub mod social;
pub mod stories;
pub mod viewer;

pub use category::{classify, classify_text, Category};
pub use config::CoreConfig;
pub use error::{CoreError, CoreResult};
pub use filter::{filter_recipes, FilterState};
pub use recipe::{Recipe, TextList};
pub use social::{FollowState, LikeState};
pub use stories::{chunk, chunk_count, global_index, resolve, Pagination, Story};
pub use viewer::StoryViewer;

// Re-export the validated text type used for identifiers
pub use feastly_types::NonEmptyText;
