//! Optimistic like and follow toggles.
//!
//! The UI flips these immediately on tap. There is no reconciliation with the server, so
//! the values here are only ever the client's best guess.

use serde::{Deserialize, Serialize};

/// Like state of a single post.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeState {
    pub liked: bool,
    pub count: u64,
}

impl LikeState {
    /// Flip the like and adjust the count by one. The count never drops below zero.
    pub fn toggle(&self) -> Self {
        if self.liked {
            Self {
                liked: false,
                count: self.count.saturating_sub(1),
            }
        } else {
            Self {
                liked: true,
                count: self.count.saturating_add(1),
            }
        }
    }
}

/// Follow state of a profile as seen by the current user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowState {
    pub following: bool,
    pub followers: u64,
}

impl FollowState {
    pub fn toggle(&self) -> Self {
        if self.following {
            Self {
                following: false,
                followers: self.followers.saturating_sub(1),
            }
        } else {
            Self {
                following: true,
                followers: self.followers.saturating_add(1),
            }
        }
    }
}
