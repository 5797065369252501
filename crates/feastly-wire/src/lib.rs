//! Wire/boundary support for Feastly feed files.
//!
//! This crate provides **wire models** and **translation helpers** for the recipe feed and
//! story list as the REST API returns them:
//! - JSON (the API's own format) and YAML (hand-written fixtures)
//! - strict schema checking with the failing field path in the error
//! - translation between wire structs and `feastly-core` domain types
//!
//! The core crate never sees wire structs; everything crossing this boundary is a
//! `feastly_core::Recipe` or `feastly_core::Story`.

mod format;
pub mod recipe;
pub mod story;

pub use format::Format;
pub use recipe::Feed;
pub use story::StoryFeed;

/// Errors returned by the `feastly-wire` boundary crate.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("invalid YAML: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("translation error: {0}")]
    Translation(String),
}

/// Type alias for Results that can fail with a [`WireError`].
pub type WireResult<T> = Result<T, WireError>;
