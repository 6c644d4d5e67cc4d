//! Data models for Echo Nest API responses.
//!
//! This module contains the passive result records populated from the
//! JSON payload of each endpoint. Fields default when absent so partial
//! responses never fail to deserialize.

pub mod artist;
pub mod document;
pub mod song;
pub mod term;

// Re-exports for convenience
pub use artist::{Artist, Familiarity, Hotttnesss, Urls};
pub use document::{Biography, Blog, Image, License, NewsArticle, Review, Video};
pub use song::Song;
pub use term::{Genre, Term};
