//! # echonest
//!
//! A Rust client for the Echo Nest artist metadata API.
//!
//! Every operation maps 1:1 to a remote GET endpoint under
//! `/api/v4/artist/`, forwards a caller-supplied [`Options`] mapping as
//! query parameters, and deserializes the JSON response envelope into
//! typed results. Calls are stateless and idempotent; there is no
//! client-side caching, retry, or pagination.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use echonest::{EchonestApi, Options};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads ECHONEST_API_KEY from the environment
//!     let api = EchonestApi::from_env()?;
//!
//!     // Search for artists
//!     let artists = api
//!         .artist_search(&Options::new().set("name", "radiohead"))
//!         .await?;
//!     for artist in &artists {
//!         println!("{} ({})", artist.name, artist.id);
//!     }
//!
//!     // Look up a profile with extra buckets
//!     let artist = api
//!         .artist_profile(
//!             &Options::new()
//!                 .set("id", "ARH6W4X1187B99274F")
//!                 .set("bucket", "familiarity")
//!                 .set("bucket", "hotttnesss"),
//!         )
//!         .await?;
//!     println!("{:?} / {:?}", artist.familiarity, artist.hotttnesss);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! All operations return [`Result`]. A 401-class response surfaces as
//! [`EchonestError::Unauthorized`]; an envelope without the expected
//! shape is [`EchonestError::MalformedResponse`]; transport failures
//! propagate unmodified.

pub mod api;
mod client;
pub mod error;
pub mod models;
pub mod options;

pub use client::EchonestApi;
pub use error::{EchonestError, Result};
pub use models::{
    Artist, Biography, Blog, Familiarity, Genre, Hotttnesss, Image, NewsArticle, Review, Song,
    Term, Urls, Video,
};
pub use options::{Options, ParamValue};
