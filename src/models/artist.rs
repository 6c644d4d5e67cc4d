//! Artist-related models.
//!
//! The `artist` envelope key is shared by several endpoints: profile and
//! twitter lookups deserialize it as a full [`Artist`], while the
//! familiarity and hotttnesss endpoints read the same key into the
//! narrower [`Familiarity`] and [`Hotttnesss`] records.

use serde::{Deserialize, Serialize};

use super::document::{Biography, Blog, Image, NewsArticle, Review, Video};
use super::song::Song;
use super::term::{Genre, Term};

/// A full artist record.
///
/// Only `id` and `name` are guaranteed by the service; the remaining
/// fields are populated when the caller requests the matching `bucket`
/// parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Artist {
    /// Echo Nest artist ID, e.g. "ARH6W4X1187B99274F".
    pub id: String,

    /// Artist name.
    pub name: String,

    /// Twitter handle, populated by the twitter endpoint or bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,

    /// Familiarity score (0.0 - 1.0), populated by bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub familiarity: Option<f64>,

    /// Hotttnesss score (0.0 - 1.0), populated by bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotttnesss: Option<f64>,

    /// Biographies, populated by bucket.
    pub biographies: Vec<Biography>,

    /// Blog posts, populated by bucket.
    pub blogs: Vec<Blog>,

    /// Images, populated by bucket.
    pub images: Vec<Image>,

    /// News articles, populated by bucket.
    pub news: Vec<NewsArticle>,

    /// Reviews, populated by bucket.
    pub reviews: Vec<Review>,

    /// Songs, populated by bucket.
    pub songs: Vec<Song>,

    /// Descriptive terms, populated by bucket.
    pub terms: Vec<Term>,

    /// Genres, populated by bucket.
    pub genres: Vec<Genre>,

    /// Videos, populated by bucket.
    pub video: Vec<Video>,

    /// External links, populated by bucket.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub urls: Option<Urls>,
}

impl Artist {
    /// Create a new artist with id and name.
    pub fn new<S1: Into<String>, S2: Into<String>>(id: S1, name: S2) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Familiarity score for an artist.
///
/// Deserialized from the generic `artist` envelope object returned by
/// the familiarity endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Familiarity {
    /// Echo Nest artist ID.
    pub id: String,

    /// Artist name.
    pub name: String,

    /// How familiar the artist currently is to the world (0.0 - 1.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub familiarity: Option<f64>,
}

/// Hotttnesss score for an artist.
///
/// Deserialized from the generic `artist` envelope object returned by
/// the hotttnesss endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Hotttnesss {
    /// Echo Nest artist ID.
    pub id: String,

    /// Artist name.
    pub name: String,

    /// How hottt the artist currently is (0.0 - 1.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotttnesss: Option<f64>,
}

/// Links to the artist's presence elsewhere on the web.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Urls {
    /// Last.fm artist page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastfm_url: Option<String>,

    /// AOL Music page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aolmusic_url: Option<String>,

    /// Amazon search listing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amazon_url: Option<String>,

    /// iTunes page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub itunes_url: Option<String>,

    /// MusicBrainz page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mb_url: Option<String>,

    /// Official artist site.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub official_url: Option<String>,

    /// Wikipedia article.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wikipedia_url: Option<String>,
}

impl Urls {
    /// Iterate over the links that are present, as `(label, url)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("lastfm", self.lastfm_url.as_deref()),
            ("aolmusic", self.aolmusic_url.as_deref()),
            ("amazon", self.amazon_url.as_deref()),
            ("itunes", self.itunes_url.as_deref()),
            ("musicbrainz", self.mb_url.as_deref()),
            ("official", self.official_url.as_deref()),
            ("wikipedia", self.wikipedia_url.as_deref()),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.map(|u| (label, u)))
    }
}
