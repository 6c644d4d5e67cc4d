//! Artist endpoints.
//!
//! All operations take an [`Options`] mapping that is forwarded verbatim
//! as query parameters. Most endpoints identify the artist via an `id`
//! (e.g. "ARH6W4X1187B99274F") or a `name` option, and accept `results`
//! and `start` for paging; the client issues exactly one request per
//! call, so callers wanting more pages issue repeated calls themselves.

use crate::api::{Arity, Endpoint};
use crate::client::EchonestApi;
use crate::error::Result;
use crate::models::{
    Artist, Biography, Blog, Familiarity, Genre, Hotttnesss, Image, NewsArticle, Review, Song,
    Term, Urls, Video,
};
use crate::options::Options;

/// The artist endpoint table.
///
/// The familiarity and hotttnesss rows read the same `artist` envelope
/// key as profile and twitter but deserialize into different result
/// types; the service keys the payload by resource, not by operation.
pub mod endpoints {
    use super::{Arity, Endpoint};

    pub const BIOGRAPHIES: Endpoint = Endpoint {
        name: "artist/biographies",
        path: "/api/v4/artist/biographies",
        envelope_key: "biographies",
        arity: Arity::List,
    };

    pub const BLOGS: Endpoint = Endpoint {
        name: "artist/blogs",
        path: "/api/v4/artist/blogs",
        envelope_key: "blogs",
        arity: Arity::List,
    };

    pub const EXTRACT: Endpoint = Endpoint {
        name: "artist/extract",
        path: "/api/v4/artist/extract",
        envelope_key: "artists",
        arity: Arity::List,
    };

    pub const FAMILIARITY: Endpoint = Endpoint {
        name: "artist/familiarity",
        path: "/api/v4/artist/familiarity",
        envelope_key: "artist",
        arity: Arity::Single,
    };

    pub const HOTTTNESSS: Endpoint = Endpoint {
        name: "artist/hotttnesss",
        path: "/api/v4/artist/hotttnesss",
        envelope_key: "artist",
        arity: Arity::Single,
    };

    pub const IMAGES: Endpoint = Endpoint {
        name: "artist/images",
        path: "/api/v4/artist/images",
        envelope_key: "images",
        arity: Arity::List,
    };

    pub const LIST_GENRES: Endpoint = Endpoint {
        name: "artist/list_genres",
        path: "/api/v4/artist/list_genres",
        envelope_key: "genres",
        arity: Arity::List,
    };

    pub const LIST_TERMS: Endpoint = Endpoint {
        name: "artist/list_terms",
        path: "/api/v4/artist/list_terms",
        envelope_key: "terms",
        arity: Arity::List,
    };

    pub const NEWS: Endpoint = Endpoint {
        name: "artist/news",
        path: "/api/v4/artist/news",
        envelope_key: "news",
        arity: Arity::List,
    };

    pub const PROFILE: Endpoint = Endpoint {
        name: "artist/profile",
        path: "/api/v4/artist/profile",
        envelope_key: "artist",
        arity: Arity::Single,
    };

    pub const SEARCH: Endpoint = Endpoint {
        name: "artist/search",
        path: "/api/v4/artist/search",
        envelope_key: "artists",
        arity: Arity::List,
    };

    pub const REVIEWS: Endpoint = Endpoint {
        name: "artist/reviews",
        path: "/api/v4/artist/reviews",
        envelope_key: "reviews",
        arity: Arity::List,
    };

    pub const SIMILAR: Endpoint = Endpoint {
        name: "artist/similar",
        path: "/api/v4/artist/similar",
        envelope_key: "artists",
        arity: Arity::List,
    };

    pub const SONGS: Endpoint = Endpoint {
        name: "artist/songs",
        path: "/api/v4/artist/songs",
        envelope_key: "songs",
        arity: Arity::List,
    };

    pub const SUGGEST: Endpoint = Endpoint {
        name: "artist/suggest",
        path: "/api/v4/artist/suggest",
        envelope_key: "artists",
        arity: Arity::List,
    };

    pub const TERMS: Endpoint = Endpoint {
        name: "artist/terms",
        path: "/api/v4/artist/terms",
        envelope_key: "terms",
        arity: Arity::List,
    };

    pub const TOP_HOTTT: Endpoint = Endpoint {
        name: "artist/top_hottt",
        path: "/api/v4/artist/top_hottt",
        envelope_key: "artists",
        arity: Arity::List,
    };

    pub const TOP_TERMS: Endpoint = Endpoint {
        name: "artist/top_terms",
        path: "/api/v4/artist/top_terms",
        envelope_key: "terms",
        arity: Arity::List,
    };

    pub const TWITTER: Endpoint = Endpoint {
        name: "artist/twitter",
        path: "/api/v4/artist/twitter",
        envelope_key: "artist",
        arity: Arity::Single,
    };

    pub const URLS: Endpoint = Endpoint {
        name: "artist/urls",
        path: "/api/v4/artist/urls",
        envelope_key: "urls",
        arity: Arity::Single,
    };

    pub const VIDEO: Endpoint = Endpoint {
        name: "artist/video",
        path: "/api/v4/artist/video",
        envelope_key: "video",
        arity: Arity::List,
    };

    /// All artist endpoints, in path order.
    pub const ALL: &[Endpoint] = &[
        BIOGRAPHIES,
        BLOGS,
        EXTRACT,
        FAMILIARITY,
        HOTTTNESSS,
        IMAGES,
        LIST_GENRES,
        LIST_TERMS,
        NEWS,
        PROFILE,
        SEARCH,
        REVIEWS,
        SIMILAR,
        SONGS,
        SUGGEST,
        TERMS,
        TOP_HOTTT,
        TOP_TERMS,
        TWITTER,
        URLS,
        VIDEO,
    ];
}

impl EchonestApi {
    /// Get a list of artist biographies.
    ///
    /// Identify the artist with `id` or `name`; supports `results`,
    /// `start`, and `license` options.
    pub async fn artist_biographies(&self, options: &Options) -> Result<Vec<Biography>> {
        self.fetch_list(&endpoints::BIOGRAPHIES, options).await
    }

    /// Get a list of blog posts about an artist.
    pub async fn artist_blogs(&self, options: &Options) -> Result<Vec<Blog>> {
        self.fetch_list(&endpoints::BLOGS, options).await
    }

    /// Extract artist names from free-form text passed in the `text`
    /// option.
    pub async fn artist_extract(&self, options: &Options) -> Result<Vec<Artist>> {
        self.fetch_list(&endpoints::EXTRACT, options).await
    }

    /// Get a numerical estimation of how familiar an artist currently is
    /// to the world.
    pub async fn artist_familiarity(&self, options: &Options) -> Result<Familiarity> {
        self.fetch_single(&endpoints::FAMILIARITY, options).await
    }

    /// Get a numerical description of how hottt an artist currently is.
    pub async fn artist_hotttnesss(&self, options: &Options) -> Result<Hotttnesss> {
        self.fetch_single(&endpoints::HOTTTNESSS, options).await
    }

    /// Get a list of artist images.
    pub async fn artist_images(&self, options: &Options) -> Result<Vec<Image>> {
        self.fetch_list(&endpoints::IMAGES, options).await
    }

    /// Get the list of genres available for search and playlisting.
    pub async fn artist_list_genres(&self, options: &Options) -> Result<Vec<Genre>> {
        self.fetch_list(&endpoints::LIST_GENRES, options).await
    }

    /// Get the list of terms available for search and playlisting. The
    /// `type` option narrows to "style" or "mood" terms.
    pub async fn artist_list_terms(&self, options: &Options) -> Result<Vec<Term>> {
        self.fetch_list(&endpoints::LIST_TERMS, options).await
    }

    /// Get a list of news articles found on the web related to an artist.
    pub async fn artist_news(&self, options: &Options) -> Result<Vec<NewsArticle>> {
        self.fetch_list(&endpoints::NEWS, options).await
    }

    /// Get basic information about an artist.
    ///
    /// `bucket` options enrich the returned [`Artist`] with additional
    /// payloads (biographies, familiarity, urls, ...).
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use echonest::{EchonestApi, Options};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let api = EchonestApi::from_env()?;
    /// let artist = api
    ///     .artist_profile(&Options::new().set("id", "ARH6W4X1187B99274F"))
    ///     .await?;
    /// println!("{}", artist.name);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn artist_profile(&self, options: &Options) -> Result<Artist> {
        self.fetch_single(&endpoints::PROFILE, options).await
    }

    /// Search for artists by `name`, `description`, `genre`, `style`,
    /// `mood`, and related query options.
    pub async fn artist_search(&self, options: &Options) -> Result<Vec<Artist>> {
        self.fetch_list(&endpoints::SEARCH, options).await
    }

    /// Get a list of reviews related to an artist.
    pub async fn artist_reviews(&self, options: &Options) -> Result<Vec<Review>> {
        self.fetch_list(&endpoints::REVIEWS, options).await
    }

    /// Return similar artists given one or more seed artists.
    pub async fn artist_similar(&self, options: &Options) -> Result<Vec<Artist>> {
        self.fetch_list(&endpoints::SIMILAR, options).await
    }

    /// Get songs by an artist.
    pub async fn artist_songs(&self, options: &Options) -> Result<Vec<Song>> {
        self.fetch_list(&endpoints::SONGS, options).await
    }

    /// Suggest artists from a partial name in the `name` (or `q`) option.
    pub async fn artist_suggest(&self, options: &Options) -> Result<Vec<Artist>> {
        self.fetch_list(&endpoints::SUGGEST, options).await
    }

    /// Get the most descriptive terms for an artist, sortable by
    /// `weight` or `frequency` via the `sort` option.
    pub async fn artist_terms(&self, options: &Options) -> Result<Vec<Term>> {
        self.fetch_list(&endpoints::TERMS, options).await
    }

    /// Return a list of the top hottt artists.
    pub async fn artist_top_hottt(&self, options: &Options) -> Result<Vec<Artist>> {
        self.fetch_list(&endpoints::TOP_HOTTT, options).await
    }

    /// Return a list of the overall top terms.
    pub async fn artist_top_terms(&self, options: &Options) -> Result<Vec<Term>> {
        self.fetch_list(&endpoints::TOP_TERMS, options).await
    }

    /// Get the twitter handle for an artist, returned on the artist
    /// record.
    pub async fn artist_twitter(&self, options: &Options) -> Result<Artist> {
        self.fetch_single(&endpoints::TWITTER, options).await
    }

    /// Get links to the artist's official site, MusicBrainz page,
    /// Wikipedia article, and other external presences.
    pub async fn artist_urls(&self, options: &Options) -> Result<Urls> {
        self.fetch_single(&endpoints::URLS, options).await
    }

    /// Get a list of video documents found on the web related to an
    /// artist.
    pub async fn artist_video(&self, options: &Options) -> Result<Vec<Video>> {
        self.fetch_list(&endpoints::VIDEO, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::endpoints::ALL;
    use super::*;

    #[test]
    fn test_table_covers_all_operations() {
        assert_eq!(ALL.len(), 21);
    }

    #[test]
    fn test_all_paths_under_artist_resource() {
        for endpoint in ALL {
            assert!(
                endpoint.path.starts_with("/api/v4/artist/"),
                "unexpected path {}",
                endpoint.path
            );
        }
    }

    #[test]
    fn test_operation_names_are_unique() {
        let mut names: Vec<_> = ALL.iter().map(|e| e.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ALL.len());
    }

    #[test]
    fn test_arity_split() {
        let singles = ALL.iter().filter(|e| e.arity == Arity::Single).count();
        let lists = ALL.iter().filter(|e| e.arity == Arity::List).count();
        assert_eq!(singles, 5);
        assert_eq!(lists, 16);
    }

    #[test]
    fn test_single_endpoints_share_artist_envelope_key() {
        // Familiarity and hotttnesss read the same envelope key as
        // profile and twitter; only urls differs.
        for endpoint in [
            endpoints::PROFILE,
            endpoints::TWITTER,
            endpoints::FAMILIARITY,
            endpoints::HOTTTNESSS,
        ] {
            assert_eq!(endpoint.envelope_key, "artist");
        }
        assert_eq!(endpoints::URLS.envelope_key, "urls");
    }
}
