//! Web document models: biographies, blogs, news, reviews, images, video.

use serde::{Deserialize, Serialize};

/// License attached to a biography or image.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct License {
    /// License type, e.g. "cc-by-sa" or "unknown".
    #[serde(rename = "type")]
    pub type_: String,

    /// Attribution text, if required by the license.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,

    /// Link to the license terms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// An artist biography found on the web.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Biography {
    /// Biography text, possibly truncated.
    pub text: String,

    /// Site the biography was sourced from, e.g. "wikipedia".
    pub site: String,

    /// Link to the full biography.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// License governing the text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,

    /// Whether `text` is a truncated excerpt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated: Option<bool>,
}

impl Biography {
    /// True if the text is a truncated excerpt of the full biography.
    pub fn is_truncated(&self) -> bool {
        self.truncated.unwrap_or(false)
    }
}

/// A blog post about an artist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Blog {
    /// Document ID.
    pub id: String,

    /// Post title.
    pub name: String,

    /// Link to the post.
    pub url: String,

    /// When the crawler found the document (ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_found: Option<String>,

    /// When the post was published (ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_posted: Option<String>,

    /// Summary excerpt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// A news article about an artist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NewsArticle {
    /// Document ID.
    pub id: String,

    /// Article title.
    pub name: String,

    /// Link to the article.
    pub url: String,

    /// When the crawler found the document (ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_found: Option<String>,

    /// When the article was published (ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_posted: Option<String>,

    /// Summary excerpt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// A record review mentioning an artist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Review {
    /// Document ID.
    pub id: String,

    /// Review title.
    pub name: String,

    /// Link to the review.
    pub url: String,

    /// When the crawler found the document (ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_found: Option<String>,

    /// When the review was written (ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_reviewed: Option<String>,

    /// Summary excerpt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Cover or article image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// The release being reviewed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
}

/// An artist image.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Image {
    /// Link to the image.
    pub url: String,

    /// License governing the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license: Option<License>,
}

/// A video document found on the web.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Video {
    /// Document ID.
    pub id: String,

    /// Video title.
    pub title: String,

    /// Link to the video page.
    pub url: String,

    /// Hosting site, e.g. "youtube".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,

    /// When the crawler found the document (ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_found: Option<String>,

    /// Thumbnail image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_biography_truncated_defaults_to_false() {
        let bio: Biography = serde_json::from_str(r#"{"text": "...", "site": "wikipedia"}"#)
            .unwrap();
        assert!(!bio.is_truncated());
    }

    #[test]
    fn test_biography_license_type_field() {
        let json = r#"{
            "text": "Weezer is an American rock band",
            "site": "wikipedia",
            "license": {"type": "cc-by-sa", "attribution": "wikipedia"}
        }"#;
        let bio: Biography = serde_json::from_str(json).unwrap();
        assert_eq!(bio.license.unwrap().type_, "cc-by-sa");
    }

    #[test]
    fn test_blog_with_missing_dates() {
        let blog: Blog =
            serde_json::from_str(r#"{"id": "abc", "name": "a post", "url": "http://x"}"#).unwrap();
        assert_eq!(blog.name, "a post");
        assert!(blog.date_posted.is_none());
    }
}
