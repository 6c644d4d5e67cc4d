//! Term and genre models.

use serde::{Deserialize, Serialize};

/// A descriptive term for an artist, e.g. "alternative rock".
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Term {
    /// Term name.
    pub name: String,

    /// How often the term is applied to the artist (0.0 - 1.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<f64>,

    /// How descriptive the term is for the artist (0.0 - 1.0).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl Term {
    /// Weight with absent values treated as zero, for sorting.
    pub fn weight_or_zero(&self) -> f64 {
        self.weight.unwrap_or(0.0)
    }
}

/// A genre usable with search and playlisting.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Genre {
    /// Genre name, e.g. "jazz".
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_weight_or_zero() {
        let weighted: Term =
            serde_json::from_str(r#"{"name": "rock", "weight": 0.8}"#).unwrap();
        let bare: Term = serde_json::from_str(r#"{"name": "rock"}"#).unwrap();
        assert_eq!(weighted.weight_or_zero(), 0.8);
        assert_eq!(bare.weight_or_zero(), 0.0);
    }

    #[test]
    fn test_genre_name_only() {
        let genre: Genre = serde_json::from_str(r#"{"name": "jazz"}"#).unwrap();
        assert_eq!(genre.name, "jazz");
    }
}
