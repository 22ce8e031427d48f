use serde::{Deserialize, Deserializer, Serialize};

/// Base URL for fully-qualifying TMDB poster path fragments
pub const POSTER_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Placeholder title for records missing one
const UNKNOWN_TITLE: &str = "Unknown Title";

/// A single movie row from the precomputed artifact.
///
/// Row order is the join key into the similarity matrix, so records are never
/// re-sorted after load. Every field besides position is optional in the
/// source data; missing or malformed values fall back to defaults rather
/// than failing the load.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MovieRecord {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub genres: String,
    #[serde(default)]
    pub poster_path: Option<String>,
    /// Average vote, coerced leniently: numbers, numeric strings, null, and
    /// junk all deserialize, with junk collapsing to 0
    #[serde(default, deserialize_with = "lenient_f64")]
    pub vote_average: f64,
    #[serde(default)]
    pub release_date: String,
}

/// A single enriched recommendation returned to the client
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub overview: String,
    pub genres: String,
    pub poster_path: Option<String>,
    pub rating: f64,
    pub release_date: String,
    pub similarity_score: f64,
}

impl Recommendation {
    /// Shapes a catalog record and its raw similarity score into a result row
    pub fn from_record(record: &MovieRecord, score: f32) -> Self {
        let poster_path = record
            .poster_path
            .as_deref()
            .filter(|fragment| fragment.len() > 3)
            .map(|fragment| format!("{}{}", POSTER_BASE_URL, fragment));

        Self {
            title: record
                .title
                .clone()
                .unwrap_or_else(|| UNKNOWN_TITLE.to_string()),
            overview: record.overview.clone(),
            genres: record.genres.clone(),
            poster_path,
            rating: record.vote_average,
            release_date: record.release_date.clone(),
            similarity_score: round4(score),
        }
    }
}

/// Rounds a raw similarity score to 4 decimal places
fn round4(score: f32) -> f64 {
    (score as f64 * 10_000.0).round() / 10_000.0
}

/// Deserializes `vote_average` without ever failing: accepts a number, a
/// numeric string, or anything else (which coerces to 0)
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(f64),
        Text(String),
        Other(serde_json::Value),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Num(n) => n,
        Raw::Text(s) => s.trim().parse().unwrap_or(0.0),
        Raw::Other(_) => 0.0,
    })
}
