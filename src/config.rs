use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Local directory where the precomputed artifacts live
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Remote URL for the movie records artifact
    #[serde(default = "default_movies_url")]
    pub movies_url: String,

    /// Remote URL for the similarity matrix artifact
    #[serde(default = "default_similarity_url")]
    pub similarity_url: String,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_data_dir() -> String {
    "data/movies".to_string()
}

fn default_movies_url() -> String {
    "https://storage.googleapis.com/movie-rec-artifacts/movies.json".to_string()
}

fn default_similarity_url() -> String {
    "https://storage.googleapis.com/movie-rec-artifacts/similarity.json".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
