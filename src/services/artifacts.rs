use std::path::{Path, PathBuf};

use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;

use crate::{
    config::Config,
    error::{AppError, AppResult},
    models::{Catalog, MovieRecord},
};

/// File names of the two precomputed artifacts inside the data directory
pub const MOVIES_FILE: &str = "movies.json";
pub const SIMILARITY_FILE: &str = "similarity.json";

/// Provisions the precomputed artifacts and loads them into a [`Catalog`].
///
/// Each artifact is fetched from its remote URL only when absent locally;
/// a file already on disk is never re-downloaded. Any failure here is fatal:
/// the server cannot answer a single request without its backing dataset,
/// so load errors surface at startup rather than per request.
pub struct ArtifactStore {
    http_client: HttpClient,
    data_dir: PathBuf,
    movies_url: String,
    similarity_url: String,
}

impl ArtifactStore {
    pub fn new(config: &Config) -> Self {
        Self {
            http_client: HttpClient::new(),
            data_dir: PathBuf::from(&config.data_dir),
            movies_url: config.movies_url.clone(),
            similarity_url: config.similarity_url.clone(),
        }
    }

    /// Ensures both artifacts exist locally, then parses and zips them
    pub async fn load_catalog(&self) -> AppResult<Catalog> {
        std::fs::create_dir_all(&self.data_dir)?;

        let movies_path = self.data_dir.join(MOVIES_FILE);
        let similarity_path = self.data_dir.join(SIMILARITY_FILE);

        self.download_if_absent(&self.movies_url, &movies_path)
            .await?;
        self.download_if_absent(&self.similarity_url, &similarity_path)
            .await?;

        let movies: Vec<MovieRecord> = read_json(&movies_path)?;
        let similarity: Vec<Vec<f32>> = read_json(&similarity_path)?;

        let catalog = Catalog::new(movies, similarity)?;
        tracing::info!(movies = catalog.len(), "movie data and similarity model loaded");
        Ok(catalog)
    }

    async fn download_if_absent(&self, url: &str, path: &Path) -> AppResult<()> {
        if path.exists() {
            tracing::info!(path = %path.display(), "found local artifact");
            return Ok(());
        }

        tracing::info!(%url, path = %path.display(), "downloading artifact");
        let response = self.http_client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(AppError::Artifact(format!(
                "download of {} failed with status {}",
                url,
                response.status()
            )));
        }

        let bytes = response.bytes().await?;
        std::fs::write(path, &bytes)?;
        tracing::info!(path = %path.display(), bytes = bytes.len(), "artifact downloaded");
        Ok(())
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> AppResult<T> {
    let file = std::fs::File::open(path)?;
    serde_json::from_reader(std::io::BufReader::new(file))
        .map_err(|e| AppError::Artifact(format!("failed to parse {}: {}", path.display(), e)))
}
