use crate::error::{AppError, AppResult};
use crate::models::MovieRecord;

/// A movie paired with its own row of the similarity matrix
#[derive(Debug, Clone)]
pub struct CatalogEntry {
    pub movie: MovieRecord,
    /// Similarity of this movie to every movie in the catalog, indexed by
    /// catalog position (including itself)
    pub similarity: Vec<f32>,
}

/// The loaded dataset: every movie zipped with its similarity row.
///
/// The two source artifacts are only joined by position, so pairing them into
/// one structure at load time makes misalignment unrepresentable afterwards.
/// The catalog is built once at startup and never mutated.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Zips movie records with their similarity rows, rejecting any shape
    /// mismatch between the two artifacts.
    pub fn new(movies: Vec<MovieRecord>, similarity: Vec<Vec<f32>>) -> AppResult<Self> {
        let n = movies.len();

        if similarity.len() != n {
            return Err(AppError::Artifact(format!(
                "similarity matrix has {} rows but there are {} movies",
                similarity.len(),
                n
            )));
        }

        if let Some((i, row)) = similarity.iter().enumerate().find(|(_, row)| row.len() != n) {
            return Err(AppError::Artifact(format!(
                "similarity row {} has {} columns, expected {}",
                i,
                row.len(),
                n
            )));
        }

        let entries = movies
            .into_iter()
            .zip(similarity)
            .map(|(movie, similarity)| CatalogEntry { movie, similarity })
            .collect();

        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
