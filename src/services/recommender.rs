use std::sync::Arc;

use crate::models::{Catalog, Recommendation};

/// Number of recommendations returned when the caller doesn't ask for a count
pub const DEFAULT_COUNT: usize = 10;

/// Ranks movies against a precomputed similarity matrix.
///
/// Wraps the immutable [`Catalog`] behind an `Arc`; every operation is a pure
/// read, so any number of requests may call into one `Recommender`
/// concurrently without locking.
#[derive(Clone)]
pub struct Recommender {
    catalog: Arc<Catalog>,
}

impl Recommender {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Resolves a free-text title to a catalog row index.
    ///
    /// Matching tiers, first hit wins, lowest index wins within a tier:
    /// 1. case-insensitive equality against the trimmed query
    /// 2. case-insensitive substring containment (query within title only)
    ///
    /// An empty or whitespace query never matches. `None` is a normal
    /// outcome, not an error.
    pub fn resolve_title(&self, query: &str) -> Option<usize> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        let needle = query.to_lowercase();
        let entries = self.catalog.entries();

        entries
            .iter()
            .position(|entry| {
                entry
                    .movie
                    .title
                    .as_deref()
                    .is_some_and(|title| title.to_lowercase() == needle)
            })
            .or_else(|| {
                entries.iter().position(|entry| {
                    entry
                        .movie
                        .title
                        .as_deref()
                        .is_some_and(|title| title.to_lowercase().contains(&needle))
                })
            })
    }

    /// Returns up to `count` movies most similar to the queried title,
    /// best first.
    ///
    /// The matched movie itself is excluded. An unresolvable query yields an
    /// empty list; callers cannot (and must not) distinguish "unknown title"
    /// from "no similar movies".
    pub fn recommend(&self, query: &str, count: usize) -> Vec<Recommendation> {
        let Some(idx) = self.resolve_title(query) else {
            tracing::warn!(query, "no match found for title");
            return Vec::new();
        };

        let entries = self.catalog.entries();
        let mut ranked: Vec<(usize, f32)> = entries[idx]
            .similarity
            .iter()
            .copied()
            .enumerate()
            .collect();
        // Stable sort under a total order keeps tied scores in load order,
        // so identical inputs always produce identical output.
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        ranked
            .into_iter()
            .filter(|&(i, _)| i != idx)
            .take(count)
            .map(|(i, score)| Recommendation::from_record(&entries[i].movie, score))
            .collect()
    }

    /// Every known title in original load order, for client-side
    /// autocomplete. Records without a title are skipped; no dedup.
    pub fn list_titles(&self) -> Vec<String> {
        self.catalog
            .entries()
            .iter()
            .filter_map(|entry| entry.movie.title.clone())
            .collect()
    }
}
