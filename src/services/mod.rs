pub mod artifacts;
pub mod recommender;

pub use artifacts::ArtifactStore;
pub use recommender::Recommender;
