use crate::services::Recommender;

/// Shared application state
///
/// The dataset never changes after startup, so state is just a cheaply
/// cloneable handle to the recommender; handlers read it without locking.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Recommender,
}

impl AppState {
    pub fn new(recommender: Recommender) -> Self {
        Self { recommender }
    }
}
