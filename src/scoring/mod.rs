pub mod classify;
pub mod composite;
pub mod normalize;

pub use classify::classify_athlete;
pub use composite::compute_scores;
