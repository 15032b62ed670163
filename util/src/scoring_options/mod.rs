pub mod scoring_options;

pub use scoring_options::ScoringOptions;
