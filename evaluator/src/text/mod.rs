//! # Text
//!
//! Tokenization and the deliberately lenient matching heuristics shared by every scorer.
//!
//! - [`tokenizer`]: lowercasing word splitter used by all scorers.
//! - [`matching`]: loose token matching, concept matching against a taxonomy, and text similarity.

pub mod matching;
pub mod tokenizer;

pub use matching::{
    calculate_similarity, find_matching_concepts, is_loose_containment, is_loose_token_match,
    is_stem_like_match, ConceptMatch,
};
pub use tokenizer::{extract_keywords, normalize};
