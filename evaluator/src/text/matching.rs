//! Matching heuristics. All of them are lenient: a loosely addressed concept still counts.

use crate::taxonomy::ConceptTaxonomy;
use crate::text::tokenizer::extract_keywords;
use std::collections::BTreeSet;

/// Number of leading characters compared by [`is_stem_like_match`].
pub const STEM_PREFIX_CHARS: usize = 3;
/// Maximum length difference (in characters) tolerated by [`is_stem_like_match`].
pub const STEM_MAX_LENGTH_DIFF: usize = 2;

/// True when either string contains the other.
pub fn is_loose_containment(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}

/// Cheap stemming stand-in: lengths within two characters and the same first three characters.
pub fn is_stem_like_match(a: &str, b: &str) -> bool {
    let len_a = a.chars().count();
    let len_b = b.chars().count();
    if len_a.abs_diff(len_b) > STEM_MAX_LENGTH_DIFF {
        return false;
    }
    a.chars()
        .take(STEM_PREFIX_CHARS)
        .eq(b.chars().take(STEM_PREFIX_CHARS))
}

/// Token-level fuzzy match used between criterion and answer tokens.
pub fn is_loose_token_match(a: &str, b: &str) -> bool {
    is_loose_containment(a, b) || is_stem_like_match(a, b)
}

/// Outcome of matching one criterion against a submission.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConceptMatch {
    pub matched_keywords: BTreeSet<String>,
    /// 0-100.
    pub concept_score: f64,
    /// Concept groups the criterion invoked, in taxonomy order.
    pub invoked_concepts: Vec<String>,
    pub total_matches: usize,
}

/// Scores how well `user_input` covers `criterion`.
///
/// A concept group is invoked when any criterion token contains, or is contained in, one of its
/// keywords. For invoked groups every keyword found literally in the lowercased input counts one
/// match. On top of that every (criterion token, input token) pair that passes
/// [`is_loose_token_match`] counts one match. The score is the match count relative to the number
/// of criterion tokens, capped at 100.
pub fn find_matching_concepts(
    taxonomy: &ConceptTaxonomy,
    criterion: &str,
    user_input: &str,
) -> ConceptMatch {
    let criterion_tokens = extract_keywords(criterion);
    let input_tokens = extract_keywords(user_input);
    let lowered_input = user_input.to_lowercase();

    let mut result = ConceptMatch::default();

    for group in taxonomy.concepts() {
        let invoked = criterion_tokens.iter().any(|token| {
            group
                .keywords
                .iter()
                .any(|keyword| is_loose_containment(token, keyword))
        });
        if !invoked {
            continue;
        }
        result.invoked_concepts.push(group.name.clone());

        for keyword in &group.keywords {
            if lowered_input.contains(keyword.as_str()) {
                result.matched_keywords.insert(keyword.clone());
                result.total_matches += 1;
            }
        }
    }

    for criterion_token in &criterion_tokens {
        for input_token in &input_tokens {
            if is_loose_token_match(criterion_token, input_token) {
                result.matched_keywords.insert(input_token.clone());
                result.total_matches += 1;
            }
        }
    }

    let denominator = criterion_tokens.len().max(1) as f64;
    result.concept_score = (result.total_matches as f64 / denominator * 100.0).min(100.0);
    result
}

/// Dice-style token overlap between two texts, 0-100.
///
/// A token of `text_a` counts towards the intersection when it loosely contains (or is contained
/// in) any token of `text_b`. Returns 0 if either text has no tokens.
pub fn calculate_similarity(text_a: &str, text_b: &str) -> f64 {
    let tokens_a = extract_keywords(text_a);
    let tokens_b = extract_keywords(text_b);
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let intersection = tokens_a
        .iter()
        .filter(|a| tokens_b.iter().any(|b| is_loose_containment(a, b)))
        .count();

    let similarity = (2 * intersection) as f64 / (tokens_a.len() + tokens_b.len()) as f64 * 100.0;
    similarity.min(100.0)
}
