//! # Concept Taxonomy
//!
//! A concept taxonomy maps concept names ("audience", "length", ...) to the keywords and phrases
//! that signal the concept. It is immutable once built and is injected into the evaluator, so a
//! different language or domain only needs a different table.
//!
//! The built-in table covers the Dutch vocabulary of the shipped exercises plus English
//! equivalents. A replacement can be loaded from JSON:
//!
//! ```json
//! { "concepts": [ { "name": "audience", "keywords": ["doelgroep", "lezer"] } ] }
//! ```

use crate::error::EvaluatorError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

/// A named cluster of keywords representing one evaluable idea.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ConceptGroup {
    pub name: String,
    pub keywords: Vec<String>,
}

impl ConceptGroup {
    pub fn new(name: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Ordered, validated set of concept groups.
///
/// Concept names are unique. Keywords are stored lowercased and may appear in several groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConceptTaxonomy {
    concepts: Vec<ConceptGroup>,
}

#[derive(Deserialize)]
struct TaxonomyFile {
    concepts: Vec<ConceptGroup>,
}

/// Process-wide built-in taxonomy, constructed on first use and never mutated.
pub static DEFAULT_TAXONOMY: Lazy<Arc<ConceptTaxonomy>> =
    Lazy::new(|| Arc::new(ConceptTaxonomy::builtin()));

impl ConceptTaxonomy {
    /// Builds a taxonomy, normalizing keywords and rejecting duplicate or empty concepts.
    pub fn new(concepts: Vec<ConceptGroup>) -> Result<Self, EvaluatorError> {
        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(concepts.len());

        for group in concepts {
            let name = group.name.trim().to_string();
            if name.is_empty() {
                return Err(EvaluatorError::InvalidTaxonomy(
                    "concept name must not be empty".to_string(),
                ));
            }
            if !seen.insert(name.clone()) {
                return Err(EvaluatorError::InvalidTaxonomy(format!(
                    "duplicate concept '{name}'"
                )));
            }

            let mut keywords: Vec<String> = Vec::with_capacity(group.keywords.len());
            for keyword in group.keywords {
                let k = keyword.trim().to_lowercase();
                if !k.is_empty() && !keywords.contains(&k) {
                    keywords.push(k);
                }
            }
            if keywords.is_empty() {
                return Err(EvaluatorError::InvalidTaxonomy(format!(
                    "concept '{name}' has no keywords"
                )));
            }

            normalized.push(ConceptGroup { name, keywords });
        }

        Ok(Self {
            concepts: normalized,
        })
    }

    pub fn from_json(raw: &str) -> Result<Self, EvaluatorError> {
        let file: TaxonomyFile = serde_json::from_str(raw)
            .map_err(|e| EvaluatorError::InvalidTaxonomy(format!("invalid taxonomy JSON: {e}")))?;
        Self::new(file.concepts)
    }

    /// Returns a new taxonomy with `group` appended.
    pub fn with_group(self, group: ConceptGroup) -> Result<Self, EvaluatorError> {
        let mut concepts = self.concepts;
        concepts.push(group);
        Self::new(concepts)
    }

    pub fn concepts(&self) -> &[ConceptGroup] {
        &self.concepts
    }

    pub fn get(&self, name: &str) -> Option<&ConceptGroup> {
        self.concepts.iter().find(|c| c.name == name)
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// The built-in Dutch/English table.
    pub fn builtin() -> Self {
        let concepts = vec![
            ConceptGroup::new(
                "audience",
                &[
                    "doelgroep", "publiek", "lezer", "lezers", "leerling", "leerlingen",
                    "student", "studenten", "kinderen", "beginner", "beginners", "collega",
                    "collega's", "klant", "klanten", "ouders", "audience", "reader", "readers",
                    "students", "children", "customers", "colleagues",
                ],
            ),
            ConceptGroup::new(
                "simplicity",
                &[
                    "eenvoudig", "simpel", "makkelijk", "begrijpelijk", "jargon", "uitleg",
                    "leg uit", "simple", "easy", "plain language", "understandable", "explain",
                ],
            ),
            ConceptGroup::new(
                "length",
                &[
                    "lengte", "woorden", "zinnen", "alinea", "alinea's", "kort", "beknopt",
                    "maximaal", "length", "words", "sentence", "sentences", "paragraph",
                    "paragraphs", "short", "concise", "maximum", "3", "5", "100",
                ],
            ),
            ConceptGroup::new(
                "examples",
                &[
                    "voorbeeld", "voorbeelden", "bijvoorbeeld", "zoals", "illustratie",
                    "example", "examples", "for instance", "such as",
                ],
            ),
            ConceptGroup::new(
                "structure",
                &[
                    "structuur", "opbouw", "opsomming", "lijst", "stappen", "stappenplan",
                    "kopjes", "tabel", "format", "formaat", "bullet", "bullets", "list",
                    "steps", "table", "headings", "structure",
                ],
            ),
            ConceptGroup::new(
                "context",
                &[
                    "context", "achtergrond", "situatie", "onderwerp", "doel", "omdat",
                    "background", "situation", "topic", "purpose", "because", "about",
                ],
            ),
            ConceptGroup::new(
                "specificity",
                &[
                    "specifiek", "concreet", "precies", "exact", "gedetailleerd", "details",
                    "specific", "concrete", "precise", "detailed",
                ],
            ),
            ConceptGroup::new(
                "tone",
                &[
                    "toon", "stijl", "formeel", "informeel", "vriendelijk", "professioneel",
                    "enthousiast", "tone", "style", "formal", "informal", "friendly",
                    "professional",
                ],
            ),
            ConceptGroup::new(
                "role",
                &[
                    "rol", "expert", "je bent", "jij bent", "fungeer als", "role", "you are",
                    "act as",
                ],
            ),
            ConceptGroup::new(
                "privacy",
                &[
                    "privacy", "persoonsgegevens", "persoonlijke gegevens", "gevoelige",
                    "anoniem", "anonimiseren", "avg", "gdpr", "personal data", "sensitive",
                    "anonymous",
                ],
            ),
            ConceptGroup::new(
                "ethics",
                &[
                    "ethiek", "ethisch", "bias", "vooroordeel", "vooroordelen", "eerlijk",
                    "transparant", "verantwoord", "controleer", "bronnen", "ethics", "fairness",
                    "transparent", "responsible", "verify", "sources",
                ],
            ),
        ];

        // The table above is static and well-formed; `new` only normalizes it.
        Self::new(concepts).unwrap_or(Self { concepts: vec![] })
    }
}

impl Default for ConceptTaxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_expected_concepts() {
        let tax = ConceptTaxonomy::builtin();
        for name in [
            "audience", "simplicity", "length", "examples", "structure", "context",
            "specificity", "tone", "role", "privacy", "ethics",
        ] {
            assert!(tax.get(name).is_some(), "missing concept {name}");
        }
        assert_eq!(tax.len(), 11);
    }

    #[test]
    fn keywords_are_normalized_and_deduplicated() {
        let tax = ConceptTaxonomy::new(vec![ConceptGroup::new(
            "tone",
            &["  Formeel ", "formeel", "", "VRIENDELIJK"],
        )])
        .unwrap();
        assert_eq!(tax.get("tone").unwrap().keywords, vec!["formeel", "vriendelijk"]);
    }

    #[test]
    fn duplicate_concept_names_are_rejected() {
        let err = ConceptTaxonomy::new(vec![
            ConceptGroup::new("tone", &["formeel"]),
            ConceptGroup::new("tone", &["informeel"]),
        ])
        .unwrap_err();
        assert!(matches!(err, EvaluatorError::InvalidTaxonomy(_)));
    }

    #[test]
    fn concept_without_keywords_is_rejected() {
        let err = ConceptTaxonomy::new(vec![ConceptGroup::new("empty", &["  "])]).unwrap_err();
        assert!(matches!(err, EvaluatorError::InvalidTaxonomy(_)));
    }

    #[test]
    fn keywords_may_overlap_between_concepts() {
        let tax = ConceptTaxonomy::new(vec![
            ConceptGroup::new("a", &["duidelijk"]),
            ConceptGroup::new("b", &["duidelijk"]),
        ]);
        assert!(tax.is_ok());
    }

    #[test]
    fn loads_from_json() {
        let tax = ConceptTaxonomy::from_json(
            r#"{ "concepts": [ { "name": "audience", "keywords": ["Zielgruppe", "Leser"] } ] }"#,
        )
        .unwrap();
        assert_eq!(tax.len(), 1);
        assert_eq!(tax.get("audience").unwrap().keywords, vec!["zielgruppe", "leser"]);
    }

    #[test]
    fn invalid_json_is_a_taxonomy_error() {
        let err = ConceptTaxonomy::from_json(r#"{ "groups": [] }"#).unwrap_err();
        assert!(matches!(err, EvaluatorError::InvalidTaxonomy(_)));
    }

    #[test]
    fn with_group_extends_and_validates() {
        let tax = ConceptTaxonomy::builtin()
            .with_group(ConceptGroup::new("humor", &["grappig"]))
            .unwrap();
        assert!(tax.get("humor").is_some());
        assert!(ConceptTaxonomy::builtin()
            .with_group(ConceptGroup::new("tone", &["x"]))
            .is_err());
    }
}
