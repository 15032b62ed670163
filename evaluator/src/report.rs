//! # Evaluation Report Module
//!
//! This module defines the serializable result of an evaluation and the response envelope used
//! when the result is handed to a client.
//!
//! ## JSON Output Example
//!
//! ```json
//! {
//!   "success": true,
//!   "message": "Evaluation complete.",
//!   "data": {
//!     "exercise_id": "...",
//!     "overall_score": 56.7,
//!     "total_criteria": 2,
//!     "passed_criteria": 1,
//!     "results": [
//!       { "criterion": "...", "passed": true, "score": 80.0, "matched_keywords": ["..."], "feedback": "..." }
//!     ],
//!     "suggestions": ["..."]
//!   }
//! }
//! ```

use crate::types::CriterionResult;
use serde::Serialize;

/// Outcome of evaluating one submission. Created fresh per call and owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationSummary {
    pub exercise_id: String,
    /// Mean of the criterion scores (0-100).
    pub overall_score: f64,
    pub total_criteria: usize,
    pub passed_criteria: usize,
    pub results: Vec<CriterionResult>,
    /// Ordered, without duplicates.
    pub suggestions: Vec<String>,
}

impl EvaluationSummary {
    /// Overall score rounded to a whole percentage, as stored by progress tracking.
    pub fn rounded_score(&self) -> u32 {
        self.overall_score.round().clamp(0.0, 100.0) as u32
    }

    pub fn all_passed(&self) -> bool {
        self.total_criteria > 0 && self.passed_criteria == self.total_criteria
    }
}

/// The response envelope for evaluation results.
#[derive(Debug, Serialize)]
pub struct EvaluationReportResponse {
    success: bool,
    message: String,
    data: EvaluationSummary,
}

impl From<EvaluationSummary> for EvaluationReportResponse {
    fn from(summary: EvaluationSummary) -> Self {
        EvaluationReportResponse {
            success: true,
            message: "Evaluation complete.".to_string(),
            data: summary,
        }
    }
}
