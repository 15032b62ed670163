//! # Feedback Strategies Module
//!
//! Feedback strategies implement the [`Feedback`](crate::traits::feedback::Feedback) trait and turn
//! scored criteria into learner-facing text.
//!
//! ## Available Strategies
//!
//! - [`auto_feedback`]: template-based feedback and suggestions derived from the scores.

pub mod auto_feedback;
