// Competency self-assessment
// Implements: the 17-item questionnaire, answer scoring into an `Evaluation`,
// and the per-member narrative.

pub mod handlers;
pub mod narrative;
pub mod questions;
pub mod scoring;
