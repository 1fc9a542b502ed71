//! Career assessment core: question catalog, per-session engine, and scoring.

pub mod catalog;
pub mod domain;
mod engine;
pub mod report;
pub mod scoring;
mod standard;

#[cfg(test)]
mod tests;

pub use catalog::{AssessmentCatalog, CareerGuidance, CareerProfile, CatalogError, TierGuidance};
pub use domain::{
    likert_label, likert_scale, Answer, AnswerSheet, AnswerValue, Question, QuestionId,
    QuestionKind, ScoringTrack, Section, ValidationError, WiscarDimension, LIKERT_MAX, LIKERT_MIN,
};
pub use engine::{
    AnswerPolicy, AssessmentEngine, AssessmentState, Cursor, EngineError, IndexError, Position,
};
pub use scoring::{
    AssessmentResults, CareerMatch, ConfidenceLevel, Recommendation, ScoringConfig, ScoringEngine,
    WiscarScores,
};
