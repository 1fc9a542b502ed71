use super::catalog::AssessmentCatalog;
use super::domain::{Answer, AnswerValue, Question, QuestionId, Section, ValidationError};
use super::scoring::{AssessmentResults, ScoringConfig, ScoringEngine};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Whether submitted answers are checked against their question's domain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerPolicy {
    #[default]
    Strict,
    Lenient,
}

impl AnswerPolicy {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub section: usize,
    pub question: usize,
}

impl Position {
    pub const fn new(section: usize, question: usize) -> Self {
        Self { section, question }
    }
}

/// Navigation pointer: a question position, or past the last question awaiting scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cursor {
    At(Position),
    Finished,
}

impl Default for Cursor {
    fn default() -> Self {
        Cursor::At(Position::default())
    }
}

/// Per-session assessment state; only the engine mutates it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AssessmentState {
    cursor: Cursor,
    answers: BTreeMap<QuestionId, AnswerValue>,
    results: Option<AssessmentResults>,
    is_complete: bool,
}

impl AssessmentState {
    pub fn initial() -> Self {
        Self::default()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn answers(&self) -> &BTreeMap<QuestionId, AnswerValue> {
        &self.answers
    }

    pub fn answer(&self, question_id: &QuestionId) -> Option<&AnswerValue> {
        self.answers.get(question_id)
    }

    pub fn results(&self) -> Option<&AssessmentResults> {
        self.results.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.is_complete
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IndexError {
    #[error("section index {index} is out of range for {count} section(s)")]
    SectionOutOfRange { index: usize, count: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Index(#[from] IndexError),
}

/// Drives one assessment session over a shared, read-only catalog.
#[derive(Debug, Clone)]
pub struct AssessmentEngine {
    catalog: Arc<AssessmentCatalog>,
    scorer: ScoringEngine,
    policy: AnswerPolicy,
    state: AssessmentState,
}

impl AssessmentEngine {
    pub fn new(catalog: Arc<AssessmentCatalog>) -> Self {
        Self::with_settings(catalog, ScoringConfig::default(), AnswerPolicy::default())
    }

    pub fn with_settings(
        catalog: Arc<AssessmentCatalog>,
        scoring: ScoringConfig,
        policy: AnswerPolicy,
    ) -> Self {
        Self {
            catalog,
            scorer: ScoringEngine::new(scoring),
            policy,
            state: AssessmentState::initial(),
        }
    }

    pub fn catalog(&self) -> &AssessmentCatalog {
        &self.catalog
    }

    pub fn policy(&self) -> AnswerPolicy {
        self.policy
    }

    pub fn state(&self) -> &AssessmentState {
        &self.state
    }

    pub fn cursor(&self) -> Cursor {
        self.state.cursor
    }

    pub fn is_finished(&self) -> bool {
        self.state.cursor == Cursor::Finished
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete
    }

    pub fn results(&self) -> Option<&AssessmentResults> {
        self.state.results.as_ref()
    }

    pub fn current_section(&self) -> Option<&Section> {
        match self.state.cursor {
            Cursor::At(position) => self.catalog.section(position.section),
            Cursor::Finished => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        match self.state.cursor {
            Cursor::At(position) => self
                .catalog
                .question_at(position.section, position.question),
            Cursor::Finished => None,
        }
    }

    pub fn current_answer(&self) -> Option<&AnswerValue> {
        self.current_question()
            .and_then(|question| self.state.answers.get(&question.id))
    }

    /// 1-based number of the current question across the whole catalog.
    pub fn question_number(&self) -> Option<usize> {
        match self.state.cursor {
            Cursor::At(position) => {
                let before = self.catalog.questions_before(position.section);
                Some(before + position.question + 1)
            }
            Cursor::Finished => None,
        }
    }

    /// Fraction of the catalog reached, counting the current question.
    pub fn progress(&self) -> f64 {
        let total = self.catalog.total_questions();
        match self.question_number() {
            Some(number) if total > 0 => number as f64 / total as f64,
            _ => 1.0,
        }
    }

    /// Forward navigation is allowed once the current question has an answer.
    pub fn can_proceed(&self) -> bool {
        self.current_answer().is_some()
    }

    /// Stores an answer, replacing any previous value for the same question.
    pub fn record_answer(&mut self, answer: Answer) -> Result<(), EngineError> {
        if self.policy == AnswerPolicy::Strict {
            let question = self
                .catalog
                .question(&answer.question_id)
                .ok_or_else(|| ValidationError::UnknownQuestion(answer.question_id.clone()))?;
            question.check(&answer.value)?;
        }

        debug!(question_id = %answer.question_id, value = %answer.value, "answer recorded");
        self.state.answers.insert(answer.question_id, answer.value);
        Ok(())
    }

    pub fn advance(&mut self) -> Cursor {
        let Cursor::At(position) = self.state.cursor else {
            debug!("advance ignored; assessment already finished");
            return self.state.cursor;
        };

        let section_len = self
            .catalog
            .section(position.section)
            .map(Section::len)
            .unwrap_or_default();

        self.state.cursor = if position.question + 1 < section_len {
            Cursor::At(Position::new(position.section, position.question + 1))
        } else if position.section + 1 < self.catalog.section_count() {
            Cursor::At(Position::new(position.section + 1, 0))
        } else {
            info!("last question passed; assessment awaiting results");
            Cursor::Finished
        };

        debug!(cursor = ?self.state.cursor, "advanced");
        self.state.cursor
    }

    pub fn retreat(&mut self) -> Cursor {
        let previous = match self.state.cursor {
            Cursor::Finished => self.last_position(),
            Cursor::At(position) if position.question > 0 => {
                Some(Position::new(position.section, position.question - 1))
            }
            Cursor::At(position) if position.section > 0 => {
                let section = position.section - 1;
                self.catalog
                    .section(section)
                    .map(|previous| Position::new(section, previous.len().saturating_sub(1)))
            }
            Cursor::At(_) => None,
        };

        if let Some(position) = previous {
            self.state.cursor = Cursor::At(position);
            debug!(cursor = ?self.state.cursor, "retreated");
        }
        self.state.cursor
    }

    /// Moves to the first question of `index`; out-of-range indices are rejected.
    pub fn jump_to_section(&mut self, index: usize) -> Result<(), EngineError> {
        let count = self.catalog.section_count();
        if index >= count {
            return Err(IndexError::SectionOutOfRange { index, count }.into());
        }

        self.state.cursor = Cursor::At(Position::new(index, 0));
        debug!(section = index, "jumped to section");
        Ok(())
    }

    /// Recomputes results from the current answers and marks the assessment complete.
    pub fn calculate_results(&mut self) -> &AssessmentResults {
        let results = self.scorer.score(&self.catalog, &self.state.answers);
        self.state.is_complete = true;
        self.state.results.insert(results)
    }

    pub fn reset(&mut self) {
        self.state = AssessmentState::initial();
        debug!("assessment reset");
    }

    fn last_position(&self) -> Option<Position> {
        let section = self.catalog.section_count().checked_sub(1)?;
        let question = self.catalog.section(section)?.len().checked_sub(1)?;
        Some(Position::new(section, question))
    }
}
