use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::Read;

pub const LIKERT_MIN: u8 = 1;
pub const LIKERT_MAX: u8 = 5;

/// Labels shown for each point of the 1-5 agreement scale.
pub const fn likert_label(value: u8) -> Option<&'static str> {
    match value {
        1 => Some("Strongly Disagree"),
        2 => Some("Disagree"),
        3 => Some("Neutral"),
        4 => Some("Agree"),
        5 => Some("Strongly Agree"),
        _ => None,
    }
}

pub fn likert_scale() -> Vec<&'static str> {
    let points = LIKERT_MIN..=LIKERT_MAX;
    points.filter_map(likert_label).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    Likert,
    SingleChoice,
    MultipleChoice,
}

impl QuestionKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Likert => "likert",
            Self::SingleChoice => "single-choice",
            Self::MultipleChoice => "multiple-choice",
        }
    }

    pub const fn is_choice(self) -> bool {
        !matches!(self, Self::Likert)
    }
}

/// Scoring bucket a section feeds into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringTrack {
    Psychometric,
    Technical,
    Wiscar,
}

impl ScoringTrack {
    pub const fn ordered() -> [Self; 3] {
        [Self::Psychometric, Self::Technical, Self::Wiscar]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Psychometric => "Psychological Fit",
            Self::Technical => "Technical Readiness",
            Self::Wiscar => "WISCAR Framework",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WiscarDimension {
    Will,
    Interest,
    Skill,
    Cognitive,
    Ability,
    RealWorld,
}

impl WiscarDimension {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Will,
            Self::Interest,
            Self::Skill,
            Self::Cognitive,
            Self::Ability,
            Self::RealWorld,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Will => "Will",
            Self::Interest => "Interest",
            Self::Skill => "Skill",
            Self::Cognitive => "Cognitive Readiness",
            Self::Ability => "Ability to Learn",
            Self::RealWorld => "Real-World Alignment",
        }
    }

    pub(crate) const fn index(self) -> usize {
        match self {
            Self::Will => 0,
            Self::Interest => 1,
            Self::Skill => 2,
            Self::Cognitive => 3,
            Self::Ability => 4,
            Self::RealWorld => 5,
        }
    }
}

/// Identifier wrapper for catalog questions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

impl QuestionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Question {
    pub id: QuestionId,
    pub kind: QuestionKind,
    pub prompt: String,
    /// Owning section id; filled in from the enclosing section when a catalog file omits it.
    #[serde(default)]
    pub section: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dimension: Option<WiscarDimension>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub best_option: Option<String>,
    #[serde(default = "required_by_default")]
    pub required: bool,
}

fn required_by_default() -> bool {
    true
}

impl Question {
    pub fn option_position(&self, value: &str) -> Option<usize> {
        self.options.iter().position(|option| option == value)
    }

    /// Checks a submitted value against the question's declared domain.
    pub fn check(&self, value: &AnswerValue) -> Result<(), ValidationError> {
        match (self.kind, value) {
            (QuestionKind::Likert, AnswerValue::Scale(scale)) => {
                if (LIKERT_MIN..=LIKERT_MAX).contains(scale) {
                    Ok(())
                } else {
                    Err(ValidationError::LikertOutOfRange {
                        question_id: self.id.clone(),
                        value: *scale,
                    })
                }
            }
            (QuestionKind::Likert, AnswerValue::Choice(_)) => Err(ValidationError::KindMismatch {
                question_id: self.id.clone(),
                expected: QuestionKind::Likert.label(),
            }),
            (kind, AnswerValue::Scale(_)) => Err(ValidationError::KindMismatch {
                question_id: self.id.clone(),
                expected: kind.label(),
            }),
            (_, AnswerValue::Choice(choice)) => {
                if self.option_position(choice).is_some() {
                    Ok(())
                } else {
                    Err(ValidationError::UnknownOption {
                        question_id: self.id.clone(),
                        value: choice.clone(),
                    })
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub description: String,
    pub track: ScoringTrack,
    pub questions: Vec<Question>,
}

impl Section {
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// A likert point or one of the question's option labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Scale(u8),
    Choice(String),
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerValue::Scale(value) => write!(f, "{value}"),
            AnswerValue::Choice(choice) => f.write_str(choice),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: QuestionId,
    pub value: AnswerValue,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, value: AnswerValue) -> Self {
        Self {
            question_id: QuestionId::new(question_id),
            value,
        }
    }

    pub fn scale(question_id: impl Into<String>, value: u8) -> Self {
        Self::new(question_id, AnswerValue::Scale(value))
    }

    pub fn choice(question_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(question_id, AnswerValue::Choice(value.into()))
    }
}

/// Pre-filled answers submitted in one batch, e.g. from a JSON file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerSheet {
    pub answers: Vec<Answer>,
}

impl AnswerSheet {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("question {0} is not part of the catalog")]
    UnknownQuestion(QuestionId),
    #[error("question {question_id} expects a value between 1 and 5, got {value}")]
    LikertOutOfRange { question_id: QuestionId, value: u8 },
    #[error("question {question_id} has no option '{value}'")]
    UnknownOption {
        question_id: QuestionId,
        value: String,
    },
    #[error("question {question_id} expects a {expected} answer")]
    KindMismatch {
        question_id: QuestionId,
        expected: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choice_question() -> Question {
        Question {
            id: QuestionId::new("tech-4"),
            kind: QuestionKind::MultipleChoice,
            prompt: "CLM in legal technology stands for:".to_string(),
            section: "technical".to_string(),
            category: Some("Legal Tech Tools".to_string()),
            dimension: None,
            options: vec![
                "Client Lifecycle Management".to_string(),
                "Contract Lifecycle Management".to_string(),
            ],
            best_option: Some("Contract Lifecycle Management".to_string()),
            required: true,
        }
    }

    #[test]
    fn answer_values_deserialize_untagged() {
        let sheet: AnswerSheet = serde_json::from_str(
            r#"{"answers":[{"question_id":"psych-1","value":4},{"question_id":"tech-4","value":"Contract Lifecycle Management"}]}"#,
        )
        .expect("sheet parses");

        assert_eq!(sheet.answers[0], Answer::scale("psych-1", 4));
        assert_eq!(
            sheet.answers[1],
            Answer::choice("tech-4", "Contract Lifecycle Management")
        );
    }

    #[test]
    fn choice_questions_reject_unlisted_options_and_scale_values() {
        let question = choice_question();

        assert!(question
            .check(&AnswerValue::Choice("Contract Lifecycle Management".into()))
            .is_ok());
        assert!(matches!(
            question.check(&AnswerValue::Choice("Case Law Management".into())),
            Err(ValidationError::UnknownOption { .. })
        ));
        assert_eq!(
            question.check(&AnswerValue::Scale(3)),
            Err(ValidationError::KindMismatch {
                question_id: QuestionId::new("tech-4"),
                expected: "multiple-choice",
            })
        );
    }

    #[test]
    fn likert_labels_cover_the_scale_only() {
        assert_eq!(likert_label(LIKERT_MIN), Some("Strongly Disagree"));
        assert_eq!(likert_label(LIKERT_MAX), Some("Strongly Agree"));
        assert_eq!(likert_label(0), None);
        assert_eq!(likert_label(6), None);
    }
}
