use super::super::catalog::AssessmentCatalog;
use super::super::domain::{
    AnswerValue, Question, QuestionId, QuestionKind, ScoringTrack, WiscarDimension, LIKERT_MAX,
    LIKERT_MIN,
};
use super::config::ScoringConfig;
use std::collections::BTreeMap;
use tracing::warn;

/// Running mean of normalized answers for one scoring bucket.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct PartitionTally {
    sum: f64,
    count: usize,
}

impl PartitionTally {
    fn add(&mut self, value: f64) {
        self.sum += value;
        self.count += 1;
    }

    pub(crate) fn count(&self) -> usize {
        self.count
    }

    /// Rounded, clamped mean; an empty bucket scores 0.
    pub(crate) fn sub_score(&self) -> u8 {
        if self.count == 0 {
            return 0;
        }
        let mean = self.sum / self.count as f64;
        mean.round().clamp(0.0, 100.0) as u8
    }
}

#[derive(Debug, Default)]
pub(crate) struct ScoreSheet {
    pub psychometric: PartitionTally,
    pub technical: PartitionTally,
    pub wiscar: [PartitionTally; 6],
    pub ignored: usize,
}

impl ScoreSheet {
    pub(crate) fn counted(&self) -> usize {
        self.psychometric.count()
            + self.technical.count()
            + self.wiscar.iter().map(PartitionTally::count).sum::<usize>()
    }

    pub(crate) fn wiscar(&self, dimension: WiscarDimension) -> u8 {
        self.wiscar[dimension.index()].sub_score()
    }
}

/// Maps a single answer onto the 0-100 scale, or `None` when it cannot be scored.
pub(crate) fn normalize(
    question: &Question,
    value: &AnswerValue,
    config: &ScoringConfig,
) -> Option<f64> {
    match value {
        AnswerValue::Scale(scale) if question.kind == QuestionKind::Likert => {
            if !(LIKERT_MIN..=LIKERT_MAX).contains(scale) {
                return None;
            }
            let span = f64::from(LIKERT_MAX - LIKERT_MIN);
            Some((f64::from(*scale) - f64::from(LIKERT_MIN)) / span * 100.0)
        }
        AnswerValue::Choice(choice) if question.kind.is_choice() => {
            question.option_position(choice)?;
            if question.best_option.as_deref() == Some(choice.as_str()) {
                Some(100.0)
            } else {
                Some(f64::from(config.partial_credit.min(100)))
            }
        }
        _ => None,
    }
}

pub(crate) fn tally_answers(
    catalog: &AssessmentCatalog,
    answers: &BTreeMap<QuestionId, AnswerValue>,
    config: &ScoringConfig,
) -> ScoreSheet {
    let mut sheet = ScoreSheet::default();

    for (question_id, value) in answers {
        let Some((section, question)) = catalog.locate(question_id) else {
            warn!(%question_id, "ignoring answer for question outside the catalog");
            sheet.ignored += 1;
            continue;
        };

        let Some(normalized) = normalize(question, value, config) else {
            warn!(
                %question_id,
                kind = question.kind.label(),
                "ignoring answer outside the question's answer domain"
            );
            sheet.ignored += 1;
            continue;
        };

        match section.track {
            ScoringTrack::Psychometric => sheet.psychometric.add(normalized),
            ScoringTrack::Technical => sheet.technical.add(normalized),
            ScoringTrack::Wiscar => match question.dimension {
                Some(dimension) => sheet.wiscar[dimension.index()].add(normalized),
                None => {
                    warn!(%question_id, "ignoring WISCAR answer without a dimension");
                    sheet.ignored += 1;
                }
            },
        }
    }

    sheet
}
