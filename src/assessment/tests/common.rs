use std::collections::BTreeMap;
use std::sync::Arc;

use crate::assessment::{
    Answer, AnswerPolicy, AnswerValue, AssessmentCatalog, AssessmentEngine, CareerGuidance,
    CareerProfile, Question, QuestionId, QuestionKind, ScoringConfig, ScoringTrack, Section,
    TierGuidance, WiscarDimension,
};

pub(super) fn likert(id: &str, section: &str, dimension: Option<WiscarDimension>) -> Question {
    Question {
        id: QuestionId::new(id),
        kind: QuestionKind::Likert,
        prompt: format!("Statement {id}"),
        section: section.to_string(),
        category: None,
        dimension,
        options: Vec::new(),
        best_option: None,
        required: true,
    }
}

pub(super) fn choice(id: &str, section: &str) -> Question {
    Question {
        id: QuestionId::new(id),
        kind: QuestionKind::SingleChoice,
        prompt: format!("Pick one for {id}"),
        section: section.to_string(),
        category: None,
        dimension: None,
        options: vec!["Alpha".to_string(), "Beta".to_string(), "Gamma".to_string()],
        best_option: Some("Beta".to_string()),
        required: true,
    }
}

pub(super) fn section(id: &str, track: ScoringTrack, questions: Vec<Question>) -> Section {
    Section {
        id: id.to_string(),
        title: format!("{id} section"),
        description: format!("Questions about {id}"),
        track,
        questions,
    }
}

pub(super) fn guidance() -> CareerGuidance {
    CareerGuidance {
        career_profiles: vec![
            CareerProfile {
                role: "Analyst".to_string(),
                floor: 70,
                offset: 10,
            },
            CareerProfile {
                role: "Consultant".to_string(),
                floor: 80,
                offset: 0,
            },
        ],
        recommended: TierGuidance {
            summary: "Strong fit".to_string(),
            next_steps: vec!["Apply".to_string()],
            alternative_paths: Vec::new(),
        },
        consider: TierGuidance {
            summary: "Promising".to_string(),
            next_steps: vec!["Take a course".to_string(), "Find a mentor".to_string()],
            alternative_paths: vec!["Analyst".to_string()],
        },
        not_recommended: TierGuidance {
            summary: "Look elsewhere".to_string(),
            next_steps: vec!["Explore adjacent roles".to_string()],
            alternative_paths: vec!["Analyst".to_string(), "Paralegal".to_string()],
        },
    }
}

/// Three sections, four questions: fit [p-1, p-2], skills [t-1], readiness [w-1].
pub(super) fn mini_catalog() -> Arc<AssessmentCatalog> {
    let sections = vec![
        section(
            "fit",
            ScoringTrack::Psychometric,
            vec![likert("p-1", "fit", None), likert("p-2", "fit", None)],
        ),
        section(
            "skills",
            ScoringTrack::Technical,
            vec![choice("t-1", "skills")],
        ),
        section(
            "readiness",
            ScoringTrack::Wiscar,
            vec![likert("w-1", "readiness", Some(WiscarDimension::Will))],
        ),
    ];

    let catalog =
        AssessmentCatalog::new("Mini", sections, guidance()).expect("mini catalog is valid");
    Arc::new(catalog)
}

pub(super) fn standard_catalog() -> Arc<AssessmentCatalog> {
    Arc::new(AssessmentCatalog::standard())
}

pub(super) fn mini_engine() -> AssessmentEngine {
    AssessmentEngine::new(mini_catalog())
}

pub(super) fn lenient_engine() -> AssessmentEngine {
    AssessmentEngine::with_settings(
        mini_catalog(),
        ScoringConfig::default(),
        AnswerPolicy::Lenient,
    )
}

pub(super) fn record_all(engine: &mut AssessmentEngine, answers: Vec<Answer>) {
    for answer in answers {
        engine.record_answer(answer).expect("answer accepted");
    }
}

pub(super) fn answer_map(answers: &[Answer]) -> BTreeMap<QuestionId, AnswerValue> {
    answers
        .iter()
        .map(|answer| (answer.question_id.clone(), answer.value.clone()))
        .collect()
}

/// Best option for every choice question and a 5 for every likert statement.
pub(super) fn strongest_answers(catalog: &AssessmentCatalog) -> Vec<Answer> {
    catalog
        .questions()
        .map(|question| match &question.best_option {
            Some(best) => Answer::choice(question.id.as_str(), best.clone()),
            None => Answer::scale(question.id.as_str(), 5),
        })
        .collect()
}
