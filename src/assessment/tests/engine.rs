use super::common::*;
use crate::assessment::{
    Answer, AnswerValue, AssessmentState, Cursor, EngineError, IndexError, Position, QuestionId,
    ValidationError,
};

#[test]
fn advance_visits_every_question_in_order_then_finishes() {
    let mut engine = mini_engine();
    let mut visited = Vec::new();

    while let Some(question) = engine.current_question() {
        visited.push(question.id.as_str().to_string());
        engine.advance();
    }

    assert_eq!(visited, ["p-1", "p-2", "t-1", "w-1"]);
    assert_eq!(engine.cursor(), Cursor::Finished);
    assert!(engine.is_finished());
    assert!(!engine.is_complete());
    assert!(engine.results().is_none());
}

#[test]
fn advance_past_finished_is_a_no_op() {
    let mut engine = mini_engine();
    for _ in 0..4 {
        engine.advance();
    }
    let before = engine.state().clone();

    assert_eq!(engine.advance(), Cursor::Finished);
    assert_eq!(engine.state(), &before);
}

#[test]
fn retreat_reverses_advance_across_sections() {
    let mut engine = mini_engine();
    let mut trail = vec![engine.cursor()];
    for _ in 0..4 {
        trail.push(engine.advance());
    }

    for expected in trail.iter().rev().skip(1) {
        assert_eq!(engine.retreat(), *expected);
    }
    assert_eq!(engine.cursor(), Cursor::At(Position::new(0, 0)));
}

#[test]
fn retreat_from_finished_lands_on_last_question() {
    let mut engine = mini_engine();
    for _ in 0..4 {
        engine.advance();
    }

    assert_eq!(engine.retreat(), Cursor::At(Position::new(2, 0)));
    let question = engine.current_question().expect("question after retreat");
    assert_eq!(question.id.as_str(), "w-1");
}

#[test]
fn retreat_at_first_question_does_nothing() {
    let mut engine = mini_engine();

    assert_eq!(engine.retreat(), Cursor::At(Position::new(0, 0)));
    assert_eq!(engine.state(), &AssessmentState::initial());
}

#[test]
fn recording_the_same_answer_twice_is_idempotent() {
    let mut engine = mini_engine();
    engine
        .record_answer(Answer::scale("p-1", 4))
        .expect("valid answer");
    let once = engine.state().clone();

    engine
        .record_answer(Answer::scale("p-1", 4))
        .expect("valid answer");

    assert_eq!(engine.state(), &once);
}

#[test]
fn later_answers_replace_earlier_ones() {
    let mut engine = mini_engine();
    record_all(
        &mut engine,
        vec![
            Answer::choice("t-1", "Alpha"),
            Answer::choice("t-1", "Gamma"),
        ],
    );

    assert_eq!(engine.state().answers().len(), 1);
    assert_eq!(
        engine.state().answer(&QuestionId::new("t-1")),
        Some(&AnswerValue::Choice("Gamma".to_string()))
    );
}

#[test]
fn recording_does_not_move_the_cursor() {
    let mut engine = mini_engine();

    engine
        .record_answer(Answer::scale("w-1", 2))
        .expect("valid answer");

    assert_eq!(engine.cursor(), Cursor::At(Position::new(0, 0)));
}

#[test]
fn jump_to_section_moves_to_its_first_question() {
    let mut engine = mini_engine();

    engine.jump_to_section(2).expect("section exists");

    assert_eq!(engine.cursor(), Cursor::At(Position::new(2, 0)));
    assert_eq!(engine.question_number(), Some(4));
}

#[test]
fn jump_out_of_range_is_rejected_without_side_effects() {
    let mut engine = mini_engine();
    engine.advance();
    let before = engine.state().clone();

    let err = engine.jump_to_section(3).expect_err("only three sections");

    assert_eq!(
        err,
        EngineError::Index(IndexError::SectionOutOfRange { index: 3, count: 3 })
    );
    assert_eq!(engine.state(), &before);
}

#[test]
fn strict_policy_rejects_answers_outside_the_question_domain() {
    let mut engine = mini_engine();

    assert_eq!(
        engine.record_answer(Answer::scale("p-1", 6)),
        Err(EngineError::Validation(ValidationError::LikertOutOfRange {
            question_id: QuestionId::new("p-1"),
            value: 6,
        }))
    );
    assert_eq!(
        engine.record_answer(Answer::scale("p-1", 0)),
        Err(EngineError::Validation(ValidationError::LikertOutOfRange {
            question_id: QuestionId::new("p-1"),
            value: 0,
        }))
    );
    assert!(matches!(
        engine.record_answer(Answer::choice("t-1", "Delta")),
        Err(EngineError::Validation(ValidationError::UnknownOption { .. }))
    ));
    assert!(matches!(
        engine.record_answer(Answer::choice("p-2", "Alpha")),
        Err(EngineError::Validation(ValidationError::KindMismatch { .. }))
    ));
    let unknown = ValidationError::UnknownQuestion(QuestionId::new("missing"));
    assert_eq!(
        engine.record_answer(Answer::scale("missing", 3)),
        Err(EngineError::Validation(unknown))
    );
    assert!(engine.state().answers().is_empty());
}

#[test]
fn lenient_policy_stores_whatever_is_submitted() {
    let mut engine = lenient_engine();

    record_all(
        &mut engine,
        vec![Answer::scale("p-1", 9), Answer::scale("missing", 3)],
    );

    assert_eq!(engine.state().answers().len(), 2);
}

#[test]
fn can_proceed_follows_the_current_answer() {
    let mut engine = mini_engine();
    assert!(!engine.can_proceed());

    engine
        .record_answer(Answer::scale("p-1", 3))
        .expect("valid answer");
    assert!(engine.can_proceed());

    engine.advance();
    assert!(!engine.can_proceed());
}

#[test]
fn progress_counts_the_current_question() {
    let mut engine = mini_engine();
    assert_eq!(engine.question_number(), Some(1));
    assert!((engine.progress() - 0.25).abs() < f64::EPSILON);

    engine.jump_to_section(2).expect("section exists");
    assert!((engine.progress() - 1.0).abs() < f64::EPSILON);

    engine.advance();
    assert_eq!(engine.question_number(), None);
    assert!((engine.progress() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn reset_restores_the_initial_state() {
    let mut engine = mini_engine();
    record_all(
        &mut engine,
        vec![Answer::scale("p-1", 5), Answer::choice("t-1", "Beta")],
    );
    engine.advance();
    engine.calculate_results();

    engine.reset();

    assert_eq!(engine.state(), &AssessmentState::initial());
    assert!(!engine.is_complete());
}

#[test]
fn calculate_results_is_stable_until_answers_change() {
    let mut engine = mini_engine();
    record_all(
        &mut engine,
        vec![Answer::scale("p-1", 5), Answer::scale("p-2", 5)],
    );

    let first = engine.calculate_results().clone();
    let second = engine.calculate_results().clone();
    assert_eq!(first, second);
    assert!(engine.is_complete());

    engine
        .record_answer(Answer::scale("p-2", 1))
        .expect("valid answer");
    let third = engine.calculate_results().clone();

    assert_ne!(first, third);
    assert_eq!(third.psychometric_fit, 50);
    assert_eq!(engine.results(), Some(&third));
}

#[test]
fn results_can_be_calculated_mid_assessment() {
    let mut engine = mini_engine();
    engine
        .record_answer(Answer::scale("p-1", 5))
        .expect("valid answer");

    let results = engine.calculate_results().clone();

    assert_eq!(engine.cursor(), Cursor::At(Position::new(0, 0)));
    assert_eq!(results.psychometric_fit, 100);
}

#[test]
fn engines_share_one_catalog() {
    let catalog = standard_catalog();
    let first = crate::assessment::AssessmentEngine::new(catalog.clone());
    let mut second = crate::assessment::AssessmentEngine::new(catalog.clone());

    second.advance();

    assert_eq!(std::sync::Arc::strong_count(&catalog), 3);
    assert_eq!(first.cursor(), Cursor::At(Position::new(0, 0)));
    assert_eq!(second.cursor(), Cursor::At(Position::new(0, 1)));
}
