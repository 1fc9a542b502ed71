use career_assessment::assessment::{
    likert_label, Answer, AnswerValue, AssessmentEngine, EngineError, Question, QuestionKind,
    LIKERT_MAX, LIKERT_MIN,
};
use std::io::{self, BufRead, Write};
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionOutcome {
    Completed,
    Abandoned,
}

enum Input {
    Pick(usize),
    Continue,
    Back,
    Quit,
    Unrecognized,
}

fn parse_input(line: &str) -> Input {
    let trimmed = line.trim();
    match trimmed {
        "" => Input::Continue,
        "b" | "B" => Input::Back,
        "q" | "Q" => Input::Quit,
        _ => trimmed
            .parse::<usize>()
            .map(Input::Pick)
            .unwrap_or(Input::Unrecognized),
    }
}

/// Maps a typed number onto the current question's answer domain.
fn pick_value(question: &Question, pick: usize) -> Option<AnswerValue> {
    if question.kind.is_choice() {
        pick.checked_sub(1)
            .and_then(|index| question.options.get(index))
            .map(|option| AnswerValue::Choice(option.clone()))
    } else {
        u8::try_from(pick)
            .ok()
            .filter(|value| (LIKERT_MIN..=LIKERT_MAX).contains(value))
            .map(AnswerValue::Scale)
    }
}

fn render_question<W: Write>(engine: &AssessmentEngine, out: &mut W) -> io::Result<()> {
    let (Some(section), Some(question)) = (engine.current_section(), engine.current_question())
    else {
        return Ok(());
    };
    let total = engine.catalog().total_questions();
    let number = engine.question_number().unwrap_or(total);
    let current = engine.current_answer();

    writeln!(out)?;
    writeln!(out, "== {} ==", section.title)?;
    writeln!(
        out,
        "Question {number} of {total} ({:.0}% complete)",
        engine.progress() * 100.0
    )?;
    writeln!(out, "{}", question.prompt)?;

    match question.kind {
        QuestionKind::Likert => {
            for value in LIKERT_MIN..=LIKERT_MAX {
                let marker = if current == Some(&AnswerValue::Scale(value)) {
                    ">"
                } else {
                    " "
                };
                let label = likert_label(value).unwrap_or_default();
                writeln!(out, " {marker} {value}. {label}")?;
            }
        }
        QuestionKind::SingleChoice | QuestionKind::MultipleChoice => {
            for (index, option) in question.options.iter().enumerate() {
                let marker = match current {
                    Some(AnswerValue::Choice(choice)) if choice == option => ">",
                    _ => " ",
                };
                writeln!(out, " {marker} {}. {option}", index + 1)?;
            }
        }
    }

    write!(
        out,
        "Answer number, Enter to continue, b to go back, q to quit: "
    )?;
    out.flush()
}

/// Walks the engine question by question until the last one is passed or input ends.
pub(crate) fn run_session<R: BufRead, W: Write>(
    engine: &mut AssessmentEngine,
    input: R,
    mut out: W,
) -> io::Result<SessionOutcome> {
    let mut lines = input.lines();

    writeln!(
        out,
        "{} assessment: {} questions",
        engine.catalog().title(),
        engine.catalog().total_questions()
    )?;

    while !engine.is_finished() {
        render_question(engine, &mut out)?;

        let Some(line) = lines.next() else {
            debug!("input closed before the last question");
            return Ok(SessionOutcome::Abandoned);
        };

        match parse_input(&line?) {
            Input::Quit => return Ok(SessionOutcome::Abandoned),
            Input::Back => {
                engine.retreat();
            }
            Input::Continue => {
                if engine.can_proceed() {
                    engine.advance();
                } else {
                    writeln!(out, "Please answer before continuing.")?;
                }
            }
            Input::Pick(pick) => {
                let Some(question) = engine.current_question() else {
                    continue;
                };
                let Some(value) = pick_value(question, pick) else {
                    writeln!(out, "{pick} is not one of the listed answers.")?;
                    continue;
                };
                let answer = Answer {
                    question_id: question.id.clone(),
                    value,
                };
                match engine.record_answer(answer) {
                    Ok(()) => {
                        engine.advance();
                    }
                    Err(EngineError::Validation(err)) => {
                        warn!(error = %err, "answer rejected");
                        writeln!(out, "{err}")?;
                    }
                    Err(err) => writeln!(out, "{err}")?,
                }
            }
            Input::Unrecognized => writeln!(out, "Type a number from the list, b or q.")?,
        }
    }

    engine.calculate_results();
    Ok(SessionOutcome::Completed)
}
