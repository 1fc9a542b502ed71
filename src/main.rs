mod terminal;

use career_assessment::assessment::report::{write_csv, write_json, write_text};
use career_assessment::assessment::{
    likert_scale, AnswerPolicy, AnswerSheet, AssessmentCatalog, AssessmentEngine, QuestionKind,
    ScoringTrack,
};
use career_assessment::config::AppConfig;
use career_assessment::error::AppError;
use career_assessment::telemetry;
use chrono::Local;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::sync::Arc;
use terminal::SessionOutcome;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Career Assessment",
    about = "Take or score a career readiness assessment from the command line",
    version
)]
struct Cli {
    #[command(flatten)]
    session: SessionArgs,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Args, Debug, Default)]
struct SessionArgs {
    /// Load the question catalog from a JSON file instead of the built-in assessment
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Accept answers without checking them against the question's scale or options
    #[arg(long, global = true)]
    lenient: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Answer the assessment interactively (default command)
    Take,
    /// Score a pre-filled JSON answer sheet and print the results
    Score(ScoreArgs),
    /// List the sections and questions of the active catalog
    Catalog,
}

#[derive(Args, Debug)]
struct ScoreArgs {
    /// JSON file shaped like {"answers": [{"question_id": "psych-1", "value": 4}]}
    #[arg(long)]
    answers: PathBuf,
    /// Output format for the results report
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    format: ReportFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ReportFormat {
    Text,
    Json,
    Csv,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;

    if let Some(path) = cli.session.catalog {
        config.assessment.catalog_path = Some(path);
    }
    if cli.session.lenient {
        config.assessment.answer_policy = AnswerPolicy::Lenient;
    }

    telemetry::init(&config.telemetry)?;

    let catalog = match &config.assessment.catalog_path {
        Some(path) => AssessmentCatalog::from_path(path)?,
        None => AssessmentCatalog::standard(),
    };

    info!(
        ?config.environment,
        catalog = catalog.title(),
        policy = config.assessment.answer_policy.label(),
        "career assessment ready"
    );

    let engine = AssessmentEngine::with_settings(
        Arc::new(catalog),
        config.scoring,
        config.assessment.answer_policy,
    );

    match cli.command.unwrap_or(Command::Take) {
        Command::Take => run_take(engine),
        Command::Score(args) => run_score(engine, args),
        Command::Catalog => {
            render_catalog(engine.catalog());
            Ok(())
        }
    }
}

fn run_take(mut engine: AssessmentEngine) -> Result<(), AppError> {
    let outcome = terminal::run_session(&mut engine, io::stdin().lock(), io::stdout().lock())?;

    match (outcome, engine.results()) {
        (SessionOutcome::Completed, Some(results)) => {
            println!();
            write_text(
                engine.catalog(),
                results,
                Local::now().date_naive(),
                io::stdout().lock(),
            )?;
        }
        _ => println!("\nAssessment stopped before the last question; no results recorded."),
    }

    Ok(())
}

fn run_score(mut engine: AssessmentEngine, args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs { answers, format } = args;

    let file = File::open(&answers).map_err(|source| AppError::Input {
        path: answers.clone(),
        source,
    })?;
    let sheet = AnswerSheet::from_reader(BufReader::new(file))?;
    info!(path = %answers.display(), answers = sheet.answers.len(), "answer sheet loaded");

    for answer in sheet.answers {
        engine.record_answer(answer)?;
    }

    let results = engine.calculate_results().clone();
    let stdout = io::stdout().lock();

    match format {
        ReportFormat::Text => write_text(
            engine.catalog(),
            &results,
            Local::now().date_naive(),
            stdout,
        )?,
        ReportFormat::Json => {
            write_json(&results, stdout)?;
            println!();
        }
        ReportFormat::Csv => write_csv(&results, stdout)?,
    }

    Ok(())
}

fn render_catalog(catalog: &AssessmentCatalog) {
    println!(
        "{} assessment: {} sections, {} questions",
        catalog.title(),
        catalog.section_count(),
        catalog.total_questions()
    );
    for track in ScoringTrack::ordered() {
        println!(
            "- {}: {} questions",
            track.label(),
            catalog.questions_for_track(track).len()
        );
    }

    let mut number = 0;
    for section in catalog.sections() {
        println!("\n{} [{}]", section.title, section.track.label());
        println!("{}", section.description);
        for question in &section.questions {
            number += 1;
            println!(
                "{:>3}. ({}) {} [{}]",
                number,
                question.id,
                question.prompt,
                question.kind.label()
            );
            if question.kind == QuestionKind::Likert {
                continue;
            }
            for option in &question.options {
                let marker = if question.best_option.as_deref() == Some(option.as_str()) {
                    "*"
                } else {
                    "-"
                };
                println!("       {marker} {option}");
            }
        }
    }

    println!("\nLikert scale: {}", likert_scale().join(" / "));
}
