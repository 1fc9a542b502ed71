use super::catalog::AssessmentCatalog;
use super::domain::ScoringTrack;
use super::scoring::AssessmentResults;
use chrono::NaiveDate;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to encode report as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to encode report as CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// One score line of the exported breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreRow {
    #[serde(rename = "Category")]
    pub category: &'static str,
    #[serde(rename = "Dimension")]
    pub dimension: &'static str,
    #[serde(rename = "Score")]
    pub score: u8,
}

pub fn score_rows(results: &AssessmentResults) -> Vec<ScoreRow> {
    let mut rows = vec![
        ScoreRow {
            category: ScoringTrack::Psychometric.label(),
            dimension: "",
            score: results.psychometric_fit,
        },
        ScoreRow {
            category: ScoringTrack::Technical.label(),
            dimension: "",
            score: results.technical_readiness,
        },
    ];

    for (dimension, score) in results.wiscar_scores.entries() {
        rows.push(ScoreRow {
            category: ScoringTrack::Wiscar.label(),
            dimension: dimension.label(),
            score,
        });
    }

    rows.push(ScoreRow {
        category: "Overall",
        dimension: "",
        score: results.overall_score,
    });

    rows
}

pub fn write_csv<W: Write>(results: &AssessmentResults, writer: W) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in score_rows(results) {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_json<W: Write>(results: &AssessmentResults, writer: W) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(writer, results)?;
    Ok(())
}

/// Plain-text results dashboard.
pub fn write_text<W: Write>(
    catalog: &AssessmentCatalog,
    results: &AssessmentResults,
    generated_on: NaiveDate,
    mut out: W,
) -> Result<(), ReportError> {
    let tier = catalog.guidance().for_tier(results.recommendation);

    writeln!(out, "{} assessment results", catalog.title())?;
    writeln!(out, "Generated {generated_on}")?;
    writeln!(
        out,
        "\n{} ({} confidence): overall score {}/100",
        results.recommendation.headline(),
        results.confidence_level.label(),
        results.overall_score
    )?;
    if !tier.summary.is_empty() {
        writeln!(out, "{}", tier.summary)?;
    }

    writeln!(out, "\nScore breakdown")?;
    writeln!(
        out,
        "- {}: {}",
        ScoringTrack::Psychometric.label(),
        results.psychometric_fit
    )?;
    writeln!(
        out,
        "- {}: {}",
        ScoringTrack::Technical.label(),
        results.technical_readiness
    )?;

    writeln!(out, "\n{}", ScoringTrack::Wiscar.label())?;
    for (dimension, score) in results.wiscar_scores.entries() {
        writeln!(out, "- {}: {}", dimension.label(), score)?;
    }

    writeln!(out, "\nTop career matches")?;
    for entry in &results.career_matches {
        writeln!(out, "- {}: {}%", entry.role, entry.match_percent)?;
    }

    if results.next_steps.is_empty() {
        writeln!(out, "\nRecommended next steps: none")?;
    } else {
        writeln!(out, "\nRecommended next steps")?;
        for (index, step) in results.next_steps.iter().enumerate() {
            writeln!(out, "{}. {}", index + 1, step)?;
        }
    }

    if !results.alternative_paths.is_empty() {
        writeln!(out, "\nAlternative career paths")?;
        for path in &results.alternative_paths {
            writeln!(out, "- {path}")?;
        }
    }

    Ok(())
}
