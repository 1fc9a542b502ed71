mod config;
mod policy;
mod rules;

pub use config::ScoringConfig;
pub use policy::{ConfidenceLevel, Recommendation};

use super::catalog::AssessmentCatalog;
use super::domain::{AnswerValue, QuestionId, WiscarDimension};
use policy::{career_matches, recommend};
use rules::tally_answers;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Stateless scorer turning a full answer set into a results snapshot.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Scores every answer the catalog knows about. The same inputs always produce equal results.
    pub fn score(
        &self,
        catalog: &AssessmentCatalog,
        answers: &BTreeMap<QuestionId, AnswerValue>,
    ) -> AssessmentResults {
        let sheet = tally_answers(catalog, answers, &self.config);

        if sheet.counted() == 0 {
            warn!(
                submitted = answers.len(),
                "no scorable answers; results degrade to zero scores"
            );
        }

        let psychometric_fit = sheet.psychometric.sub_score();
        let technical_readiness = sheet.technical.sub_score();
        let wiscar_scores = WiscarScores {
            will: sheet.wiscar(WiscarDimension::Will),
            interest: sheet.wiscar(WiscarDimension::Interest),
            skill: sheet.wiscar(WiscarDimension::Skill),
            cognitive: sheet.wiscar(WiscarDimension::Cognitive),
            ability: sheet.wiscar(WiscarDimension::Ability),
            real_world: sheet.wiscar(WiscarDimension::RealWorld),
        };

        let (overall_score, recommendation) = if sheet.counted() == 0 {
            (0, Recommendation::No)
        } else {
            let composite = (f64::from(psychometric_fit)
                + f64::from(technical_readiness)
                + wiscar_scores.mean())
                / 3.0;
            let overall = composite.round().clamp(0.0, 100.0) as u8;
            (overall, recommend(overall, &self.config))
        };
        let tier = catalog.guidance().for_tier(recommendation);

        info!(
            answered = sheet.counted(),
            ignored = sheet.ignored,
            overall_score,
            recommendation = recommendation.label(),
            "assessment scored"
        );

        AssessmentResults {
            psychometric_fit,
            technical_readiness,
            wiscar_scores,
            overall_score,
            recommendation,
            confidence_level: recommendation.confidence(),
            next_steps: tier.next_steps.clone(),
            career_matches: career_matches(overall_score, &catalog.guidance().career_profiles),
            alternative_paths: tier.alternative_paths.clone(),
        }
    }
}

/// Six-dimension readiness breakdown, each 0-100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WiscarScores {
    pub will: u8,
    pub interest: u8,
    pub skill: u8,
    pub cognitive: u8,
    pub ability: u8,
    pub real_world: u8,
}

impl WiscarScores {
    pub fn get(&self, dimension: WiscarDimension) -> u8 {
        match dimension {
            WiscarDimension::Will => self.will,
            WiscarDimension::Interest => self.interest,
            WiscarDimension::Skill => self.skill,
            WiscarDimension::Cognitive => self.cognitive,
            WiscarDimension::Ability => self.ability,
            WiscarDimension::RealWorld => self.real_world,
        }
    }

    pub fn entries(&self) -> [(WiscarDimension, u8); 6] {
        WiscarDimension::ordered().map(|dimension| (dimension, self.get(dimension)))
    }

    /// Unrounded mean of the six dimensions.
    pub fn mean(&self) -> f64 {
        let total: u32 = self
            .entries()
            .iter()
            .map(|(_, score)| u32::from(*score))
            .sum();
        f64::from(total) / 6.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerMatch {
    pub role: String,
    #[serde(rename = "match")]
    pub match_percent: u8,
}

/// Snapshot produced by a results calculation; never updated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentResults {
    pub psychometric_fit: u8,
    pub technical_readiness: u8,
    pub wiscar_scores: WiscarScores,
    pub overall_score: u8,
    pub recommendation: Recommendation,
    pub confidence_level: ConfidenceLevel,
    pub next_steps: Vec<String>,
    pub career_matches: Vec<CareerMatch>,
    pub alternative_paths: Vec<String>,
}
