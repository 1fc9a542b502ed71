use super::super::catalog::CareerProfile;
use super::config::ScoringConfig;
use super::CareerMatch;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

/// Three-valued outcome derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Yes,
    Maybe,
    No,
}

impl Recommendation {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::Maybe => "maybe",
            Self::No => "no",
        }
    }

    pub const fn headline(self) -> &'static str {
        match self {
            Self::Yes => "Recommended",
            Self::Maybe => "Potentially Suitable",
            Self::No => "Not Recommended",
        }
    }

    pub const fn confidence(self) -> ConfidenceLevel {
        match self {
            Self::Yes => ConfidenceLevel::High,
            Self::Maybe => ConfidenceLevel::Moderate,
            Self::No => ConfidenceLevel::Low,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    High,
    Moderate,
    Low,
}

impl ConfidenceLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Moderate => "Moderate",
            Self::Low => "Low",
        }
    }
}

pub(crate) fn recommend(overall: u8, config: &ScoringConfig) -> Recommendation {
    if overall >= config.recommend_threshold {
        Recommendation::Yes
    } else if overall >= config.consider_threshold {
        Recommendation::Maybe
    } else {
        Recommendation::No
    }
}

pub(crate) fn career_matches(overall: u8, profiles: &[CareerProfile]) -> Vec<CareerMatch> {
    let mut matches: Vec<CareerMatch> = profiles
        .iter()
        .map(|profile| CareerMatch {
            role: profile.role.clone(),
            match_percent: overall
                .saturating_sub(profile.offset)
                .max(profile.floor)
                .min(100),
        })
        .collect();

    // stable: ties keep catalog order
    matches.sort_by_key(|entry| Reverse(entry.match_percent));
    matches
}
