use super::domain::{Question, QuestionId, ScoringTrack, Section};
use super::scoring::Recommendation;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::info;

/// Role suggested on the results page. The match is `max(floor, overall - offset)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CareerProfile {
    pub role: String,
    pub floor: u8,
    pub offset: u8,
}

/// Content shown for a single recommendation tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TierGuidance {
    pub summary: String,
    #[serde(default)]
    pub next_steps: Vec<String>,
    #[serde(default)]
    pub alternative_paths: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CareerGuidance {
    pub career_profiles: Vec<CareerProfile>,
    pub recommended: TierGuidance,
    pub consider: TierGuidance,
    pub not_recommended: TierGuidance,
}

impl CareerGuidance {
    pub fn for_tier(&self, recommendation: Recommendation) -> &TierGuidance {
        match recommendation {
            Recommendation::Yes => &self.recommended,
            Recommendation::Maybe => &self.consider,
            Recommendation::No => &self.not_recommended,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDocument {
    title: String,
    sections: Vec<Section>,
    guidance: CareerGuidance,
}

/// Ordered, validated set of sections presented during an assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssessmentCatalog {
    title: String,
    sections: Vec<Section>,
    guidance: CareerGuidance,
    #[serde(skip)]
    locations: HashMap<QuestionId, (usize, usize)>,
    #[serde(skip)]
    offsets: Vec<usize>,
}

impl AssessmentCatalog {
    /// Builds a catalog after checking every structural invariant.
    pub fn new(
        title: impl Into<String>,
        mut sections: Vec<Section>,
        guidance: CareerGuidance,
    ) -> Result<Self, CatalogError> {
        for section in &mut sections {
            for question in &mut section.questions {
                if question.section.is_empty() {
                    question.section = section.id.clone();
                }
            }
        }

        validate(&sections, &guidance)?;
        Ok(Self::assemble(title.into(), sections, guidance))
    }

    /// Indexes already validated content.
    pub(super) fn assemble(
        title: String,
        sections: Vec<Section>,
        guidance: CareerGuidance,
    ) -> Self {
        let mut locations = HashMap::new();
        let mut offsets = Vec::with_capacity(sections.len());
        let mut seen = 0;
        for (section_index, section) in sections.iter().enumerate() {
            offsets.push(seen);
            seen += section.len();
            for (question_index, question) in section.questions.iter().enumerate() {
                locations.insert(question.id.clone(), (section_index, question_index));
            }
        }

        Self {
            title,
            sections,
            guidance,
            locations,
            offsets,
        }
    }

    /// Re-runs the structural checks, mainly for content assembled in code.
    pub fn validate(&self) -> Result<(), CatalogError> {
        validate(&self.sections, &self.guidance)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_reader(reader)?;
        Self::new(document.title, document.sections, document.guidance)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_reader(BufReader::new(file))?;
        info!(
            path = %path.display(),
            sections = catalog.section_count(),
            questions = catalog.total_questions(),
            "loaded assessment catalog"
        );
        Ok(catalog)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn section(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    pub fn guidance(&self) -> &CareerGuidance {
        &self.guidance
    }

    pub fn total_questions(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }

    /// Number of questions in every section before `section_index`.
    pub fn questions_before(&self, section_index: usize) -> usize {
        self.offsets
            .get(section_index)
            .copied()
            .unwrap_or_else(|| self.total_questions())
    }

    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.sections
            .iter()
            .flat_map(|section| section.questions.iter())
    }

    pub fn questions_for_track(&self, track: ScoringTrack) -> Vec<&Question> {
        self.sections
            .iter()
            .filter(|section| section.track == track)
            .flat_map(|section| section.questions.iter())
            .collect()
    }

    pub fn question_at(&self, section_index: usize, question_index: usize) -> Option<&Question> {
        self.sections
            .get(section_index)
            .and_then(|section| section.questions.get(question_index))
    }

    /// Resolves a question id to its owning section and the question itself.
    pub fn locate(&self, id: &QuestionId) -> Option<(&Section, &Question)> {
        let (section_index, question_index) = *self.locations.get(id)?;
        let section = &self.sections[section_index];
        Some((section, &section.questions[question_index]))
    }

    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.locate(id).map(|(_, question)| question)
    }
}

fn validate(sections: &[Section], guidance: &CareerGuidance) -> Result<(), CatalogError> {
    if sections.is_empty() {
        return Err(CatalogError::NoSections);
    }

    let mut section_ids = HashSet::new();
    let mut question_ids = HashSet::new();

    for section in sections {
        if !section_ids.insert(section.id.as_str()) {
            return Err(CatalogError::DuplicateSection(section.id.clone()));
        }
        if section.is_empty() {
            return Err(CatalogError::EmptySection(section.id.clone()));
        }

        for question in &section.questions {
            if !question_ids.insert(&question.id) {
                return Err(CatalogError::DuplicateQuestion(question.id.clone()));
            }
            if question.section != section.id {
                return Err(CatalogError::SectionMismatch {
                    question: question.id.clone(),
                    declared: question.section.clone(),
                    owner: section.id.clone(),
                });
            }
            validate_question(section, question)?;
        }
    }

    for profile in &guidance.career_profiles {
        if profile.floor > 100 {
            return Err(CatalogError::InvalidCareerProfile(profile.role.clone()));
        }
    }

    Ok(())
}

fn validate_question(section: &Section, question: &Question) -> Result<(), CatalogError> {
    if question.kind.is_choice() {
        if question.options.is_empty() {
            return Err(CatalogError::MissingOptions(question.id.clone()));
        }
        let best = question
            .best_option
            .as_deref()
            .ok_or_else(|| CatalogError::MissingBestOption(question.id.clone()))?;
        if question.option_position(best).is_none() {
            return Err(CatalogError::UnlistedBestOption {
                question: question.id.clone(),
                best_option: best.to_string(),
            });
        }
    } else if !question.options.is_empty() || question.best_option.is_some() {
        return Err(CatalogError::UnexpectedOptions(question.id.clone()));
    }

    if section.track == ScoringTrack::Wiscar && question.dimension.is_none() {
        return Err(CatalogError::MissingDimension(question.id.clone()));
    }

    Ok(())
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog must contain at least one section")]
    NoSections,
    #[error("section id {0} appears more than once")]
    DuplicateSection(String),
    #[error("section {0} has no questions")]
    EmptySection(String),
    #[error("question id {0} appears more than once")]
    DuplicateQuestion(QuestionId),
    #[error("question {question} declares section {declared} but is listed under {owner}")]
    SectionMismatch {
        question: QuestionId,
        declared: String,
        owner: String,
    },
    #[error("choice question {0} has no options")]
    MissingOptions(QuestionId),
    #[error("likert question {0} must not declare options")]
    UnexpectedOptions(QuestionId),
    #[error("choice question {0} does not declare a best option")]
    MissingBestOption(QuestionId),
    #[error("best option '{best_option}' of question {question} is not one of its options")]
    UnlistedBestOption {
        question: QuestionId,
        best_option: String,
    },
    #[error("question {0} belongs to a WISCAR section but has no dimension")]
    MissingDimension(QuestionId),
    #[error("career profile {0} has a floor above 100")]
    InvalidCareerProfile(String),
    #[error("unable to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("catalog document is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}
