use super::catalog::{AssessmentCatalog, CareerGuidance, CareerProfile, TierGuidance};
use super::domain::{Question, QuestionId, QuestionKind, ScoringTrack, Section, WiscarDimension};

impl AssessmentCatalog {
    /// Built-in Legal Tech Consultant readiness assessment.
    pub fn standard() -> Self {
        Self::assemble(
            "Legal Tech Consultant".to_string(),
            standard_sections(),
            standard_guidance(),
        )
    }
}

fn likert(
    id: &str,
    section: &str,
    category: &str,
    dimension: Option<WiscarDimension>,
    prompt: &str,
) -> Question {
    Question {
        id: QuestionId::new(id),
        kind: QuestionKind::Likert,
        prompt: prompt.to_string(),
        section: section.to_string(),
        category: Some(category.to_string()),
        dimension,
        options: Vec::new(),
        best_option: None,
        required: true,
    }
}

#[allow(clippy::too_many_arguments)]
fn choice(
    id: &str,
    kind: QuestionKind,
    section: &str,
    category: &str,
    dimension: Option<WiscarDimension>,
    prompt: &str,
    options: [&str; 4],
    best: usize,
) -> Question {
    Question {
        id: QuestionId::new(id),
        kind,
        prompt: prompt.to_string(),
        section: section.to_string(),
        category: Some(category.to_string()),
        dimension,
        options: options.iter().map(|option| option.to_string()).collect(),
        best_option: Some(options[best].to_string()),
        required: true,
    }
}

fn standard_sections() -> Vec<Section> {
    vec![
        Section {
            id: "psychometric".to_string(),
            title: "Psychological Fit Assessment".to_string(),
            description: "Understanding your personality traits, interests, and cognitive style for Legal Tech Consulting.".to_string(),
            track: ScoringTrack::Psychometric,
            questions: vec![
                likert(
                    "psych-1",
                    "psychometric",
                    "Interest",
                    None,
                    "I enjoy finding ways to improve legal work with automation and technology.",
                ),
                likert(
                    "psych-2",
                    "psychometric",
                    "Personality",
                    None,
                    "I can stay focused on long, detailed documents and complex processes.",
                ),
                choice(
                    "psych-3",
                    QuestionKind::MultipleChoice,
                    "psychometric",
                    "Cognitive Style",
                    None,
                    "When approaching a new project, I prefer to:",
                    [
                        "Start with a detailed checklist and systematic approach",
                        "Brainstorm creative solutions first, then organize",
                        "Research best practices and follow proven methods",
                        "Jump in and figure it out as I go",
                    ],
                    0,
                ),
                likert(
                    "psych-4",
                    "psychometric",
                    "Motivation",
                    None,
                    "I am motivated by the opportunity to modernize how law firms and legal departments work.",
                ),
                likert(
                    "psych-5",
                    "psychometric",
                    "Ethics",
                    None,
                    "I understand the importance of confidentiality and ethical considerations in legal technology.",
                ),
                likert(
                    "psych-6",
                    "psychometric",
                    "Communication",
                    None,
                    "I enjoy explaining complex technical concepts to non-technical stakeholders.",
                ),
            ],
        },
        Section {
            id: "technical".to_string(),
            title: "Technical & Domain Knowledge".to_string(),
            description: "Evaluating your current technical skills and legal domain knowledge.".to_string(),
            track: ScoringTrack::Technical,
            questions: vec![
                choice(
                    "tech-1",
                    QuestionKind::MultipleChoice,
                    "technical",
                    "Legal Knowledge",
                    None,
                    "What is e-discovery in the legal context?",
                    [
                        "The process of digitizing physical legal documents",
                        "Electronic identification, collection, and production of electronically stored information",
                        "A method for encrypting sensitive legal data",
                        "A system for scheduling legal proceedings",
                    ],
                    1,
                ),
                choice(
                    "tech-2",
                    QuestionKind::MultipleChoice,
                    "technical",
                    "Legal Knowledge",
                    None,
                    "Due diligence in legal tech typically refers to:",
                    [
                        "Regular system maintenance and updates",
                        "Investigation and evaluation process for legal transactions",
                        "Training legal staff on new technology",
                        "Compliance with data protection regulations",
                    ],
                    1,
                ),
                choice(
                    "tech-3",
                    QuestionKind::MultipleChoice,
                    "technical",
                    "Tech Concepts",
                    None,
                    "What is an API in the context of legal software?",
                    [
                        "A security protocol for legal documents",
                        "An interface that allows different software systems to communicate",
                        "A type of legal contract template",
                        "A method for backing up legal data",
                    ],
                    1,
                ),
                choice(
                    "tech-4",
                    QuestionKind::MultipleChoice,
                    "technical",
                    "Legal Tech Tools",
                    None,
                    "CLM in legal technology stands for:",
                    [
                        "Client Lifecycle Management",
                        "Contract Lifecycle Management",
                        "Case Law Management",
                        "Compliance and Legal Monitoring",
                    ],
                    1,
                ),
                likert(
                    "tech-5",
                    "technical",
                    "Technical Skills",
                    None,
                    "I am comfortable working with databases and understanding how data flows between systems.",
                ),
                likert(
                    "tech-6",
                    "technical",
                    "Analytical Thinking",
                    None,
                    "I can analyze complex workflows and identify opportunities for automation.",
                ),
            ],
        },
        Section {
            id: "wiscar".to_string(),
            title: "WISCAR Framework Analysis".to_string(),
            description: "Comprehensive evaluation of your readiness across six critical dimensions.".to_string(),
            track: ScoringTrack::Wiscar,
            questions: vec![
                likert(
                    "wiscar-1",
                    "wiscar",
                    "Will",
                    Some(WiscarDimension::Will),
                    "I follow through on projects even when they become technically challenging.",
                ),
                likert(
                    "wiscar-2",
                    "wiscar",
                    "Will",
                    Some(WiscarDimension::Will),
                    "I am committed to continuous learning in both legal and technical domains.",
                ),
                likert(
                    "wiscar-3",
                    "wiscar",
                    "Interest",
                    Some(WiscarDimension::Interest),
                    "I find it exciting to solve technology problems in legal settings.",
                ),
                likert(
                    "wiscar-4",
                    "wiscar",
                    "Interest",
                    Some(WiscarDimension::Interest),
                    "I enjoy staying up-to-date with the latest legal technology trends.",
                ),
                likert(
                    "wiscar-5",
                    "wiscar",
                    "Skill",
                    Some(WiscarDimension::Skill),
                    "I have experience with project management and implementation processes.",
                ),
                likert(
                    "wiscar-6",
                    "wiscar",
                    "Skill",
                    Some(WiscarDimension::Skill),
                    "I can effectively train others on new software and systems.",
                ),
                likert(
                    "wiscar-7",
                    "wiscar",
                    "Cognitive",
                    Some(WiscarDimension::Cognitive),
                    "I can break down complex problems into manageable components.",
                ),
                likert(
                    "wiscar-8",
                    "wiscar",
                    "Ability",
                    Some(WiscarDimension::Ability),
                    "Feedback helps me improve my performance rapidly.",
                ),
                likert(
                    "wiscar-9",
                    "wiscar",
                    "Ability",
                    Some(WiscarDimension::Ability),
                    "I adapt quickly to new software tools and platforms.",
                ),
                choice(
                    "wiscar-10",
                    QuestionKind::SingleChoice,
                    "wiscar",
                    "Real World",
                    Some(WiscarDimension::RealWorld),
                    "Which activity would you find most engaging?",
                    [
                        "Testing and deploying new legal tech tools",
                        "Training legal staff on technology adoption",
                        "Analyzing legal processes for improvement opportunities",
                        "Managing technology vendor relationships",
                    ],
                    2,
                ),
            ],
        },
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn standard_guidance() -> CareerGuidance {
    CareerGuidance {
        career_profiles: vec![
            CareerProfile {
                role: "Legal Tech Consultant".to_string(),
                floor: 85,
                offset: 0,
            },
            CareerProfile {
                role: "Legal Operations Analyst".to_string(),
                floor: 75,
                offset: 10,
            },
            CareerProfile {
                role: "CLM Specialist".to_string(),
                floor: 70,
                offset: 15,
            },
            CareerProfile {
                role: "Legal Innovation Manager".to_string(),
                floor: 80,
                offset: 5,
            },
        ],
        recommended: TierGuidance {
            summary: "Excellent fit! You show strong potential for a career in Legal Tech Consulting.".to_string(),
            next_steps: strings(&[
                "Enroll in a CLM (Contract Lifecycle Management) bootcamp",
                "Learn legal workflow tools like HighQ or Ironclad",
                "Study e-discovery platforms and processes",
                "Get familiar with legal analytics tools",
            ]),
            alternative_paths: strings(&["Legal Innovation Manager", "Legal Solutions Architect"]),
        },
        consider: TierGuidance {
            summary: "Good potential with some development needed. Consider the recommended next steps.".to_string(),
            next_steps: strings(&[
                "Take an introductory course on legal technology fundamentals",
                "Shadow a legal operations team to see workflow automation in practice",
                "Build hands-on familiarity with a CLM or document automation tool",
                "Retake the assessment after three months of focused learning",
            ]),
            alternative_paths: strings(&[
                "Legal Operations Assistant",
                "Paralegal with Tech Focus",
                "Legal Support Specialist",
            ]),
        },
        not_recommended: TierGuidance {
            summary: "Consider alternative paths that better align with your current profile.".to_string(),
            next_steps: strings(&[
                "Explore adjacent roles through informational interviews",
                "Strengthen core legal process knowledge before specializing in technology",
                "Revisit the assessment once your interests or skills shift",
            ]),
            alternative_paths: strings(&[
                "Legal Operations Assistant",
                "Paralegal with Tech Focus",
                "Legal Support Specialist",
            ]),
        },
    }
}
