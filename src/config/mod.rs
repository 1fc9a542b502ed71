use crate::assessment::{AnswerPolicy, ScoringConfig};
use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub assessment: AssessmentSettings,
    pub scoring: ScoringConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let catalog_path = env::var("ASSESSMENT_CATALOG_PATH")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        let answer_policy = match env::var("ASSESSMENT_ANSWER_POLICY") {
            Ok(raw) => parse_policy(&raw)?,
            Err(_) => AnswerPolicy::default(),
        };

        let defaults = ScoringConfig::default();
        let scoring = ScoringConfig {
            recommend_threshold: percent_var(
                "ASSESSMENT_RECOMMEND_THRESHOLD",
                defaults.recommend_threshold,
            )?,
            consider_threshold: percent_var(
                "ASSESSMENT_CONSIDER_THRESHOLD",
                defaults.consider_threshold,
            )?,
            partial_credit: percent_var("ASSESSMENT_PARTIAL_CREDIT", defaults.partial_credit)?,
        };

        if scoring.consider_threshold > scoring.recommend_threshold {
            return Err(ConfigError::ThresholdOrder {
                consider: scoring.consider_threshold,
                recommend: scoring.recommend_threshold,
            });
        }

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Self {
            environment,
            assessment: AssessmentSettings {
                catalog_path,
                answer_policy,
            },
            scoring,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn parse_policy(raw: &str) -> Result<AnswerPolicy, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "strict" => Ok(AnswerPolicy::Strict),
        "lenient" => Ok(AnswerPolicy::Lenient),
        _ => Err(ConfigError::InvalidAnswerPolicy(raw.to_string())),
    }
}

fn percent_var(name: &'static str, default: u8) -> Result<u8, ConfigError> {
    let Ok(raw) = env::var(name) else {
        return Ok(default);
    };

    raw.trim()
        .parse::<u8>()
        .ok()
        .filter(|value| *value <= 100)
        .ok_or(ConfigError::InvalidPercentage { name, value: raw })
}

/// Catalog source and answer handling for new sessions.
#[derive(Debug, Clone, Default)]
pub struct AssessmentSettings {
    pub catalog_path: Option<PathBuf>,
    pub answer_policy: AnswerPolicy,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidAnswerPolicy(String),
    InvalidPercentage { name: &'static str, value: String },
    ThresholdOrder { consider: u8, recommend: u8 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidAnswerPolicy(value) => write!(
                f,
                "ASSESSMENT_ANSWER_POLICY must be 'strict' or 'lenient', got '{value}'"
            ),
            ConfigError::InvalidPercentage { name, value } => write!(
                f,
                "{name} must be a whole number between 0 and 100, got '{value}'"
            ),
            ConfigError::ThresholdOrder { consider, recommend } => write!(
                f,
                "ASSESSMENT_CONSIDER_THRESHOLD ({consider}) must not exceed ASSESSMENT_RECOMMEND_THRESHOLD ({recommend})"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("ASSESSMENT_CATALOG_PATH");
        env::remove_var("ASSESSMENT_ANSWER_POLICY");
        env::remove_var("ASSESSMENT_RECOMMEND_THRESHOLD");
        env::remove_var("ASSESSMENT_CONSIDER_THRESHOLD");
        env::remove_var("ASSESSMENT_PARTIAL_CREDIT");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.assessment.catalog_path, None);
        assert_eq!(config.assessment.answer_policy, AnswerPolicy::Strict);
        assert_eq!(config.scoring, ScoringConfig::default());
        assert_eq!(config.telemetry.log_level, "warn");
    }

    #[test]
    fn reads_policy_thresholds_and_catalog_path() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "ci");
        env::set_var("ASSESSMENT_ANSWER_POLICY", " Lenient ");
        env::set_var("ASSESSMENT_RECOMMEND_THRESHOLD", "85");
        env::set_var("ASSESSMENT_CONSIDER_THRESHOLD", "50");
        env::set_var("ASSESSMENT_PARTIAL_CREDIT", "0");
        env::set_var("ASSESSMENT_CATALOG_PATH", "catalogs/legal-tech.json");

        let config = AppConfig::load().expect("config loads");
        reset_env();

        assert_eq!(config.environment, AppEnvironment::Test);
        assert_eq!(config.assessment.answer_policy, AnswerPolicy::Lenient);
        assert_eq!(config.scoring.recommend_threshold, 85);
        assert_eq!(config.scoring.consider_threshold, 50);
        assert_eq!(config.scoring.partial_credit, 0);
        assert_eq!(
            config.assessment.catalog_path,
            Some(PathBuf::from("catalogs/legal-tech.json"))
        );
    }

    #[test]
    fn rejects_out_of_range_and_inverted_thresholds() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ASSESSMENT_PARTIAL_CREDIT", "140");
        let err = AppConfig::load().expect_err("partial credit above 100 rejected");
        assert!(matches!(
            err,
            ConfigError::InvalidPercentage {
                name: "ASSESSMENT_PARTIAL_CREDIT",
                ..
            }
        ));

        reset_env();
        env::set_var("ASSESSMENT_CONSIDER_THRESHOLD", "90");
        let err = AppConfig::load().expect_err("inverted thresholds rejected");
        reset_env();
        assert!(matches!(
            err,
            ConfigError::ThresholdOrder {
                consider: 90,
                recommend: 80
            }
        ));
    }

    #[test]
    fn rejects_unknown_answer_policy() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("ASSESSMENT_ANSWER_POLICY", "relaxed");
        let err = AppConfig::load().expect_err("unknown policy rejected");
        reset_env();
        assert!(err.to_string().contains("'relaxed'"));
    }
}
