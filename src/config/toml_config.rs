use crate::domain::model::CalculatorMode;
use crate::utils::error::{FixtureError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    pub calculator: CalculatorSection,
    pub logging: LoggingSection,
    pub report: ReportSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorSection {
    pub mode: CalculatorMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Compact,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSection {
    pub format: ReportFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FixtureConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(FixtureError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string, after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| FixtureError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unknown variables are left untouched.
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn mode(&self) -> CalculatorMode {
        self.calculator.mode
    }

    pub fn log_level(&self) -> &str {
        &self.logging.level
    }
}

impl Validate for FixtureConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("logging.level", &self.logging.level)?;
        validate_one_of(
            "logging.level",
            &self.logging.level.to_ascii_lowercase(),
            &LOG_LEVELS,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[calculator]
mode = "checked"

[logging]
level = "debug"
format = "json"

[report]
format = "json"
"#;

        let config = FixtureConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.mode(), CalculatorMode::Checked);
        assert_eq!(config.log_level(), "debug");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.report.format, ReportFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = FixtureConfig::from_toml_str("").unwrap();
        assert_eq!(config, FixtureConfig::default());
        assert_eq!(config.mode(), CalculatorMode::Seeded);
        assert_eq!(config.log_level(), "info");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("FIXTURE_CALC_TEST_MODE", "checked");

        let toml_content = r#"
[calculator]
mode = "${FIXTURE_CALC_TEST_MODE}"
"#;

        let config = FixtureConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.mode(), CalculatorMode::Checked);

        std::env::remove_var("FIXTURE_CALC_TEST_MODE");
    }

    #[test]
    fn test_unknown_env_var_is_left_in_place() {
        let out = FixtureConfig::substitute_env_vars("level = \"${FIXTURE_CALC_SURELY_UNSET}\"");
        assert_eq!(out, "level = \"${FIXTURE_CALC_SURELY_UNSET}\"");
    }

    #[test]
    fn test_unknown_mode_is_a_parse_error() {
        let err = FixtureConfig::from_toml_str("[calculator]\nmode = \"lenient\"\n").unwrap_err();
        assert!(err.to_string().contains("TOML parsing error"));
    }

    #[test]
    fn test_config_validation_rejects_bad_level() {
        let config = FixtureConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("logging.level"));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[calculator]\nmode = \"checked\"\n")
            .unwrap();

        let config = FixtureConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.mode(), CalculatorMode::Checked);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = FixtureConfig::from_file("/nonexistent/fixture-calc.toml").unwrap_err();
        assert!(matches!(err, FixtureError::IoError(_)));
        assert_eq!(err.exit_code(), 3);
    }
}
