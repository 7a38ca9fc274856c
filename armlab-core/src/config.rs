use std::path::Path;

use serde::{de::DeserializeOwned, Deserialize, Deserializer};

use crate::{
    error::ConfigError,
    geometry::{ArmConfig, JointAngles},
};

/// Load and deserialize a TOML file.
pub fn from_file<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T, ConfigError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(toml::from_str(&contents)?)
}

fn deserialize_questions<'de, D>(deserializer: D) -> Result<Vec<JointAngles>, D::Error>
where
    D: Deserializer<'de>,
{
    let pairs = Vec::<[f64; 2]>::deserialize(deserializer)?;
    Ok(pairs.into_iter().map(JointAngles::from).collect())
}

/// Quiz configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct QuizConfig {
    /// Maximum answer error, in answer units.
    pub tolerance: f64,
    /// Factor from arm units to answer units.
    pub unit_scale: f64,
    /// Ordered joint angles, one per stage.
    #[serde(deserialize_with = "deserialize_questions")]
    pub questions: Vec<JointAngles>,
}

impl QuizConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(ConfigError::InvalidTolerance(self.tolerance));
        }
        if !self.unit_scale.is_finite() || self.unit_scale <= 0.0 {
            return Err(ConfigError::InvalidUnitScale(self.unit_scale));
        }
        if self.questions.is_empty() {
            return Err(ConfigError::NoQuestions);
        }

        Ok(())
    }
}

impl Default for QuizConfig {
    fn default() -> Self {
        use crate::consts::*;

        Self {
            tolerance: DEFAULT_TOLERANCE,
            unit_scale: DEFAULT_UNIT_SCALE,
            questions: QUIZ_QUESTIONS.iter().map(|&q| q.into()).collect(),
        }
    }
}

/// Armlab configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Arm link lengths.
    pub arm: ArmConfig,
    /// Quiz settings.
    pub quiz: QuizConfig,
}

impl Config {
    /// Load the configuration from file and validate it.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config: Self = from_file(path)?;
        config.quiz.validate()?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.arm, ArmConfig::quiz());
        assert_eq!(config.quiz.tolerance, 15.0);
        assert_eq!(config.quiz.unit_scale, 100.0);
        assert_eq!(
            config.quiz.questions,
            vec![
                JointAngles::new(45.0, 30.0),
                JointAngles::new(-30.0, 60.0),
                JointAngles::new(90.0, -45.0),
            ]
        );
        assert!(config.quiz.validate().is_ok());
    }

    #[test]
    fn test_parse_config() {
        let config: Config = toml::from_str(
            r#"
            [arm]
            link1 = 150.0
            link2 = 120.0

            [quiz]
            tolerance = 5.0
            questions = [[10.0, 20.0], [-5.0, 90.0]]
            "#,
        )
        .unwrap();

        assert_eq!(config.arm, ArmConfig::visualizer());
        assert_eq!(config.quiz.tolerance, 5.0);
        assert_eq!(config.quiz.unit_scale, 100.0);
        assert_eq!(config.quiz.questions.len(), 2);
        assert_eq!(config.quiz.questions[1], JointAngles::new(-5.0, 90.0));
    }

    #[test]
    fn test_parse_partial_config() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());

        let config: Config = toml::from_str("[quiz]\ntolerance = 2.5\n").unwrap();
        assert_eq!(config.arm, ArmConfig::quiz());
        assert_eq!(config.quiz.tolerance, 2.5);
        assert_eq!(config.quiz.questions.len(), 3);
    }

    #[test]
    fn test_parse_config_invalid_length() {
        let result = toml::from_str::<Config>("[arm]\nlink1 = 0.0\nlink2 = 0.8\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_quiz_config() {
        let mut config = QuizConfig::default();
        config.tolerance = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidTolerance(_))
        ));

        let mut config = QuizConfig::default();
        config.unit_scale = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidUnitScale(_))
        ));

        let mut config = QuizConfig::default();
        config.questions.clear();
        assert!(matches!(config.validate(), Err(ConfigError::NoQuestions)));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            Config::load("/nonexistent/armlab.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
