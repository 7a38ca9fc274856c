use thiserror::Error;

/// Arm or quiz configuration error.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("link {link} length must be finite and strictly positive, got {length}")]
    InvalidLength { link: u8, length: f64 },
    #[error("tolerance must be finite and non-negative, got {0}")]
    InvalidTolerance(f64),
    #[error("unit scale must be finite and strictly positive, got {0}")]
    InvalidUnitScale(f64),
    #[error("quiz requires at least one question")]
    NoQuestions,
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// User entered coordinate could not be used as a number.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid numeric input: '{input}'")]
pub struct InputError {
    pub input: String,
}

/// Quiz driver misuse.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum QuizError {
    #[error("quiz is locked, start a session first")]
    Locked,
    #[error("quiz is already completed")]
    Completed,
    #[error("submission for stage {submitted} while at stage {current}")]
    StageMismatch { submitted: usize, current: usize },
}
