use crate::{error::InputError, geometry::Point};

/// Judgment of a single answer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Verdict {
    /// Whether the answer is within tolerance.
    pub correct: bool,
    /// Euclidean distance between the answer and the expected point.
    pub error_distance: f64,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (error: {:.2})",
            if self.correct { "Correct" } else { "Incorrect" },
            self.error_distance
        )
    }
}

/// Compare an answer against the expected point.
///
/// Both points must be in the same unit, no conversion happens here. The
/// tolerance boundary is inclusive.
pub fn evaluate(user: Point, expected: Point, tolerance: f64) -> Verdict {
    let error_distance = nalgebra::distance(&user, &expected);
    let correct = error_distance <= tolerance;

    log::trace!(
        "Evaluate ({:.4}, {:.4}) against ({:.4}, {:.4}): error {:.4} tolerance {:.4}",
        user.x,
        user.y,
        expected.x,
        expected.y,
        error_distance,
        tolerance
    );

    Verdict {
        correct,
        error_distance,
    }
}

/// Outcome of a submission including input validation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Outcome {
    /// Answer within tolerance.
    Correct(Verdict),
    /// Answer outside tolerance.
    Incorrect(Verdict),
    /// Answer was not a pair of numbers, it never reached the evaluator.
    InvalidInput,
}

impl Outcome {
    #[inline]
    pub fn is_correct(&self) -> bool {
        matches!(self, Outcome::Correct(_))
    }

    /// Verdict of the evaluator, if the input was valid.
    pub fn verdict(&self) -> Option<&Verdict> {
        match self {
            Outcome::Correct(verdict) | Outcome::Incorrect(verdict) => Some(verdict),
            Outcome::InvalidInput => None,
        }
    }
}

impl From<Verdict> for Outcome {
    fn from(verdict: Verdict) -> Self {
        if verdict.correct {
            Outcome::Correct(verdict)
        } else {
            Outcome::Incorrect(verdict)
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Correct(verdict) | Outcome::Incorrect(verdict) => write!(f, "{}", verdict),
            Outcome::InvalidInput => write!(f, "Invalid input"),
        }
    }
}

/// Parse a user entered coordinate.
///
/// Surrounding whitespace is ignored. Only finite numbers are accepted.
pub fn parse_coordinate(input: &str) -> Result<f64, InputError> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError {
            input: input.to_string(),
        }),
    }
}
