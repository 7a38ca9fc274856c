use std::time::{Duration, Instant};

use crate::{
    algorithm::ForwardKinematics,
    config::QuizConfig,
    error::QuizError,
    evaluate::{evaluate, parse_coordinate, Outcome},
    geometry::{ArmConfig, JointAngles, Point},
};

/// Time source for session statistics.
#[derive(Clone, Copy, Debug)]
pub enum Clock {
    /// Monotonic wall clock, anchored at construction.
    Monotonic(Instant),
    /// Manually advanced clock.
    Manual(Duration),
}

impl Clock {
    pub fn monotonic() -> Self {
        Self::Monotonic(Instant::now())
    }

    pub fn manual() -> Self {
        Self::Manual(Duration::ZERO)
    }

    /// Time since the clock epoch.
    pub fn now(&self) -> Duration {
        match self {
            Clock::Monotonic(epoch) => epoch.elapsed(),
            Clock::Manual(now) => *now,
        }
    }

    /// Advance a manual clock. Has no effect on a monotonic clock.
    pub fn advance(&mut self, delta: Duration) {
        if let Clock::Manual(now) = self {
            *now += delta;
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::monotonic()
    }
}

/// Question of a single stage.
///
/// The expected end effector position is computed once when the stage is
/// entered and never recomputed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Question {
    angles: JointAngles,
    correct: Point,
}

impl Question {
    fn new(angles: JointAngles, fk: &ForwardKinematics) -> Self {
        Self {
            angles,
            correct: fk.solve(angles),
        }
    }

    #[inline]
    pub fn angles(&self) -> JointAngles {
        self.angles
    }

    #[inline]
    pub fn theta1(&self) -> f64 {
        self.angles.theta1
    }

    #[inline]
    pub fn theta2(&self) -> f64 {
        self.angles.theta2
    }

    /// End effector position in arm units.
    #[inline]
    pub fn correct(&self) -> Point {
        self.correct
    }
}

/// Quiz progression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    /// No session started.
    Locked,
    /// Working on question `n`, counted from 1.
    Question(usize),
    /// All questions answered.
    Completed,
}

impl Stage {
    /// Number of stages passed so far.
    pub fn passed(&self, total: usize) -> usize {
        match self {
            Stage::Locked => 0,
            Stage::Question(n) => n.saturating_sub(1),
            Stage::Completed => total,
        }
    }

    /// Progress banner.
    pub fn progress(&self) -> String {
        match self {
            Stage::Locked | Stage::Question(0 | 1) => "SYSTEM LOCKED".to_string(),
            Stage::Question(n) => format!("LEVEL {} COMPLETE", n - 1),
            Stage::Completed => "ESCAPED!".to_string(),
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::Locked => write!(f, "Locked"),
            Stage::Question(n) => write!(f, "Stage {}", n),
            Stage::Completed => write!(f, "Completed"),
        }
    }
}

/// Session statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionStats {
    /// Time since the session started, frozen on completion.
    pub elapsed: Duration,
    /// Number of submissions, including invalid ones.
    pub total_attempts: u32,
}

impl SessionStats {
    #[inline]
    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed.as_secs()
    }
}

impl std::fmt::Display for SessionStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let seconds = self.elapsed_seconds();

        write!(
            f,
            "Time: {}:{:02} Attempts: {}",
            seconds / 60,
            seconds % 60,
            self.total_attempts
        )
    }
}

/// Staged forward kinematics quiz.
pub struct Quiz {
    fk: ForwardKinematics,
    config: QuizConfig,
    clock: Clock,
    stage: Stage,
    question: Option<Question>,
    /// Last submission for the current stage was correct.
    passed: bool,
    total_attempts: u32,
    started_at: Option<Duration>,
    completed_at: Option<Duration>,
}

impl Quiz {
    /// Construct a new quiz in the locked state.
    pub fn new(arm: ArmConfig, config: QuizConfig) -> Self {
        Self {
            fk: ForwardKinematics::from(&arm),
            config,
            clock: Clock::default(),
            stage: Stage::Locked,
            question: None,
            passed: false,
            total_attempts: 0,
            started_at: None,
            completed_at: None,
        }
    }

    /// Replace the time source.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    #[inline]
    pub fn clock_mut(&mut self) -> &mut Clock {
        &mut self.clock
    }

    #[inline]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[inline]
    pub fn total_stages(&self) -> usize {
        self.config.questions.len()
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.stage == Stage::Completed
    }

    /// Start a fresh session at the first stage.
    ///
    /// Any previous progress and attempts are discarded.
    pub fn start_session(&mut self) {
        self.total_attempts = 0;
        self.started_at = Some(self.clock.now());
        self.completed_at = None;

        log::debug!("Session started");

        self.enter_stage(1);
    }

    /// Alias of [`Quiz::start_session`].
    #[inline]
    pub fn restart(&mut self) {
        self.start_session();
    }

    fn enter_stage(&mut self, n: usize) {
        self.passed = false;

        match self.config.questions.get(n - 1) {
            Some(&angles) => {
                let question = Question::new(angles, &self.fk);

                log::info!(
                    "Entering stage {} of {}: {}",
                    n,
                    self.total_stages(),
                    question.angles()
                );

                self.question = Some(question);
                self.stage = Stage::Question(n);
            }
            None => {
                self.question = None;
                self.stage = Stage::Completed;
                self.completed_at = Some(self.clock.now());

                log::info!("All stages completed in {}", self.session_stats());
            }
        }
    }

    fn active_stage(&self, stage: usize) -> Result<usize, QuizError> {
        match self.stage {
            Stage::Locked => Err(QuizError::Locked),
            Stage::Completed => Err(QuizError::Completed),
            Stage::Question(current) if current != stage => Err(QuizError::StageMismatch {
                submitted: stage,
                current,
            }),
            Stage::Question(current) => Ok(current),
        }
    }

    /// Question of the current stage.
    #[inline]
    pub fn current_question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    /// Expected answer of the current stage in answer units.
    pub fn expected_answer(&self) -> Option<Point> {
        self.question
            .as_ref()
            .map(|question| question.correct() * self.config.unit_scale)
    }

    /// Submit a raw answer for the given stage.
    ///
    /// Every call against the active stage counts as an attempt, including
    /// input that is not a number. Such input is reported as
    /// [`Outcome::InvalidInput`] and never reaches the evaluator.
    pub fn submit_answer(&mut self, stage: usize, x: &str, y: &str) -> Result<Outcome, QuizError> {
        self.active_stage(stage)?;

        match (parse_coordinate(x), parse_coordinate(y)) {
            (Ok(x), Ok(y)) => self.submit_point(stage, Point::new(x, y)),
            (Err(e), _) | (_, Err(e)) => {
                self.total_attempts += 1;
                self.passed = false;

                log::debug!("Stage {} rejected answer: {}", stage, e);

                Ok(Outcome::InvalidInput)
            }
        }
    }

    /// Submit an answer in answer units for the given stage.
    pub fn submit_point(&mut self, stage: usize, answer: Point) -> Result<Outcome, QuizError> {
        self.active_stage(stage)?;

        let expected = self.expected_answer().ok_or(QuizError::Locked)?;

        self.total_attempts += 1;

        let verdict = evaluate(answer, expected, self.config.tolerance);
        self.passed = verdict.correct;

        log::debug!(
            "Stage {} attempt {}: {}",
            stage,
            self.total_attempts,
            verdict
        );

        Ok(verdict.into())
    }

    /// Advance to the next stage if the last submission for `stage` was
    /// correct.
    ///
    /// Returns whether the stage advanced.
    pub fn advance_if_correct(&mut self, stage: usize) -> Result<bool, QuizError> {
        let current = self.active_stage(stage)?;

        if !self.passed {
            return Ok(false);
        }

        self.enter_stage(current + 1);

        Ok(true)
    }

    /// Elapsed time and attempts of the session.
    pub fn session_stats(&self) -> SessionStats {
        let elapsed = match self.started_at {
            Some(started_at) => self
                .completed_at
                .unwrap_or_else(|| self.clock.now())
                .saturating_sub(started_at),
            None => Duration::ZERO,
        };

        SessionStats {
            elapsed,
            total_attempts: self.total_attempts,
        }
    }
}

impl Default for Quiz {
    fn default() -> Self {
        Self::new(ArmConfig::quiz(), QuizConfig::default())
    }
}
