use std::io::{BufRead, Write};

use ansi_term::Colour::{Cyan, Green, Red, Yellow};

use armlab_core::{
    evaluate::Outcome,
    quiz::{Quiz, Stage},
    Config,
};

/// Read one trimmed line, `None` on end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> std::io::Result<Option<String>> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

/// Run the quiz until it is completed or the input ends.
///
/// Returns whether the quiz was completed.
pub(crate) fn run<R: BufRead, W: Write>(
    config: &Config,
    mut input: R,
    mut output: W,
) -> anyhow::Result<bool> {
    let mut quiz = Quiz::new(config.arm, config.quiz.clone());

    writeln!(
        output,
        "{}",
        Cyan.bold()
            .paint("Compute the end effector position for the given joint angles.")
    )?;
    writeln!(
        output,
        "Arm {}, answer within {} units.",
        config.arm, config.quiz.tolerance
    )?;

    quiz.start_session();

    while let Stage::Question(stage) = quiz.stage() {
        let Some(question) = quiz.current_question().copied() else {
            break;
        };

        writeln!(output)?;
        writeln!(
            output,
            "{} [{}] θ1 = {}°, θ2 = {}°",
            Yellow.bold().paint(format!("Stage {}/{}", stage, quiz.total_stages())),
            quiz.stage().progress(),
            question.theta1(),
            question.theta2()
        )?;

        let Some(x) = prompt(&mut input, &mut output, "X: ")? else {
            return Ok(false);
        };
        let Some(y) = prompt(&mut input, &mut output, "Y: ")? else {
            return Ok(false);
        };

        match quiz.submit_answer(stage, &x, &y)? {
            Outcome::Correct(verdict) => {
                let expected = quiz.expected_answer().unwrap_or(question.correct());

                writeln!(
                    output,
                    "{} Actual position: ({:.2}, {:.2}), error {:.2}",
                    Green.bold().paint("CORRECT!"),
                    expected.x,
                    expected.y,
                    verdict.error_distance
                )?;

                quiz.advance_if_correct(stage)?;
            }
            Outcome::Incorrect(verdict) => {
                writeln!(
                    output,
                    "{} Error: {:.2}",
                    Red.bold().paint("Incorrect!"),
                    verdict.error_distance
                )?;
            }
            Outcome::InvalidInput => {
                writeln!(output, "{}", Red.bold().paint("Please enter valid numbers!"))?;
            }
        }
    }

    writeln!(output)?;
    writeln!(
        output,
        "{} {}",
        Green.bold().paint(quiz.stage().progress()),
        quiz.session_stats()
    )?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with(input: &str) -> (bool, String) {
        let mut output = Vec::new();
        let completed = run(&Config::default(), input.as_bytes(), &mut output).unwrap();

        (completed, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_run_complete() {
        let (completed, output) = run_with("x\n1\n95\n140\n155.88\n-10\n56.57\n156.57\n");

        assert!(completed);
        assert!(output.contains("Please enter valid numbers!"));
        assert!(output.contains("ESCAPED!"));
        assert!(output.contains("Attempts: 4"));
    }

    #[test]
    fn test_run_incorrect_then_eof() {
        let (completed, output) = run_with("95\n130\n");

        assert!(!completed);
        assert!(output.contains("Incorrect!"));
        assert!(!output.contains("ESCAPED!"));
    }
}
