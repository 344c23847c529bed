//! Final scoring.

use crate::bank::QuestionBank;
use crate::session::Quiz;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Correct answers out of questions asked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Correct answers.
    pub score: usize,
    /// Questions in the bank.
    pub total: usize,
}

impl ScoreReport {
    /// Score as a percentage of the total; `0.0` for an empty quiz.
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.score as f64 / self.total as f64 * 100.0
        }
    }

    /// Whether every question was answered correctly.
    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.score == self.total
    }
}

/// `score/total (pct%)` with one decimal place.
impl std::fmt::Display for ScoreReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{} ({:.1}%)", self.score, self.total, self.percentage())
    }
}

/// Runs a whole quiz from a list of responses.
///
/// Missing responses count as wrong; extra ones are ignored.
#[instrument(skip(bank, answers))]
pub fn score_answers<I, S>(bank: QuestionBank, answers: I) -> ScoreReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut quiz = Quiz::new(bank);
    for answer in answers {
        if quiz.answer(answer.as_ref()).is_none() {
            break;
        }
    }
    ScoreReport {
        score: quiz.score(),
        total: quiz.total(),
    }
}
