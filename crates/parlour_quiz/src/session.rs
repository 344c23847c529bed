//! A quiz in progress.

use crate::bank::QuestionBank;
use crate::question::Question;
use crate::report::ScoreReport;
use tracing::{debug, info, instrument};

/// Verdict on one answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerOutcome {
    /// 1-based number of the question answered.
    pub question_number: usize,
    /// Whether the answer was right.
    pub correct: bool,
}

/// Walks a [`QuestionBank`] one answer at a time.
#[derive(Debug, Clone)]
pub struct Quiz {
    bank: QuestionBank,
    index: usize,
    score: usize,
}

impl Quiz {
    /// Starts a quiz at the first question.
    #[instrument(skip(bank), fields(title = %bank.title()))]
    pub fn new(bank: QuestionBank) -> Self {
        info!(questions = bank.len(), "Quiz started");
        Self {
            bank,
            index: 0,
            score: 0,
        }
    }

    /// The bank being asked.
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// The question awaiting an answer, or `None` once finished.
    pub fn current_question(&self) -> Option<&Question> {
        self.bank.questions().get(self.index)
    }

    /// 1-based number of the current question.
    pub fn question_number(&self) -> usize {
        self.index + 1
    }

    /// Correct answers so far.
    pub fn score(&self) -> usize {
        self.score
    }

    /// Number of questions in the quiz.
    pub fn total(&self) -> usize {
        self.bank.len()
    }

    /// Whether every question has been answered.
    pub fn is_finished(&self) -> bool {
        self.index >= self.bank.len()
    }

    /// Judges `response` against the current question and moves on.
    ///
    /// Returns `None`, without changing anything, once the quiz is finished.
    #[instrument(skip(self, response), fields(question = self.index + 1))]
    pub fn answer(&mut self, response: &str) -> Option<AnswerOutcome> {
        let question = self.current_question()?;
        let correct = question.check(response);
        let outcome = AnswerOutcome {
            question_number: self.index + 1,
            correct,
        };

        if correct {
            self.score += 1;
        }
        self.index += 1;
        debug!(correct, score = self.score, "Answer judged");
        Some(outcome)
    }

    /// Score so far against the full total.
    #[instrument(skip(self))]
    pub fn report(&self) -> ScoreReport {
        ScoreReport {
            score: self.score,
            total: self.total(),
        }
    }
}

/// Whether the player agreed to start: `yes` in any case, nothing else.
#[instrument]
pub fn is_ready(response: &str) -> bool {
    response.to_lowercase() == "yes"
}
