//! Question banks: built-in sets and TOML files.

use crate::error::BankError;
use crate::question::{AnswerKey, Question};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// An ordered set of questions under a title.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct QuestionBank {
    /// Shown when the quiz starts.
    title: String,
    /// Asked in order.
    questions: Vec<Question>,
}

impl QuestionBank {
    /// Creates and validates a bank.
    #[instrument(skip(title, questions))]
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Result<Self, BankError> {
        let bank = Self {
            title: title.into(),
            questions,
        };
        bank.validate()?;
        Ok(bank)
    }

    /// The three free-text questions of the AskPython quiz.
    pub fn askpython() -> Self {
        Self {
            title: "AskPython Quiz".to_string(),
            questions: vec![
                Question::free_text("What is your favorite programming language?", "python"),
                Question::free_text("Do you follow any author on AskPython?", "yes"),
                Question::free_text(
                    "What is the name of your favorite website for learning Python?",
                    "askpython",
                ),
            ],
        }
    }

    /// Two multiple-choice general knowledge questions.
    pub fn general_knowledge() -> Self {
        Self {
            title: "General Knowledge Quiz".to_string(),
            questions: vec![
                Question::multiple_choice(
                    "What is the capital of France?",
                    ["New York", "London", "Paris", "Tokyo"],
                    2,
                ),
                Question::multiple_choice("Which is NOT a prime number?", ["2", "3", "4", "5"], 2),
            ],
        }
    }

    /// Parses and validates a bank from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, BankError> {
        let bank: Self = toml::from_str(content)
            .map_err(|e| BankError::new(format!("Failed to parse question bank: {}", e)))?;
        bank.validate()?;
        debug!(title = %bank.title, questions = bank.questions.len(), "Question bank parsed");
        Ok(bank)
    }

    /// Loads a bank from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BankError> {
        debug!("Loading question bank from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| BankError::new(format!("Failed to read question bank: {}", e)))?;
        let bank = Self::from_toml(&content)?;
        info!(title = %bank.title, "Question bank loaded");
        Ok(bank)
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the bank has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    fn validate(&self) -> Result<(), BankError> {
        if self.questions.is_empty() {
            return Err(BankError::new(format!("Bank '{}' has no questions", self.title)));
        }
        for (i, question) in self.questions.iter().enumerate() {
            if let AnswerKey::MultipleChoice {
                choices,
                answer_index,
            } = &question.key
            {
                if choices.is_empty() {
                    return Err(BankError::new(format!("Question {} has no choices", i + 1)));
                }
                if *answer_index >= choices.len() {
                    return Err(BankError::new(format!(
                        "Question {} answer_index {} is out of range for {} choices",
                        i + 1,
                        answer_index,
                        choices.len()
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::askpython()
    }
}
