//! Questions and how their answers are checked.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How a response to a question is judged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnswerKey {
    /// A typed answer, compared case-insensitively and without trimming.
    FreeText {
        /// The expected answer.
        expected: String,
    },
    /// Pick one of several options by its 1-based number.
    MultipleChoice {
        /// Options in display order.
        choices: Vec<String>,
        /// 0-based index of the correct option.
        answer_index: usize,
    },
}

/// A single quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Text shown to the player.
    pub prompt: String,
    /// How to judge the response.
    #[serde(flatten)]
    pub key: AnswerKey,
}

impl Question {
    /// A free-text question.
    pub fn free_text(prompt: impl Into<String>, expected: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            key: AnswerKey::FreeText {
                expected: expected.into(),
            },
        }
    }

    /// A multiple-choice question.
    pub fn multiple_choice<S: Into<String>>(
        prompt: impl Into<String>,
        choices: impl IntoIterator<Item = S>,
        answer_index: usize,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            key: AnswerKey::MultipleChoice {
                choices: choices.into_iter().map(Into::into).collect(),
                answer_index,
            },
        }
    }

    /// Options to list under the prompt; empty for free-text questions.
    pub fn choices(&self) -> &[String] {
        match &self.key {
            AnswerKey::FreeText { .. } => &[],
            AnswerKey::MultipleChoice { choices, .. } => choices,
        }
    }

    /// Whether `response` is correct.
    ///
    /// Free text must match exactly apart from case; surrounding spaces make
    /// it wrong. Never fails: anything unrecognised, including a choice
    /// number that does not parse, is simply wrong.
    #[instrument(skip(self, response), fields(prompt = %self.prompt))]
    pub fn check(&self, response: &str) -> bool {
        match &self.key {
            AnswerKey::FreeText { expected } => response.to_lowercase() == expected.to_lowercase(),
            AnswerKey::MultipleChoice { answer_index, .. } => response
                .trim()
                .parse::<usize>()
                .is_ok_and(|n| n.checked_sub(1) == Some(*answer_index)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_text_ignores_case_only() {
        let q = Question::free_text("Favourite language?", "python");
        assert!(q.check("python"));
        assert!(q.check("PyThOn"));
        assert!(!q.check(" python"));
        assert!(!q.check("Python "));
        assert!(!q.check("Java"));
        assert!(!q.check(""));
    }

    #[test]
    fn test_multiple_choice_is_one_based() {
        let q = Question::multiple_choice("Capital of France?", ["New York", "London", "Paris", "Tokyo"], 2);
        assert!(q.check("3"));
        assert!(!q.check("2"));
        assert!(!q.check("0"));
        assert!(!q.check("Paris"));
        assert!(!q.check("-1"));
        assert_eq!(q.choices().len(), 4);
    }

    #[test]
    fn test_free_text_has_no_choices() {
        assert!(Question::free_text("?", "yes").choices().is_empty());
    }
}
