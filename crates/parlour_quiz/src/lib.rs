//! Pure quiz logic.
//!
//! A [`QuestionBank`] holds the questions, a [`Quiz`] walks through them one
//! answer at a time, and a [`ScoreReport`] sums up the run. Nothing here
//! prompts or prints; the caller decides how questions reach the player.
//!
//! ```
//! use parlour_quiz::{QuestionBank, score_answers};
//!
//! let report = score_answers(QuestionBank::askpython(), ["Python", "yes", "AskPython"]);
//! assert_eq!(report.to_string(), "3/3 (100.0%)");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod bank;
mod error;
mod question;
mod report;
mod session;

pub use bank::QuestionBank;
pub use error::BankError;
pub use question::{AnswerKey, Question};
pub use report::{ScoreReport, score_answers};
pub use session::{AnswerOutcome, Quiz, is_ready};
