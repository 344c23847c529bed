//! Quizzes run through the console runner with scripted answers.

use parlour::{BuiltinBank, Console, run_quiz};
use parlour_quiz::{QuestionBank, ScoreReport};

fn quiz(bank: QuestionBank, input: &str) -> (Option<ScoreReport>, String) {
    let mut console = Console::new(input.as_bytes(), Vec::new());
    let report = run_quiz(&mut console, bank).expect("quiz runs");
    let transcript = String::from_utf8(console.into_output()).expect("utf-8 output");
    (report, transcript)
}

#[test]
fn test_all_correct() {
    let (report, transcript) = quiz(QuestionBank::askpython(), "yes\npython\nyes\naskpython\n");
    assert_eq!(report, Some(ScoreReport { score: 3, total: 3 }));
    assert!(transcript.contains("Welcome to AskPython Quiz"));
    assert!(transcript.contains("Question 1: What is your favorite programming language? "));
    assert_eq!(transcript.matches("Correct!").count(), 3);
    assert!(transcript.contains("You attempted 3 questions correctly!"));
    assert!(transcript.contains("Marks obtained: 100.0"));
}

#[test]
fn test_all_wrong() {
    let (report, transcript) = quiz(QuestionBank::askpython(), "YES\nJava\nno\ngoogle\n");
    assert_eq!(report, Some(ScoreReport { score: 0, total: 3 }));
    assert_eq!(transcript.matches("Wrong Answer :(").count(), 3);
    assert!(transcript.contains("Marks obtained: 0.0"));
}

#[test]
fn test_declining_says_goodbye() {
    let (report, transcript) = quiz(QuestionBank::askpython(), "no\n");
    assert_eq!(report, None);
    assert!(transcript.contains("Goodbye!"));
    assert!(!transcript.contains("Question 1"));
}

#[test]
fn test_multiple_choice_lists_options() {
    let (report, transcript) = quiz(BuiltinBank::GeneralKnowledge.bank(), "yes\n3\nfour\n");
    assert_eq!(report, Some(ScoreReport { score: 1, total: 2 }));
    assert!(transcript.contains("3: Paris"));
    assert!(transcript.contains("Your answer (1-4): "));
    assert!(transcript.contains("Marks obtained: 50.0"));
}

#[test]
fn test_closed_input_scores_remaining_as_wrong() {
    let (report, transcript) = quiz(QuestionBank::askpython(), "yes\npython\n");
    assert_eq!(report, Some(ScoreReport { score: 1, total: 3 }));
    assert!(transcript.contains("Marks obtained: 33.3"));
}

#[test]
fn test_padded_answers_are_wrong() {
    let (report, transcript) = quiz(QuestionBank::askpython(), "yes\n python\nyes\naskpython \n");
    assert_eq!(report, Some(ScoreReport { score: 1, total: 3 }));
    assert_eq!(transcript.matches("Wrong Answer :(").count(), 2);
}

#[test]
fn test_padded_readiness_is_declined() {
    let (report, transcript) = quiz(QuestionBank::askpython(), " yes\n");
    assert_eq!(report, None);
    assert!(transcript.contains("Goodbye!"));
}
