//! Line-oriented console front-end for both games.
//!
//! The runners are generic over their input and output so the same code
//! drives a real terminal and an in-memory transcript.

use crate::config::{FirstPlayer, ParlourConfig};
use crate::contestants::{Computer, Contestant, Human, Prompt};
use crate::mode::GameMode;
use crate::orchestrator::{Match, MatchOutcome};
use anyhow::{Context, Result};
use derive_new::new;
use parlour_quiz::{QuestionBank, Quiz, ScoreReport, is_ready};
use parlour_tictactoe::Mark;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{BufRead, Write};
use tracing::{info, instrument};

/// A console made of a line reader and a writer.
#[derive(Debug, new)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R, W> Console<R, W> {
    /// Gives back the writer, e.g. to inspect a captured transcript.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompt for Console<R, W> {
    #[instrument(skip(self, question))]
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read input")?;
        if read == 0 {
            writeln!(self.output).context("Failed to write newline")?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    #[instrument(skip(self, message))]
    fn tell(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message).context("Failed to write message")
    }
}

/// Plays one game of tic-tac-toe in the given mode.
#[instrument(skip(console, config))]
pub fn run_tictactoe<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    mode: GameMode,
    config: &ParlourConfig,
) -> Result<MatchOutcome> {
    console.tell(&format!("--- Welcome to tic-tac-toe ({}) ---", mode.name()))?;

    let (player_x, player_o): (Box<dyn Contestant>, Box<dyn Contestant>) = match mode {
        GameMode::Single => {
            let rng = match config.seed() {
                Some(seed) => ChaCha8Rng::seed_from_u64(*seed),
                None => ChaCha8Rng::from_entropy(),
            };
            match config.first_player() {
                FirstPlayer::Human => (
                    Box::new(Human::new("Player")),
                    Box::new(Computer::new("Computer", Mark::O, rng)),
                ),
                FirstPlayer::Computer => (
                    Box::new(Computer::new("Computer", Mark::X, rng)),
                    Box::new(Human::new("Player")),
                ),
            }
        }
        GameMode::Multi => (
            Box::new(Human::new(config.player_names().x().clone())),
            Box::new(Human::new(config.player_names().o().clone())),
        ),
    };

    let mut game = Match::new(player_x, player_o);
    console.tell(&format!(
        "{} : X    {} : O",
        game.name_of(Mark::X),
        game.name_of(Mark::O)
    ))?;
    let outcome = game.run(console)?;
    info!(?outcome, moves = game.engine().move_count(), "Tic-tac-toe session over");
    Ok(outcome)
}

/// Runs a quiz, returning `None` when the player declines to start.
#[instrument(skip(console, bank), fields(title = %bank.title()))]
pub fn run_quiz<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    bank: QuestionBank,
) -> Result<Option<ScoreReport>> {
    let mut quiz = Quiz::new(bank);
    console.tell(&format!("Welcome to {}", quiz.bank().title()))?;
    let answer = console.ask("Are you ready to play the Quiz? (yes/no): ")?;
    if !answer.as_deref().is_some_and(is_ready) {
        console.tell("Goodbye!")?;
        info!("Player declined the quiz");
        return Ok(None);
    }
    console.tell("Let's start the quiz!")?;

    while let Some(question) = quiz.current_question() {
        let mut text = format!("Question {}: {}", quiz.question_number(), question.prompt);
        for (i, choice) in question.choices().iter().enumerate() {
            text.push_str(&format!("\n{}: {}", i + 1, choice));
        }
        if question.choices().is_empty() {
            text.push(' ');
        } else {
            text.push_str(&format!("\nYour answer (1-{}): ", question.choices().len()));
        }

        // A closed input still has to move the quiz on; it counts as a blank answer.
        let response = console.ask(&text)?.unwrap_or_default();
        let correct = quiz.answer(&response).is_some_and(|outcome| outcome.correct);
        console.tell(if correct { "Correct!" } else { "Wrong Answer :(" })?;
    }

    let report = quiz.report();
    console.tell(&format!(
        "Thank you for playing this small quiz game. You attempted {} questions correctly!",
        report.score
    ))?;
    console.tell(&format!("Marks obtained: {:.1}", report.percentage()))?;
    info!(%report, "Quiz finished");
    Ok(Some(report))
}
