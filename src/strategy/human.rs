use alloc::string::String;
use alloc::vec::Vec;
use std::io::{self, BufRead, Stdin, Stdout, Write};

use crate::cardset::CardSet;
use crate::combination::{CardCombination, identify_combination};
use crate::error::InputError;
use crate::play::Play;

use super::{Strategy, TurnContext};

/// Parses one line of human input into a play that is legal right now.
///
/// The line is either `pass` or hand indices separated by spaces.
///
/// # Errors
///
/// Returns an error describing why the input cannot be played.
pub fn parse_play(line: &str, ctx: &TurnContext<'_>) -> Result<Play, InputError> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("pass") {
        let play = Play::pass();
        ctx.hand.check_play(ctx.reference, ctx.opening, &play)?;
        return Ok(play);
    }

    let cards = ctx.hand.cards();
    let mut seen = CardSet::EMPTY;
    let mut selected = Vec::new();
    for token in line.split_whitespace() {
        let index: usize = token.parse().map_err(|_| InputError::NotANumber)?;
        let card = *cards.get(index).ok_or(InputError::IndexOutOfRange {
            index,
            len: cards.len(),
        })?;
        if !seen.insert(card) {
            return Err(InputError::DuplicateIndex(index));
        }
        selected.push(card);
    }
    if selected.is_empty() {
        return Err(InputError::Empty);
    }

    let combination = identify_combination(&selected);
    if combination == CardCombination::Invalid {
        return Err(InputError::Unclassifiable);
    }
    let play = Play::new(selected, combination).map_err(|e| InputError::Rejected(e.into()))?;
    ctx.hand.check_play(ctx.reference, ctx.opening, &play)?;
    Ok(play)
}

/// Prompts a person for each play over a text stream.
///
/// Blocks until a legal play or pass is entered. On end of input it passes,
/// or leads the first candidate when passing is not allowed.
#[derive(Debug)]
pub struct HumanStrategy<R, W> {
    input: R,
    output: W,
}

impl HumanStrategy<io::StdinLock<'static>, Stdout> {
    /// A human at the terminal.
    #[must_use]
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> HumanStrategy<R, W> {
    /// Reads choices from `input` and writes prompts to `output`.
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn show_table(&mut self, ctx: &TurnContext<'_>) -> io::Result<()> {
        writeln!(self.output, "Your hand:")?;
        for (i, card) in ctx.hand.cards().iter().enumerate() {
            writeln!(self.output, "\t{i}: {card}")?;
        }
        writeln!(self.output, "Last play: {}", ctx.reference)?;
        writeln!(self.output, "{} legal play(s) available", ctx.candidates.len())?;
        if ctx.opening {
            writeln!(self.output, "The opening play must include the 3 of Diamonds.")?;
        }
        Ok(())
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(
            self.output,
            "Enter the indices of the cards you want to play, separated by spaces, or 'pass': "
        )?;
        self.output.flush()
    }

    fn fallback(ctx: &TurnContext<'_>) -> Play {
        if ctx.reference.is_any() {
            ctx.candidates.first().cloned().unwrap_or_else(Play::pass)
        } else {
            Play::pass()
        }
    }
}

impl<R: BufRead, W: Write> Strategy for HumanStrategy<R, W> {
    fn select(&mut self, ctx: &TurnContext<'_>) -> Play {
        if self.show_table(ctx).is_err() {
            log::warn!("could not write to the human player");
        }

        loop {
            if self.prompt().is_err() {
                log::warn!("could not prompt the human player");
            }

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => {
                    log::warn!("human input closed; playing on their behalf");
                    return Self::fallback(ctx);
                }
                Ok(_) => {}
            }

            match parse_play(&line, ctx) {
                Ok(play) => return play,
                Err(err) => {
                    if writeln!(self.output, "{err}. Please try again.").is_err() {
                        log::warn!("could not report invalid input: {err}");
                    }
                }
            }
        }
    }
}
