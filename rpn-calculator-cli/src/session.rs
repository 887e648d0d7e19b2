use anyhow::{Context, Result};
use log::{info, warn};
use rpn_calculator::interpreter::evaluator::calculate;
use rpn_calculator::interpreter::lexer::tokenize;
use rpn_calculator::interpreter::token::tokens_to_string;
use std::io::{BufRead, ErrorKind, Write};

pub const BANNER: &str = "Welcome to RPN calculator! Enter RPN expressions, tokens separated by spaces. \
Parentheses allowed. Unary minus (~) and plus ($) must be written with the number, without space.";

/// Reads expressions one line at a time and writes one result per line.
pub struct Session<W: Write> {
    output: W,
    show_tokens: bool,
}

impl<W: Write> Session<W> {
    pub fn new(output: W, show_tokens: bool) -> Self {
        Session {
            output,
            show_tokens,
        }
    }

    pub fn print_banner(&mut self) -> Result<()> {
        writeln!(self.output, "{}", BANNER).context("could not write banner")?;
        self.output.flush().context("could not flush output")
    }

    /// Evaluates the given expression and prints either its value or the reason it failed.
    ///
    /// returns: Whether the expression could be evaluated. Only failing to write is an error.
    pub fn evaluate_line(&mut self, line: &str) -> Result<bool> {
        let outcome = match tokenize(line) {
            Ok(tokens) => {
                if self.show_tokens {
                    writeln!(self.output, "{}", tokens_to_string(&tokens))
                        .context("could not write tokens")?;
                }
                calculate(&tokens)
            }
            Err(error) => Err(error),
        };
        let succeeded = match outcome {
            Ok(value) => {
                writeln!(self.output, "{}", value).context("could not write result")?;
                true
            }
            Err(error) => {
                info!("{:?} for {:?}", error.kind(), line);
                writeln!(self.output, "CalculatorError: {}", error)
                    .context("could not write error")?;
                false
            }
        };
        self.output.flush().context("could not flush output")?;
        Ok(succeeded)
    }

    /// Evaluates every non-empty line of the input.
    ///
    /// returns: The number of lines that failed to evaluate.
    pub fn run(&mut self, input: impl BufRead) -> Result<usize> {
        let mut failures = 0;
        for line in input.lines() {
            let line = match line {
                Ok(line) => line,
                // The offending line has already been consumed, so reading can go on.
                Err(error) if error.kind() == ErrorKind::InvalidData => {
                    warn!("skipping unreadable line: {}", error);
                    failures += 1;
                    continue;
                }
                Err(error) => return Err(error).context("could not read line from input"),
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if !self.evaluate_line(line)? {
                failures += 1;
            }
        }
        if failures > 0 {
            warn!("{} expressions could not be evaluated", failures);
        }
        Ok(failures)
    }
}
