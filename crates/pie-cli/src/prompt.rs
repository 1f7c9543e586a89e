use std::io::{BufRead, Write};

use pie_catalog::validation::Confirm;

/// Asks for critical-value acknowledgment on a terminal. Anything other
/// than "y" or "yes" (including end of input) counts as a rejection.
pub struct TerminalConfirm<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalConfirm<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Confirm for TerminalConfirm<R, W> {
    fn confirm(&mut self, prompt: &str) -> bool {
        if writeln!(self.output, "\n{prompt}")
            .and_then(|()| write!(self.output, "Acknowledge? [y/N] "))
            .and_then(|()| self.output.flush())
            .is_err()
        {
            return false;
        }

        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
        }
    }
}

/// Answers every prompt the same way, for non-interactive runs.
#[derive(Debug, Clone, Copy)]
pub struct FixedAnswer(pub bool);

impl Confirm for FixedAnswer {
    fn confirm(&mut self, prompt: &str) -> bool {
        tracing::info!(
            acknowledged = self.0,
            prompt = prompt.lines().next().unwrap_or_default(),
            "critical value prompt answered non-interactively"
        );
        self.0
    }
}
