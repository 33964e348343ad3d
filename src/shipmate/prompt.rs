//! # Post-Print Pause
//!
//! After listing checklist items the tool holds the screen: attached to a
//! terminal it waits for the user to press Enter, piped it sleeps for a fixed
//! second instead. The mode is detected once in the CLI layer and passed
//! down as a value, so nothing below `main.rs` probes the terminal.

use crate::error::Result;
use std::io::{self, IsTerminal, Write};
use std::thread;
use std::time::Duration;

pub const ACK_PROMPT: &str = "Press Enter for next item...";

const PIPED_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseMode {
    /// Stdin is a terminal: prompt and block for a line of input.
    Interactive,
    /// Stdin is piped or closed: sleep for a fixed delay.
    Delayed,
}

impl PauseMode {
    pub fn detect() -> Self {
        if io::stdin().is_terminal() {
            PauseMode::Interactive
        } else {
            PauseMode::Delayed
        }
    }
}

/// Blocks according to `mode`. In interactive mode the input line is
/// discarded, and end-of-input counts as a normal acknowledgement.
pub fn pause(mode: PauseMode) -> Result<()> {
    match mode {
        PauseMode::Interactive => {
            print!("{}", ACK_PROMPT);
            io::stdout().flush()?;

            // read_line returns Ok(0) on EOF, which is fine here
            let mut input = String::new();
            io::stdin().read_line(&mut input)?;
            Ok(())
        }
        PauseMode::Delayed => {
            thread::sleep(PIPED_DELAY);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn delayed_mode_sleeps_roughly_one_second() {
        let start = Instant::now();
        pause(PauseMode::Delayed).unwrap();
        assert!(start.elapsed() >= Duration::from_millis(900));
    }
}
