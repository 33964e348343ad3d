//! # External Converter Seam
//!
//! The credentials spreadsheet is never parsed here; an external program
//! (xlsx2csv by default) turns it into text. The trait keeps that subprocess
//! behind a seam so command logic can be tested with canned output, the same
//! way the storage trait in a data-backed tool would be.
//!
//! A conversion either yields the captured stdout or it fails. Failure
//! carries no detail on purpose: a missing program, a spawn error, and a
//! non-zero exit are all treated identically by every caller.

use std::path::Path;
use std::process::Command;

pub trait Converter {
    /// Converts the file at `path` to text, or `None` on any failure.
    fn convert(&self, path: &Path) -> Option<String>;
}

/// Production converter: runs an external program with the file path as its
/// only argument and captures stdout.
#[derive(Debug, Clone)]
pub struct CommandConverter {
    program: String,
}

impl CommandConverter {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Converter for CommandConverter {
    fn convert(&self, path: &Path) -> Option<String> {
        let output = Command::new(&self.program).arg(path).output().ok()?;
        if !output.status.success() {
            return None;
        }
        String::from_utf8(output.stdout).ok()
    }
}

/// Canned converter for tests: always returns the configured outcome.
#[derive(Debug, Clone, Default)]
pub struct StaticConverter {
    output: Option<String>,
}

impl StaticConverter {
    /// A converter that succeeds with `output`.
    pub fn ok(output: impl Into<String>) -> Self {
        Self {
            output: Some(output.into()),
        }
    }

    /// A converter that fails regardless of input.
    pub fn failing() -> Self {
        Self { output: None }
    }
}

impl Converter for StaticConverter {
    fn convert(&self, _path: &Path) -> Option<String> {
        self.output.clone()
    }
}
