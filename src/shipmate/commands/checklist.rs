use crate::checklist::scan_section;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShipmateError};
use std::fs;
use std::path::Path;

pub const EMPTY_MESSAGE: &str = "No checklist items found.";

/// Reads the document at `path` and collects the unchecked items of the
/// first section whose heading contains `marker`.
///
/// An unreadable document is fatal; an empty result is not, it just carries
/// the "nothing found" message.
pub fn run(path: &Path, marker: &str) -> Result<CmdResult> {
    let document = fs::read_to_string(path).map_err(|source| ShipmateError::DocumentRead {
        path: path.display().to_string(),
        source,
    })?;

    let items = scan_section(&document, marker);
    let mut result = CmdResult::default().with_items(items);
    if result.items.is_empty() {
        result.add_message(CmdMessage::info(EMPTY_MESSAGE));
    }
    Ok(result)
}
