use crate::checklist::ChecklistItem;

pub mod checklist;
pub mod credentials;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command hands back to the CLI layer for printing.
///
/// `items` are printed one per line, verbatim; `dump` is written as-is with
/// no trailing newline added; `messages` go through the colored message
/// printer.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub items: Vec<ChecklistItem>,
    pub dump: Option<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_items(mut self, items: Vec<ChecklistItem>) -> Self {
        self.items = items;
        self
    }

    pub fn with_dump(mut self, dump: String) -> Self {
        self.dump = Some(dump);
        self
    }
}
