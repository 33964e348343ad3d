//! # Shipmate Architecture
//!
//! Shipmate is a **UI-agnostic release-preparation library**. The binary is a thin
//! client: it parses arguments, wires up the configuration, and prints results.
//! Everything with behavior worth testing lives in the library.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per subcommand, returns CmdResult             │
//! │  - No assumptions about stdout/stderr or exit codes         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Capability Layer (checklist.rs, converter.rs, prompt.rs)   │
//! │  - Pure section scanning                                    │
//! │  - Abstract Converter trait (subprocess in production,      │
//! │    canned output in tests)                                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `commands/` inward, code takes regular Rust arguments, returns
//! `Result<CmdResult>` (or a plain `CmdResult` where nothing can fail),
//! **never** writes to stdout/stderr, and **never** calls
//! `std::process::exit`. The interactive-or-piped decision is made once in
//! the CLI layer and passed down as a value, so tests never need a real
//! terminal.
//!
//! ## Module Overview
//!
//! - [`commands`]: Business logic for each subcommand
//! - [`checklist`]: Markdown section scanner and `ChecklistItem`
//! - [`converter`]: The external spreadsheet-to-text converter seam
//! - [`config`]: Configuration management
//! - [`prompt`]: Post-print pause behavior
//! - [`error`]: Error types

pub mod checklist;
pub mod commands;
pub mod config;
pub mod converter;
pub mod error;
pub mod prompt;
