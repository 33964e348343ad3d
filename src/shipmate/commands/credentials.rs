use crate::commands::CmdResult;
use crate::converter::Converter;
use std::fmt::Write;
use std::path::Path;

pub const FALLBACK_NOTICE: &str =
    "Please provide your credentials in text format or as a CSV file.";

/// Field names printed when the spreadsheet cannot be converted. Purely
/// descriptive, there is no backing data.
pub const EXPECTED_FIELDS: [&str; 9] = [
    "Gemini API Key",
    "Stripe Secret Key (sk_live_...)",
    "Stripe Publishable Key (pk_live_...)",
    "Stripe Monthly Price ID",
    "Stripe Yearly Price ID",
    "Supabase URL",
    "Supabase Anon Key",
    "Supabase Service Role Key",
    "Database URL",
];

/// Runs the converter against the spreadsheet at `path`.
///
/// On success the dump is the converter's stdout, untouched. Every failure
/// mode collapses into the same fallback text; none of them is an error at
/// the process level.
pub fn run<C: Converter>(converter: &C, path: &Path) -> CmdResult {
    match converter.convert(path) {
        Some(text) => CmdResult::default().with_dump(text),
        None => CmdResult::default().with_dump(fallback_text()),
    }
}

/// The static fallback block: notice, blank line, then the expected fields.
pub fn fallback_text() -> String {
    let mut out = String::from(FALLBACK_NOTICE);
    out.push_str("\n\nExpected credentials:\n");
    for field in EXPECTED_FIELDS {
        // Write to a String cannot fail
        let _ = writeln!(out, "- {}", field);
    }
    out
}
