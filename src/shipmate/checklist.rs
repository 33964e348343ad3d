//! # Checklist Section Scanner
//!
//! Line-oriented extraction of unchecked items from one Markdown section.
//! The scanner deliberately does not parse Markdown: items are reported as
//! their trimmed source lines, so whatever the document author wrote after
//! `- [ ]` comes back verbatim.

/// Lexical pattern that opens an unchecked checklist entry.
pub const UNCHECKED_MARKER: &str = "- [ ]";

/// Only level-two headings delimit sections.
const HEADING_PREFIX: &str = "## ";

/// A single unchecked entry, kept as the trimmed source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistItem {
    pub text: String,
}

impl ChecklistItem {
    pub fn new(line: &str) -> Self {
        Self {
            text: line.trim().to_string(),
        }
    }
}

impl std::fmt::Display for ChecklistItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Collects unchecked items between the first heading containing `marker`
/// and the next heading at the same depth (or end of document).
///
/// Rules:
/// 1. A `## ` heading containing the marker opens the section; the heading
///    line itself is not content.
/// 2. The next `## ` heading without the marker closes the section and ends
///    the scan. Nothing after it is ever collected.
/// 3. Inside the section, any line whose trimmed text starts with `- [ ]`
///    is collected as its trimmed text.
pub fn scan_section(document: &str, marker: &str) -> Vec<ChecklistItem> {
    let mut in_section = false;
    let mut items = Vec::new();

    for line in document.lines() {
        if line.starts_with(HEADING_PREFIX) {
            if line.contains(marker) {
                in_section = true;
                continue;
            }
            if in_section {
                break;
            }
            continue;
        }

        if in_section {
            let trimmed = line.trim();
            if trimmed.starts_with(UNCHECKED_MARKER) {
                items.push(ChecklistItem::new(trimmed));
            }
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(items: &[ChecklistItem]) -> Vec<&str> {
        items.iter().map(|i| i.text.as_str()).collect()
    }

    #[test]
    fn collects_unchecked_items_in_order() {
        let doc = "## Production Checklist\n- [ ] A\n- [x] B\n- [ ] C\n## Next\n- [ ] D\n";
        let items = scan_section(doc, "Production Checklist");
        assert_eq!(texts(&items), vec!["- [ ] A", "- [ ] C"]);
    }

    #[test]
    fn skips_checked_items() {
        let doc = "## Tasks\n- [x] done\n- [X] also done\n- [ ] open\n";
        let items = scan_section(doc, "Tasks");
        assert_eq!(texts(&items), vec!["- [ ] open"]);
    }

    #[test]
    fn no_matching_heading_yields_empty() {
        let doc = "## Other\n- [ ] A\n- [ ] B\n";
        let items = scan_section(doc, "Production Checklist");
        assert!(items.is_empty());
    }

    #[test]
    fn stops_at_section_boundary() {
        let doc = "## Intro\ntext\n## Production Checklist\n- [ ] inside\n## After\n- [ ] outside\n";
        let items = scan_section(doc, "Production Checklist");
        assert_eq!(texts(&items), vec!["- [ ] inside"]);
    }

    #[test]
    fn section_immediately_followed_by_heading() {
        let doc = "## Production Checklist\n## Next\n- [ ] never\n";
        let items = scan_section(doc, "Production Checklist");
        assert!(items.is_empty());
    }

    #[test]
    fn trims_indented_items() {
        let doc = "## Production Checklist\n  - [ ] indented\n\t- [ ] tabbed\n";
        let items = scan_section(doc, "Production Checklist");
        assert_eq!(texts(&items), vec!["- [ ] indented", "- [ ] tabbed"]);
    }

    #[test]
    fn deeper_headings_do_not_close_the_section() {
        let doc = "## Production Checklist\n### Sub\n- [ ] still inside\n";
        let items = scan_section(doc, "Production Checklist");
        assert_eq!(texts(&items), vec!["- [ ] still inside"]);
    }

    #[test]
    fn items_before_the_section_are_ignored() {
        let doc = "- [ ] early\n## Production Checklist\n- [ ] inside\n";
        let items = scan_section(doc, "Production Checklist");
        assert_eq!(texts(&items), vec!["- [ ] inside"]);
    }

    #[test]
    fn marker_is_matched_as_a_substring_of_the_heading() {
        let doc = "## 7. Production Checklist (launch)\n- [ ] A\n";
        let items = scan_section(doc, "Production Checklist");
        assert_eq!(texts(&items), vec!["- [ ] A"]);
    }

    #[test]
    fn empty_document_yields_empty() {
        assert!(scan_section("", "Production Checklist").is_empty());
    }
}
