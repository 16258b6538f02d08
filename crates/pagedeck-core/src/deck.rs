//! Page model and deck-file loading
//!
//! A deck file is plain text: pages are separated by lines containing only
//! `---`, and a page whose first non-blank line starts with `# ` uses that
//! line as its title.

use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// One page of a deck
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Optional page title, shown in the carousel border
    pub title: Option<String>,
    /// Page body text
    pub body: String,
}

impl Page {
    pub fn new(title: Option<&str>, body: &str) -> Self {
        Self {
            title: title.map(str::to_string),
            body: body.to_string(),
        }
    }
}

/// Load a deck file from disk
///
/// Returns [`Error::DeckParse`] if the file contains no pages.
pub fn load(path: &Path) -> Result<Vec<Page>> {
    let content = std::fs::read_to_string(path)?;
    let pages = parse(&content);
    if pages.is_empty() {
        return Err(Error::DeckParse(format!(
            "{} contains no pages",
            path.display()
        )));
    }
    debug!("Loaded {} pages from {}", pages.len(), path.display());
    Ok(pages)
}

/// Parse deck text into pages
///
/// Blank sections between separators are skipped, so a trailing `---` does
/// not produce an empty page.
pub fn parse(input: &str) -> Vec<Page> {
    let mut pages = Vec::new();
    let mut section: Vec<&str> = Vec::new();

    for line in input.lines() {
        if line.trim() == "---" {
            if let Some(page) = page_from_section(&section) {
                pages.push(page);
            }
            section.clear();
        } else {
            section.push(line);
        }
    }
    if let Some(page) = page_from_section(&section) {
        pages.push(page);
    }

    pages
}

fn page_from_section(lines: &[&str]) -> Option<Page> {
    let text = lines.join("\n");
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    match text.lines().next() {
        Some(first) if first.starts_with("# ") => {
            let title = first.trim_start_matches("# ").trim();
            let body = text[first.len()..].trim_start_matches('\n').to_string();
            Some(Page::new(Some(title), &body))
        }
        _ => Some(Page::new(None, text)),
    }
}

/// Built-in demo deck shown when no deck file is given
pub fn builtin() -> Vec<Page> {
    vec![
        Page::new(
            Some("Welcome to pagedeck"),
            "A paged carousel for your terminal.\n\n\
             Use h/l or the arrow keys to move between pages.\n\
             The dots below show where you are in the deck.",
        ),
        Page::new(
            Some("Navigation"),
            "l / Right / Space  next page\n\
             h / Left           previous page\n\
             1-9                jump to page\n\
             gg / G             first / last page\n\
             i                  toggle the indicator\n\
             ?                  help overlay\n\
             q                  quit",
        ),
        Page::new(
            Some("Your own decks"),
            "Write pages in a plain-text file, separated by `---` lines:\n\n\
             # First page\n\
             Hello!\n\
             ---\n\
             # Second page\n\
             Bye.\n\n\
             Then run `pagedeck run deck.txt`.",
        ),
        Page::new(
            Some("Configuration"),
            "Colors, dot style, key bindings and the slide animation live in\n\
             ~/.config/pagedeck/config.toml.\n\n\
             Run `pagedeck config init` to write the defaults.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_titled_pages() {
        let pages = parse("# One\nfirst\n---\n# Two\nsecond");
        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].title.as_deref(), Some("One"));
        assert_eq!(pages[0].body, "first");
        assert_eq!(pages[1].title.as_deref(), Some("Two"));
        assert_eq!(pages[1].body, "second");
    }

    #[test]
    fn test_parse_untitled_page() {
        let pages = parse("just a body\nwith two lines");
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].title, None);
        assert_eq!(pages[0].body, "just a body\nwith two lines");
    }

    #[test]
    fn test_blank_sections_skipped() {
        let pages = parse("---\n\n---\n# Only\nbody\n---\n");
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].title.as_deref(), Some("Only"));
    }

    #[test]
    fn test_empty_input_yields_no_pages() {
        assert!(parse("").is_empty());
        assert!(parse("\n\n---\n\n").is_empty());
    }

    #[test]
    fn test_builtin_deck_is_valid() {
        let pages = builtin();
        assert!(pages.len() > 1);
        assert!(pages.iter().all(|p| !p.body.is_empty()));
    }
}
