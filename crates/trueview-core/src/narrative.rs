//! Narrative extraction.
//!
//! Turns the explanation model's free-text overview into an ordered list of
//! reasoning bullets:
//! - one candidate per line, trimmed, blank lines dropped
//! - leading list markup removed (`•`, `-`, `*`, `1.`, `**1.**`)
//! - lines that are only markup dropped
//!
//! The output is a fixed point: extracting from the joined bullets yields the
//! same bullets.

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    /// `**2.**` as written by the explanation model for numbered headings
    static ref BOLD_NUMBER: Regex = Regex::new(r"^\*\*\d+\.\*\*\s*").unwrap();

    /// Single-character bullet
    static ref BULLET: Regex = Regex::new(r"^[•\-*]\s*").unwrap();

    /// `1.` style list number
    static ref NUMBERED: Regex = Regex::new(r"^\d+\.\s*").unwrap();
}

/// One line of reasoning, free of list markup. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ReasoningBullet {
    text: String,
}

impl ReasoningBullet {
    /// Clean a single line; `None` if nothing but markup or whitespace is left.
    pub fn parse(line: &str) -> Option<Self> {
        let text = strip_markers(line);
        if text.is_empty() {
            None
        } else {
            Some(Self { text })
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

impl std::fmt::Display for ReasoningBullet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for ReasoningBullet {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

/// Extract reasoning bullets from an overview, in source line order.
pub fn extract(overview: &str) -> Vec<ReasoningBullet> {
    overview.split('\n').filter_map(ReasoningBullet::parse).collect()
}

/// Join bullets back into overview form, one per line.
pub fn join(bullets: &[ReasoningBullet]) -> String {
    bullets
        .iter()
        .map(ReasoningBullet::text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Strip leading list markup from one line.
///
/// Each pass removes at most one bold number, one bullet, one list number and
/// one more bold number, in that order, then trims. Passes repeat until the
/// line stops changing, so `"- 1. x"` and `"1. - x"` both end up as `"x"`.
pub fn strip_markers(line: &str) -> String {
    let mut current = line.trim().to_string();
    loop {
        let next = strip_pass(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn strip_pass(line: &str) -> String {
    // A bold number has to go first: the bullet pattern would otherwise take
    // its leading `*` and leave `*2.**` behind.
    let s = BOLD_NUMBER.replace(line, "");
    let s = BULLET.replace(&s, "");
    let s = NUMBERED.replace(&s, "");
    let s = BOLD_NUMBER.replace(&s, "");
    s.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(bullets: &[ReasoningBullet]) -> Vec<&str> {
        bullets.iter().map(|b| b.text()).collect()
    }

    #[test]
    fn test_mixed_markers() {
        let bullets = extract("1. Low monotonicity\n• Natural edges\n**2.** No artifacts\n\n");
        assert_eq!(texts(&bullets), vec!["Low monotonicity", "Natural edges", "No artifacts"]);
    }

    #[test]
    fn test_each_marker_kind() {
        assert_eq!(strip_markers("- dash"), "dash");
        assert_eq!(strip_markers("* star"), "star");
        assert_eq!(strip_markers("•bullet"), "bullet");
        assert_eq!(strip_markers("12.  twelve"), "twelve");
        assert_eq!(strip_markers("**3.** bold"), "bold");
        assert_eq!(strip_markers("**10.**tight"), "tight");
    }

    #[test]
    fn test_stacked_markers() {
        assert_eq!(strip_markers("- 1. nested"), "nested");
        assert_eq!(strip_markers("1. - nested"), "nested");
        assert_eq!(strip_markers("• **4.** nested"), "nested");
        assert_eq!(strip_markers("- - double"), "double");
    }

    #[test]
    fn test_interior_markup_untouched() {
        assert_eq!(strip_markers("Edge density is 0.05 - within range"), "Edge density is 0.05 - within range");
        assert_eq!(strip_markers("Texture **very** smooth"), "Texture **very** smooth");
        assert_eq!(strip_markers("v1.2 model output"), "v1.2 model output");
    }

    #[test]
    fn test_marker_only_lines_dropped() {
        let bullets = extract("-\n  *  \n1.\n**2.**\nkept");
        assert_eq!(texts(&bullets), vec!["kept"]);
    }

    #[test]
    fn test_empty_overview() {
        assert!(extract("").is_empty());
        assert!(extract("   \n\t\n  ").is_empty());
    }

    #[test]
    fn test_plain_paragraph() {
        let bullets = extract("The image appears authentic overall.");
        assert_eq!(texts(&bullets), vec!["The image appears authentic overall."]);
    }

    #[test]
    fn test_crlf_lines() {
        let bullets = extract("- first\r\n- second\r\n");
        assert_eq!(texts(&bullets), vec!["first", "second"]);
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "1. Low monotonicity\n• Natural edges\n**2.** No artifacts\n\n",
            "- - double\n1. 2. 3. deep\n**1.**\n* * *",
            "plain\n\n  indented line  \n•",
            "**2.** - 7. mixed",
            "",
        ];
        for s in samples {
            let once = extract(s);
            let twice = extract(&join(&once));
            assert_eq!(once, twice, "not idempotent for {:?}", s);
        }
    }

    #[test]
    fn test_parse_rejects_empty() {
        assert!(ReasoningBullet::parse("  - ").is_none());
        assert_eq!(ReasoningBullet::parse(" - ok ").unwrap().to_string(), "ok");
    }
}
