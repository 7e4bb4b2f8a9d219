//! Paragraph segmentation and clause-type tagging

use std::ops::Range;

use contract_types::ClauseSegment;
use lazy_static::lazy_static;
use regex::Regex;

use crate::catalog::{PatternCatalog, GENERAL_CLAUSE_TITLE, GENERAL_CLAUSE_TYPE};
use crate::patterns::CharCursor;

/// Paragraphs shorter than this (after trimming) are dropped
pub const MIN_CLAUSE_CHARS: usize = 20;

lazy_static! {
    /// Two or more consecutive newlines separate paragraphs
    static ref PARAGRAPH_BREAK: Regex = Regex::new(r"\n{2,}").unwrap();
}

/// Split contract text into clause segments, in document order.
///
/// Short paragraphs are skipped, not merged; their characters still count
/// toward the offsets of later segments.
pub fn segment_contract(text: &str, catalog: &PatternCatalog) -> Vec<ClauseSegment> {
    let mut segments = Vec::new();
    let mut cursor = CharCursor::new(text);

    for range in paragraph_ranges(text) {
        let paragraph = &text[range.clone()];
        let content = paragraph.trim();
        if content.chars().count() < MIN_CLAUSE_CHARS {
            continue;
        }

        let (clause_type, title) = match catalog.classify(paragraph) {
            Some(pattern) => (pattern.clause_type.as_str(), pattern.title.as_str()),
            None => (GENERAL_CLAUSE_TYPE, GENERAL_CLAUSE_TITLE),
        };

        segments.push(ClauseSegment {
            clause_type: clause_type.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            start_index: cursor.advance_to(range.start),
            end_index: cursor.advance_to(range.end),
        });
    }

    segments
}

/// Byte ranges of the paragraphs between paragraph breaks
fn paragraph_ranges(text: &str) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut start = 0;

    for separator in PARAGRAPH_BREAK.find_iter(text) {
        ranges.push(start..separator.start());
        start = separator.end();
    }
    ranges.push(start..text.len());

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn segment(text: &str) -> Vec<ClauseSegment> {
        segment_contract(text, PatternCatalog::builtin())
    }

    #[test]
    fn test_empty_text_has_no_segments() {
        assert!(segment("").is_empty());
    }

    #[test]
    fn test_tags_working_hours_paragraph() {
        let segments = segment("Working Hours: Employee must be available 24/7 as required.");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].clause_type, "hours");
        assert_eq!(segments[0].title, "Working Hours");
    }

    #[test]
    fn test_skips_short_paragraphs_but_counts_offsets() {
        let text = "EMPLOYMENT\n\nThe employee will receive an annual salary of $50,000.";
        let segments = segment(text);

        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].clause_type, "salary");
        assert_eq!(segments[0].start_index, "EMPLOYMENT\n\n".len());
        assert_eq!(segments[0].end_index, text.chars().count());
    }

    #[test]
    fn test_offsets_follow_actual_separators() {
        let text = "  The probation period lasts three months.  \n\n\n\nYou are entitled to paid vacation days.";
        let segments = segment(text);

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].clause_type, "probation");
        assert_eq!(segments[0].start_index, 0);
        assert_eq!(segments[0].end_index, 44);
        assert_eq!(segments[0].content, "The probation period lasts three months.");
        assert_eq!(segments[1].clause_type, "leave");
        assert_eq!(segments[1].start_index, 48);
    }

    #[test]
    fn test_unmatched_paragraph_is_general_terms() {
        let segments = segment("This agreement is made between the two parties named above.");
        assert_eq!(segments[0].clause_type, "general");
        assert_eq!(segments[0].title, "General Terms");
    }

    #[test]
    fn test_first_catalog_type_wins_tie_break() {
        // Matches both "leave" and "termination"; leave is earlier in the catalog
        let segments = segment("Upon termination, unused vacation days are paid out in full.");
        assert_eq!(segments[0].clause_type, "leave");
    }

    #[test]
    fn test_single_newlines_do_not_split() {
        let text = "Confidential information must be protected.\nThis includes trade secrets.";
        let segments = segment(text);
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].clause_type, "confidentiality");
    }
}
