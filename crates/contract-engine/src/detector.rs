//! Red-flag detection over the full contract text

use contract_types::RedFlag;

use crate::catalog::{PatternCatalog, RedFlagPattern};
use crate::patterns::{extract_snippet, find_text_position};

/// Detect red flags in catalog order, at most one per pattern.
///
/// For each pattern the first trigger that matches wins; the remaining
/// triggers of that pattern are not evaluated.
pub fn detect_red_flags(text: &str, catalog: &PatternCatalog) -> Vec<RedFlag> {
    catalog
        .red_flags()
        .iter()
        .filter_map(|pattern| detect_pattern(text, pattern))
        .collect()
}

/// Run a single pattern against `text`
pub fn detect_pattern(text: &str, pattern: &RedFlagPattern) -> Option<RedFlag> {
    let found = pattern.first_match(text)?;

    Some(RedFlag {
        id: pattern.id.clone(),
        title: pattern.title.clone(),
        description: format!("Found: \"{}\"", found.as_str()),
        risk_level: pattern.risk_level,
        matched_text: extract_snippet(text, found.start(), found.end()),
        explanation: pattern.explanation.clone(),
        learn_more_link: pattern.learn_more_link.clone(),
        category: pattern.category.clone(),
        position: find_text_position(text, found.start(), found.end()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use contract_types::RiskLevel;
    use pretty_assertions::assert_eq;

    fn detect(text: &str) -> Vec<RedFlag> {
        detect_red_flags(text, PatternCatalog::builtin())
    }

    fn ids(flags: &[RedFlag]) -> Vec<&str> {
        flags.iter().map(|f| f.id.as_str()).collect()
    }

    #[test]
    fn test_detects_unclear_salary() {
        let flags = detect("Your salary will be discussed after onboarding.");
        assert_eq!(ids(&flags), vec!["salary-unclear"]);
        assert_eq!(flags[0].risk_level, RiskLevel::High);
        assert_eq!(flags[0].description, "Found: \"salary will be discussed\"");
        assert_eq!(flags[0].category, "payment");
    }

    #[test]
    fn test_first_trigger_wins_within_pattern() {
        // Both the "terminate at will" and "dismissal without notice" triggers match
        let text = "Dismissal without notice is possible. The company may terminate at will.";
        let flags = detect(text);
        assert_eq!(ids(&flags), vec!["termination-no-notice"]);
        assert_eq!(flags[0].description, "Found: \"terminate at will\"");
    }

    #[test]
    fn test_flags_follow_catalog_order_not_text_order() {
        let text = "A bond period of two years applies. Salary to be determined.";
        let flags = detect(text);
        assert_eq!(ids(&flags), vec!["salary-unclear", "resignation-penalty"]);
    }

    #[test]
    fn test_overlapping_categories_fire_independently() {
        let text = "The employer may terminate at will. A bond period applies to all staff.";
        let flags = detect(text);
        assert_eq!(ids(&flags), vec!["termination-no-notice", "resignation-penalty"]);
        assert!(flags.iter().all(|f| f.category == "termination"));
    }

    #[test]
    fn test_unlimited_hours_24_7() {
        let flags = detect("Working Hours: Employee must be available 24/7 as required.");
        assert!(ids(&flags).contains(&"unlimited-hours"));
    }

    #[test]
    fn test_context_is_clamped_and_wrapped() {
        let text = "x".repeat(80) + " salary to be negotiated " + &"y".repeat(80);
        let flags = detect(&text);
        let expected = format!(
            "...{} salary to be negotiated {}...",
            "x".repeat(49),
            "y".repeat(49)
        );
        assert_eq!(flags[0].matched_text, expected);
    }

    #[test]
    fn test_position_points_at_the_match() {
        let text = "Clause 4. A bond amount of $5,000 applies.";
        let flags = detect(text);
        let flag = &flags[0];
        let matched: String = text
            .chars()
            .skip(flag.position.start_offset)
            .take(flag.position.end_offset - flag.position.start_offset)
            .collect();
        assert_eq!(matched, "bond amount");
    }

    #[test]
    fn test_position_unaffected_by_case_folding() {
        // 'İ' lowercases to two characters, which would shift a lowercase re-search
        let text = "İİİ: salary to be determined.";
        let flags = detect(text);
        assert_eq!(flags[0].position.start_offset, 5);
        assert_eq!(flags[0].position.end_offset, 5 + "salary to be determined".len());
    }

    #[test]
    fn test_clean_text_has_no_flags() {
        let text = "The employee will receive an annual salary of $50,000, paid monthly. \
                    Working hours are 9am to 5pm, Monday to Friday.";
        assert!(detect(text).is_empty());
    }

    #[test]
    fn test_alternate_catalog() {
        use crate::catalog::RedFlagSpec;

        let catalog = PatternCatalog::from_specs(
            &[RedFlagSpec {
                id: "unpaid-trial",
                title: "Unpaid Trial",
                triggers: &[r"unpaid\s+trial"],
                risk_level: RiskLevel::Low,
                explanation: "Trial work should be paid.",
                learn_more_link: "/learn#probation",
                category: "probation",
            }],
            &[],
        )
        .unwrap();

        let flags = detect_red_flags("An unpaid trial week is required.", &catalog);
        assert_eq!(ids(&flags), vec!["unpaid-trial"]);
        assert!(detect_red_flags("Salary to be determined.", &catalog).is_empty());
    }
}
