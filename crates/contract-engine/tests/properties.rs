//! Property-based tests for the contract analysis engine
//!
//! Generated contracts mix known trigger phrases with arbitrary text and
//! varied paragraph separators.

use std::collections::HashSet;

use contract_engine::scoring::{level_for_score, score_levels, MAX_SCORE};
use contract_engine::{analyze_contract, ContractAnalyzer, RiskLevel};
use proptest::prelude::*;

// ============================================================
// Strategies
// ============================================================

fn trigger_phrase() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Salary will be discussed".to_string()),
        Just("competitive pay".to_string()),
        Just("Working Hours: Employee must be available 24/7".to_string()),
        Just("The employer may terminate at will".to_string()),
        Just("a bond period applies".to_string()),
        Just("probation period of twelve months".to_string()),
        Just("worldwide non-compete".to_string()),
        Just("perpetual confidentiality".to_string()),
        Just("exempt from overtime".to_string()),
        Just("all inventions belong to the company".to_string()),
        Just("terms may be changed at any time".to_string()),
    ]
}

fn filler() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.:é]{0,40}"
}

fn separator() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just(" "), Just("\n"), Just("\n\n"), Just("\n\n\n"), Just("  \n\n ")]
}

fn contract_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (prop_oneof![trigger_phrase(), filler()], separator()),
        0..12,
    )
    .prop_map(|parts| {
        parts
            .into_iter()
            .map(|(fragment, sep)| fragment + sep)
            .collect()
    })
}

fn risk_level() -> impl Strategy<Value = RiskLevel> {
    prop_oneof![
        Just(RiskLevel::Low),
        Just(RiskLevel::Medium),
        Just(RiskLevel::High),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // ============================================================
    // Detector
    // ============================================================

    #[test]
    fn detector_never_repeats_a_pattern_id(text in contract_text()) {
        let flags = ContractAnalyzer::default().detect(&text);
        let mut seen = HashSet::new();
        for flag in &flags {
            prop_assert!(seen.insert(flag.id.clone()), "duplicate flag {}", flag.id);
        }
    }

    #[test]
    fn flags_follow_catalog_order(text in contract_text()) {
        let analyzer = ContractAnalyzer::default();
        let catalog_ids: Vec<_> = analyzer
            .catalog()
            .red_flags()
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        let positions: Vec<_> = analyzer
            .detect(&text)
            .iter()
            .map(|f| catalog_ids.iter().position(|id| *id == f.id).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn flag_positions_lie_inside_text(text in contract_text()) {
        let total_chars = text.chars().count();
        for flag in ContractAnalyzer::default().detect(&text) {
            prop_assert!(flag.position.start_offset <= flag.position.end_offset);
            prop_assert!(flag.position.end_offset <= total_chars);

            let matched: String = text
                .chars()
                .skip(flag.position.start_offset)
                .take(flag.position.end_offset - flag.position.start_offset)
                .collect();
            prop_assert!(flag.matched_text.contains(matched.trim()));
            prop_assert_eq!(flag.description.clone(), format!("Found: \"{}\"", matched));
        }
    }

    // ============================================================
    // Segmenter
    // ============================================================

    #[test]
    fn segment_offsets_increase_and_match_content(text in contract_text()) {
        let segments = ContractAnalyzer::default().segment(&text);
        let chars: Vec<char> = text.chars().collect();

        let mut previous_end = 0;
        for segment in &segments {
            prop_assert!(segment.start_index >= previous_end);
            prop_assert!(segment.start_index < segment.end_index);
            prop_assert!(segment.end_index <= chars.len());
            previous_end = segment.end_index;

            let paragraph: String = chars[segment.start_index..segment.end_index].iter().collect();
            prop_assert_eq!(paragraph.trim(), segment.content.as_str());
            prop_assert!(!paragraph.contains("\n\n"));
            prop_assert!(segment.content.chars().count() >= 20);
        }
    }

    #[test]
    fn segmentation_is_repeatable(text in contract_text()) {
        let analyzer = ContractAnalyzer::default();
        prop_assert_eq!(analyzer.segment(&text), analyzer.segment(&text));
    }

    // ============================================================
    // Scoring
    // ============================================================

    #[test]
    fn no_flags_means_baseline(text in filler()) {
        let result = analyze_contract(&text);
        if result.red_flags.is_empty() {
            prop_assert_eq!(result.risk_score, 10);
            prop_assert_eq!(result.overall_risk, RiskLevel::Low);
        }
    }

    #[test]
    fn score_is_monotonic_and_clamped(
        levels in prop::collection::vec(risk_level(), 1..12),
        extra in risk_level(),
    ) {
        let before = score_levels(levels.clone());
        let mut more = levels;
        more.push(extra);
        let after = score_levels(more);

        prop_assert!(after.score >= before.score);
        prop_assert!(after.level >= before.level);
        prop_assert!(after.score <= MAX_SCORE);
        prop_assert_eq!(after.level, level_for_score(after.score));
    }

    #[test]
    fn analysis_result_is_consistent(text in contract_text()) {
        let result = analyze_contract(&text);
        prop_assert!(result.risk_score <= MAX_SCORE);
        prop_assert_eq!(result.overall_risk, level_for_score(result.risk_score));
        prop_assert_eq!(result, analyze_contract(&text));
    }
}
