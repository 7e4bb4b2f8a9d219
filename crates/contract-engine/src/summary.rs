//! Plain-language summary of an analysis

use contract_types::{RedFlag, RiskLevel};

/// Summary used when no red flags were detected
pub const NO_FLAGS_SUMMARY: &str = "No obvious red flags detected. This is a good sign, but we recommend reading the full contract carefully and consulting a legal professional if you have any concerns.";

/// Build the summary paragraph for a set of flags and the overall level
pub fn generate_summary(red_flags: &[RedFlag], level: RiskLevel) -> String {
    if red_flags.is_empty() {
        return NO_FLAGS_SUMMARY.to_string();
    }

    let total = red_flags.len();
    let high_count = red_flags
        .iter()
        .filter(|flag| flag.risk_level == RiskLevel::High)
        .count();

    match level {
        RiskLevel::High => format!(
            "We found {} potential issues, including {} high-risk red flags. We strongly recommend consulting with a legal professional before signing this contract.",
            total, high_count
        ),
        RiskLevel::Medium => format!(
            "We found {} potential issues that deserve attention. Consider asking your employer about these points or consulting a legal professional.",
            total
        ),
        RiskLevel::Low => format!(
            "We found {} minor points worth noting. Overall, this contract appears reasonable, but always read carefully before signing.",
            total
        ),
    }
}
