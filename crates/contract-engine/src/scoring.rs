//! Risk scoring from detected red flags

use contract_types::{RedFlag, RiskLevel};

/// Score reported when no flags are found. Not zero: a contract without
/// detected issues is not claimed to be risk-free.
pub const BASELINE_SCORE: u32 = 10;

/// Upper bound of the risk score
pub const MAX_SCORE: u32 = 100;

/// Scores at or above this are HIGH risk
pub const HIGH_THRESHOLD: u32 = 50;

/// Scores at or above this (and below [`HIGH_THRESHOLD`]) are MEDIUM risk
pub const MEDIUM_THRESHOLD: u32 = 25;

/// Overall score and the level it maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RiskScore {
    pub score: u32,
    pub level: RiskLevel,
}

/// Aggregate detected flags into a 0-100 score and a risk level
pub fn calculate_risk_score(red_flags: &[RedFlag]) -> RiskScore {
    score_levels(red_flags.iter().map(|flag| flag.risk_level))
}

/// Score a set of flag risk levels.
///
/// Points are summed with no per-flag cap or diminishing returns, then
/// clamped to [`MAX_SCORE`].
pub fn score_levels<I>(levels: I) -> RiskScore
where
    I: IntoIterator<Item = RiskLevel>,
{
    let mut levels = levels.into_iter().peekable();
    if levels.peek().is_none() {
        return RiskScore {
            score: BASELINE_SCORE,
            level: RiskLevel::Low,
        };
    }

    let total: u32 = levels.map(RiskLevel::points).sum();
    let score = total.min(MAX_SCORE);

    RiskScore {
        score,
        level: level_for_score(score),
    }
}

/// Map a score to its risk level
pub fn level_for_score(score: u32) -> RiskLevel {
    if score >= HIGH_THRESHOLD {
        RiskLevel::High
    } else if score >= MEDIUM_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
