use std::fmt;

/// Risk classification shared by red-flag patterns and overall results.
///
/// Variants are ordered `Low < Medium < High`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Points contributed to the overall risk score by one flag of this level
    pub fn points(self) -> u32 {
        match self {
            RiskLevel::High => 25,
            RiskLevel::Medium => 15,
            RiskLevel::Low => 5,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextPosition {
    pub start_offset: usize, // Character offset in the analysed text
    pub end_offset: usize,   // Exclusive end character offset
}

/// A red flag detected in a contract. At most one per pattern id per run.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedFlag {
    pub id: String, // e.g., "salary-unclear"
    pub title: String,
    pub description: String, // Found: "<matched text>"
    pub risk_level: RiskLevel,
    pub matched_text: String, // Surrounding context, wrapped in "..."
    pub explanation: String,
    pub learn_more_link: String,
    pub category: String,
    pub position: TextPosition, // Location of the match itself
}

/// A paragraph-level clause tagged with its best-matching clause type
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClauseSegment {
    #[serde(rename = "type")]
    pub clause_type: String, // e.g., "hours", or "general" when nothing matched
    pub title: String,
    pub content: String, // Trimmed paragraph text
    pub start_index: usize,
    pub end_index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub overall_risk: RiskLevel,
    pub risk_score: u32, // 0-100
    pub red_flags: Vec<RedFlag>,
    pub clauses: Vec<ClauseSegment>,
    pub summary: String,
}

impl AnalysisResult {
    /// Number of detected flags at the given level
    pub fn count_at(&self, level: RiskLevel) -> usize {
        self.red_flags
            .iter()
            .filter(|flag| flag.risk_level == level)
            .count()
    }
}
