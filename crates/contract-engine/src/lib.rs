//! Rule-based employment contract analysis
//!
//! Turns extracted contract text into an [`AnalysisResult`]:
//!
//! - [`segmenter`] splits text into paragraph clauses tagged by type
//! - [`detector`] matches the red-flag catalog against the full text
//! - [`scoring`] aggregates flags into a 0-100 score and risk level
//! - [`summary`] renders a plain-language paragraph
//!
//! All patterns live in a [`PatternCatalog`]. Analysis is synchronous,
//! performs no I/O and cannot fail; only building a custom catalog can.

pub mod builtin;
pub mod catalog;
pub mod detector;
pub mod error;
pub mod patterns;
pub mod scoring;
pub mod segmenter;
pub mod summary;

pub use catalog::{ClauseTypePattern, ClauseTypeSpec, PatternCatalog, RedFlagPattern, RedFlagSpec};
pub use contract_types::{AnalysisResult, ClauseSegment, RedFlag, RiskLevel, TextPosition};
pub use error::CatalogError;
pub use scoring::RiskScore;

use tracing::debug;

/// ContractAnalyzer entry point
///
/// Holds a borrowed catalog and nothing else, so one analyzer can be shared
/// across threads and reused for any number of documents.
#[derive(Debug, Clone, Copy)]
pub struct ContractAnalyzer<'c> {
    catalog: &'c PatternCatalog,
}

impl<'c> ContractAnalyzer<'c> {
    pub fn new(catalog: &'c PatternCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'c PatternCatalog {
        self.catalog
    }

    /// Split text into clause segments
    pub fn segment(&self, text: &str) -> Vec<ClauseSegment> {
        segmenter::segment_contract(text, self.catalog)
    }

    /// Detect red flags, one per triggered pattern, in catalog order
    pub fn detect(&self, text: &str) -> Vec<RedFlag> {
        detector::detect_red_flags(text, self.catalog)
    }

    /// Full analysis: segment, detect, score, summarize
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let clauses = self.segment(text);
        let red_flags = self.detect(text);
        let RiskScore { score, level } = scoring::calculate_risk_score(&red_flags);
        let summary = summary::generate_summary(&red_flags, level);

        debug!(
            text_chars = text.chars().count(),
            clauses = clauses.len(),
            red_flags = red_flags.len(),
            score,
            level = %level,
            "contract analyzed"
        );

        AnalysisResult {
            overall_risk: level,
            risk_score: score,
            red_flags,
            clauses,
            summary,
        }
    }
}

impl Default for ContractAnalyzer<'static> {
    fn default() -> Self {
        Self::new(PatternCatalog::builtin())
    }
}

/// Analyze text with the built-in catalog
pub fn analyze_contract(text: &str) -> AnalysisResult {
    ContractAnalyzer::default().analyze(text)
}
