pub mod types;

pub use types::{AnalysisResult, ClauseSegment, RedFlag, RiskLevel, TextPosition};
