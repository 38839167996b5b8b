pub mod detectors;
pub mod finding;
pub mod pattern_analyzer;
pub mod suggestions;
pub mod tally;

pub use finding::{AnalysisResult, Finding, PatternType};
pub use pattern_analyzer::{AnalyzerSettings, PatternAnalyzer};
