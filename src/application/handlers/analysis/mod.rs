//! Analysis handlers.

mod build_analysis_payload;

pub use build_analysis_payload::AnalysisPayloadBuilder;
