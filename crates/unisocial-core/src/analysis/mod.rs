//! Performance analysis domain module.
//!
//! `AnalysisResult` is the scored report produced once per finished session.
//! Every constructor here yields a complete, in-range result, so callers never
//! have to handle a partially filled report.

mod model;

pub use model::{
    AnalysisResult, MAX_SCORE, MIN_ANALYZABLE_MESSAGES, NEUTRAL_SCORE, SUMMARY_PLACEHOLDER,
    TONE_PLACEHOLDER,
};
