//! Diagnosis flow for pregnancy complaints.
//!
//! A request without answers gets the fixed questionnaire back; a request
//! with answers triggers exactly one model call whose strict-JSON reply is
//! parsed into a [`DiagnosisResult`]. Unusable replies never surface as
//! errors: they become one of two fixed fallback results.

mod analysis;
mod inference_engine;
mod prompt;
mod questions;
mod types;

pub use inference_engine::InferenceEngine;
pub use questions::{INITIAL_SEVERITY, STANDARD_QUESTIONS};
pub use types::{DiagnosisOutcome, DiagnosisResult, QuestionSet};
