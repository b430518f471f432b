use crate::types::QuestionSet;

/// Questions asked for every complaint, in display order.
pub const STANDARD_QUESTIONS: [&str; 5] = [
    "Sudah berapa lama Anda mengalami keluhan ini?",
    "Apakah keluhan ini mengganggu aktivitas sehari-hari?",
    "Apakah ada riwayat kondisi medis sebelumnya?",
    "Berapa usia kehamilan Anda saat ini?",
    "Apakah sudah berkonsultasi dengan dokter sebelumnya?",
];

/// Severity shown to the user before any answer is analyzed.
pub const INITIAL_SEVERITY: &str = "Sedang";

pub(crate) fn standard_question_set() -> QuestionSet {
    QuestionSet {
        questions: STANDARD_QUESTIONS.iter().map(|q| q.to_string()).collect(),
        total_questions: STANDARD_QUESTIONS.len(),
        severity_initial: INITIAL_SEVERITY.to_string(),
        progress: 0,
    }
}
