use std::collections::BTreeMap;

const COMPLAINT_MAX_CHARS: usize = 200;
const ANSWERS_MAX_CHARS: usize = 300;

/// Compact case description handed to the model.
pub(crate) fn build_case_context(complaint: &str, answers: &BTreeMap<String, String>) -> String {
    let answers_json = serde_json::to_string(answers).unwrap_or_default();
    format!(
        "Keluhan: {}. Jawaban: {}",
        truncate_chars(complaint, COMPLAINT_MAX_CHARS),
        truncate_chars(&answers_json, ANSWERS_MAX_CHARS)
    )
}

/// Instruction that asks for the analysis as a bare JSON object.
pub(crate) fn build_analysis_prompt(case_context: &str) -> String {
    format!(
        "Anda adalah asisten AI yang hanya membalas dalam format JSON.\n\
         Abaikan penjelasan, hanya beri JSON.\n\
         Teks input: \"{case_context}\"\n\
         \n\
         Format JSON yang ketat, hanya balas dengan struktur ini:\n\
         {{\n    \
             \"health_score\": 80,\n    \
             \"severity_level\": \"Ringan/Sedang/Berat\",\n    \
             \"urgency_level\": \"Rendah/Sedang/Tinggi\",\n    \
             \"risk_factors\": [\"faktor 1\"],\n    \
             \"possible_conditions\": [\"kondisi 1\", \"kondisi 2\"],\n    \
             \"recommendations\": [\"rekomendasi 1\", \"rekomendasi 2\"]\n\
         }}\n"
    )
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complaint_and_answers_are_truncated_by_chars() {
        let complaint = "é".repeat(250);
        let mut answers = BTreeMap::new();
        answers.insert("q".to_string(), "a".repeat(500));

        let ctx = build_case_context(&complaint, &answers);
        let (head, tail) = ctx.split_once(". Jawaban: ").unwrap();
        assert_eq!(head.trim_start_matches("Keluhan: ").chars().count(), 200);
        assert_eq!(tail.chars().count(), 300);
        assert!(tail.starts_with("{\"q\":\"aaa"));
    }

    #[test]
    fn short_inputs_are_kept_whole() {
        let mut answers = BTreeMap::new();
        answers.insert("Berapa usia kehamilan Anda saat ini?".to_string(), "12 minggu".to_string());
        let ctx = build_case_context("mual terus menerus", &answers);
        assert_eq!(
            ctx,
            "Keluhan: mual terus menerus. Jawaban: {\"Berapa usia kehamilan Anda saat ini?\":\"12 minggu\"}"
        );
    }

    #[test]
    fn prompt_embeds_context_and_schema() {
        let p = build_analysis_prompt("Keluhan: pusing");
        assert!(p.contains("Teks input: \"Keluhan: pusing\""));
        assert!(p.contains("\"health_score\": 80"));
        assert!(p.contains("\"recommendations\""));
    }
}
