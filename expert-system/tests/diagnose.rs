use std::{
    collections::BTreeMap,
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use ai_llm_service::{AiLlmError, BoxFuture, ModelClient};
use expert_system::{DiagnosisOutcome, InferenceEngine, STANDARD_QUESTIONS};
use serde_json::json;

struct ScriptedModel {
    reply: String,
    calls: AtomicUsize,
    prompts: Mutex<Vec<(String, String)>>,
}

impl ScriptedModel {
    fn new(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        })
    }
}

impl ModelClient for ScriptedModel {
    fn get_response<'a>(
        &'a self,
        query: &'a str,
        context: &'a str,
    ) -> BoxFuture<'a, Result<String, AiLlmError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts
            .lock()
            .unwrap()
            .push((query.to_string(), context.to_string()));
        let reply = self.reply.clone();
        Box::pin(async move { Ok(reply) })
    }
}

fn all_answers() -> BTreeMap<String, String> {
    let replies = ["3 hari", "Ya", "Tidak ada", "10 minggu", "Belum"];
    STANDARD_QUESTIONS
        .iter()
        .zip(replies)
        .map(|(q, a)| (q.to_string(), a.to_string()))
        .collect()
}

#[tokio::test]
async fn no_answers_returns_questionnaire_without_model_call() {
    let model = ScriptedModel::new("{}");
    let engine = InferenceEngine::new(model.clone());

    let out = engine.diagnose("mual terus menerus", None).await.unwrap();
    let DiagnosisOutcome::Questions(q) = out else {
        panic!("expected questionnaire");
    };
    assert_eq!(q.questions, STANDARD_QUESTIONS.map(String::from).to_vec());
    assert_eq!(q.total_questions, 5);
    assert_eq!(q.severity_initial, "Sedang");
    assert_eq!(q.progress, 0);

    let out = engine
        .diagnose("mual terus menerus", Some(BTreeMap::new()))
        .await
        .unwrap();
    assert!(matches!(out, DiagnosisOutcome::Questions(_)));
    assert_eq!(model.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn answers_trigger_exactly_one_model_call() {
    let reply = json!({
        "health_score": 65,
        "severity_level": "Sedang",
        "urgency_level": "Sedang",
        "possible_conditions": ["morning sickness"],
        "recommendations": ["makan porsi kecil tapi sering"]
    })
    .to_string();
    let model = ScriptedModel::new(&reply);
    let engine = InferenceEngine::new(model.clone());

    let out = engine
        .diagnose("mual terus menerus", Some(all_answers()))
        .await
        .unwrap();
    assert_eq!(model.calls.load(Ordering::SeqCst), 1);

    let DiagnosisOutcome::Result(r) = out else {
        panic!("expected result");
    };
    assert_eq!(r.initial_complaint, "mual terus menerus");
    assert_eq!(r.answers.len(), 5);
    assert_eq!(r.health_score.as_u64(), Some(65));
    assert_eq!(r.severity_level, "Sedang");
    assert!(r.risk_factors.is_empty());
    assert_eq!(r.possible_conditions, vec!["morning sickness"]);

    let prompts = model.prompts.lock().unwrap();
    let (prompt, context) = &prompts[0];
    assert!(prompt.contains("Keluhan: mual terus menerus. Jawaban: "));
    assert_eq!(context, "");
}

#[tokio::test]
async fn empty_reply_uses_connection_fallback() {
    let engine = InferenceEngine::new(ScriptedModel::new("   "));
    let DiagnosisOutcome::Result(r) = engine
        .diagnose("pusing", Some(all_answers()))
        .await
        .unwrap()
    else {
        panic!("expected result");
    };
    assert_eq!(r.health_score.as_u64(), Some(50));
    assert_eq!(r.severity_level, "Ringan");
    assert_eq!(r.urgency_level, "Rendah");
    assert_eq!(r.possible_conditions, vec!["Data tidak cukup"]);
    assert_eq!(r.recommendations, vec!["Silakan periksa koneksi atau coba lagi"]);
}

#[tokio::test]
async fn prose_reply_uses_processing_fallback() {
    let engine = InferenceEngine::new(ScriptedModel::new("Maaf, saya tidak yakin."));
    let DiagnosisOutcome::Result(r) = engine
        .diagnose("pusing", Some(all_answers()))
        .await
        .unwrap()
    else {
        panic!("expected result");
    };
    assert_eq!(r.health_score.as_u64(), Some(50));
    assert_eq!(r.possible_conditions, vec!["Gagal memproses data"]);
    assert_eq!(
        r.recommendations,
        vec!["Silakan coba lagi atau konsultasi dengan dokter"]
    );
}

#[tokio::test]
async fn questionnaire_serializes_flat() {
    let engine = InferenceEngine::new(ScriptedModel::new(""));
    let out = engine.diagnose("kram kaki", None).await.unwrap();
    let v = serde_json::to_value(&out).unwrap();
    assert_eq!(v["total_questions"], 5);
    assert_eq!(v["questions"].as_array().unwrap().len(), 5);
    assert!(v.get("health_score").is_none());
}

#[tokio::test]
async fn quoted_score_uses_processing_fallback() {
    let reply = json!({
        "health_score": "75",
        "severity_level": "Berat",
        "urgency_level": "Tinggi",
        "possible_conditions": ["preeklamsia"],
        "recommendations": ["segera ke rumah sakit"]
    })
    .to_string();
    let engine = InferenceEngine::new(ScriptedModel::new(&reply));
    let DiagnosisOutcome::Result(r) = engine
        .diagnose("sakit kepala hebat", Some(all_answers()))
        .await
        .unwrap()
    else {
        panic!("expected result");
    };
    assert_eq!(r.health_score.as_u64(), Some(50));
    assert_eq!(r.severity_level, "Ringan");
    assert_eq!(r.possible_conditions, vec!["Gagal memproses data"]);
}
