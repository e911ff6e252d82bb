mod support;

use serde_json::json;
use support::{Step, ScriptedModel, gemini_text, refused, route};
use unisocial_core::analysis::AnalysisResult;
use unisocial_core::transcript::Message;
use unisocial_interaction::{FailureKind, ModelError, PerformanceAnalyzer, ResponseFormat};

fn four_messages() -> Vec<Message> {
    vec![
        Message::character("坐吧。你凭什么觉得你能胜任？"),
        Message::user("我高中参加过演讲比赛，反应很快。"),
        Message::character("演讲和辩论可不一样。"),
        Message::user("没错，但我愿意从头学起，而且逻辑是我的强项。"),
    ]
}

fn analyzer_with(steps: Vec<Step>) -> (PerformanceAnalyzer, std::sync::Arc<ScriptedModel>) {
    let primary = ScriptedModel::new("primary", steps);
    let fallback = ScriptedModel::new("fallback", [Step::Fail(refused())]);
    (PerformanceAnalyzer::new(route(&primary, &fallback), 0.9), primary)
}

#[tokio::test]
async fn short_transcripts_skip_the_model() {
    let (analyzer, primary) = analyzer_with(vec![]);

    for messages in [
        vec![],
        vec![Message::character("开场白")],
        vec![Message::character("开场白"), Message::user("你好")],
    ] {
        let result = analyzer.analyze("社恐破冰", &messages).await;
        assert_eq!(result, AnalysisResult::insufficient_sample());
        assert_eq!(result.score, 0);
        assert_eq!(result.tone_analysis, "样本不足");
    }
    assert_eq!(primary.call_count().await, 0);
}

#[tokio::test]
async fn complete_report_passes_through_unchanged() {
    let report = json!({
        "score": 72,
        "summary": "表达清楚，但略显防御。",
        "strengths": ["A"],
        "improvements": ["B"],
        "toneAnalysis": "confident"
    });
    let (analyzer, primary) =
        analyzer_with(vec![Step::Respond(gemini_text(&report.to_string()))]);

    let result = analyzer.analyze("社团面试自我介绍", &four_messages()).await;

    assert_eq!(
        result,
        AnalysisResult {
            score: 72,
            summary: "表达清楚，但略显防御。".to_string(),
            strengths: vec!["A".to_string()],
            improvements: vec!["B".to_string()],
            tone_analysis: "confident".to_string(),
        }
    );

    let request = primary.last_call().await.unwrap();
    assert!(matches!(request.response_format, ResponseFormat::Json { .. }));
    assert!(request.prompt.contains("社团面试自我介绍"));
}

#[tokio::test]
async fn any_payload_shape_yields_an_in_range_score() {
    let payloads = [
        gemini_text("{\"score\": 250}"),
        gemini_text("{\"score\": -3}"),
        gemini_text("{\"score\": \"88\"}"),
        gemini_text("{\"score\": null, \"strengths\": [1, \"ok\"]}"),
        gemini_text("[1, 2, 3]"),
        gemini_text("不是JSON"),
        gemini_text("```json\n{\"score\": 64}\n```"),
        json!({ "unexpected": true }),
        json!(null),
    ];

    for payload in payloads {
        let (analyzer, _) = analyzer_with(vec![Step::Respond(payload.clone())]);
        let result = analyzer.analyze("t", &four_messages()).await;
        assert!(result.score <= 100, "payload {payload} gave {}", result.score);
        assert!(!result.summary.is_empty());
        assert!(!result.tone_analysis.is_empty());
    }
}

#[tokio::test]
async fn missing_text_parses_as_empty_object() {
    let (analyzer, _) = analyzer_with(vec![Step::Respond(json!({ "candidates": [] }))]);

    let result = analyzer.analyze("t", &four_messages()).await;

    assert_eq!(result, AnalysisResult::from_value(&json!({})));
}

#[tokio::test]
async fn prose_payload_uses_malformed_fallback() {
    let (analyzer, _) =
        analyzer_with(vec![Step::Respond(gemini_text("The user did fine overall."))]);

    let result = analyzer.analyze("t", &four_messages()).await;

    assert_eq!(result, AnalysisResult::malformed_payload());
    assert_eq!(result.score, 50);
}

#[tokio::test]
async fn transport_failure_reports_kind_and_fallback() {
    let (analyzer, _) = analyzer_with(vec![Step::Fail(ModelError::Timeout)]);

    let failure = analyzer.try_analyze("t", &four_messages()).await.unwrap_err();

    // The fallback model's error (connection refused) decides the kind.
    assert_eq!(failure.kind, FailureKind::Network);
    assert_eq!(failure.fallback_analysis, AnalysisResult::service_unavailable());
    assert_eq!(
        analyzer_with(vec![Step::Fail(refused())])
            .0
            .analyze("t", &four_messages())
            .await,
        AnalysisResult::service_unavailable()
    );
}
