mod support;

use std::sync::Arc;
use support::{Step, ScriptedModel, gemini_text, refused, service};
use unisocial_core::scenario::ScenarioCatalog;
use unisocial_core::session::SessionController;
use unisocial_core::transcript::Sender;
use unisocial_interaction::FailureKind;

fn scenario() -> unisocial_core::scenario::Scenario {
    ScenarioCatalog::default()
        .get("social_party")
        .cloned()
        .unwrap()
}

#[tokio::test]
async fn network_failure_reply_does_not_block_the_next_turn() {
    let primary = ScriptedModel::new(
        "primary",
        [Step::Fail(refused()), Step::Respond(gemini_text("……你也喜欢打游戏吗？"))],
    );
    let fallback = ScriptedModel::new("fallback", [Step::Fail(refused())]);
    let mut session = SessionController::start(Arc::new(service(&primary, &fallback)), scenario());

    let first = session.send("你好呀").await.unwrap().clone();
    assert_eq!(first.sender, Sender::Character);
    assert_eq!(first.text, FailureKind::Network.reply_text());
    assert!(first.text.contains("防火墙"));

    let second = session.send("我看你在玩手机游戏").await.unwrap();
    assert_eq!(second.text, "……你也喜欢打游戏吗？");
    assert_eq!(session.transcript().len(), 5);
}

#[tokio::test]
async fn ending_right_after_the_first_line_gives_short_sample_report() {
    let primary = ScriptedModel::new("primary", [Step::Respond(gemini_text("嗯"))]);
    let fallback = ScriptedModel::idle("fallback");
    let mut session = SessionController::start(Arc::new(service(&primary, &fallback)), scenario());

    let report = session.end_session().await;

    assert_eq!(report.analysis.score, 0);
    assert_eq!(report.analysis.tone_analysis, "样本不足");
    assert_eq!(primary.call_count().await, 0);
}

#[tokio::test]
async fn full_session_is_analyzed_once() {
    let report = r#"{"score":81,"summary":"不错","strengths":["主动"],"improvements":["多提问"],"toneAnalysis":"友好"}"#;
    let primary = ScriptedModel::new(
        "primary",
        [
            Step::Respond(gemini_text("……嗯，是啊。")),
            Step::Respond(gemini_text(report)),
        ],
    );
    let fallback = ScriptedModel::idle("fallback");
    let mut session = SessionController::start(Arc::new(service(&primary, &fallback)), scenario());

    session.send("你也是一个人来的吗？").await.unwrap();
    let score = session.end_session().await.analysis.score;
    let again = session.end_session().await.analysis.score;

    assert_eq!(score, 81);
    assert_eq!(again, 81);
    assert_eq!(primary.call_count().await, 2);
    assert!(session.send("还在吗").await.is_err());
}
