//! Prompt templates for replies and analyses.

use minijinja::{Environment, context};
use serde_json::{Value, json};
use unisocial_core::transcript::{Message, render_transcript};

const REPLY_TEMPLATE: &str = "{{ persona }}

Transcript:
{{ transcript }}

Respond as the role-play partner in a natural conversational way.";

const ANALYSIS_TEMPLATE: &str = r#"Analyze the following role-play conversation based on the scenario: "{{ title }}".
The user is "用户" and the role-play partner is "AI".

Evaluate the user's communication skill, empathy, clarity, and goal achievement.

Transcript:
{{ transcript }}

Please return a JSON object with the following structure:
{
  "score": number, // 0-100分的评分
  "summary": string, // 简要总结
  "strengths": string[], // 用户表现的优点
  "improvements": string[], // 需要改进的地方
  "toneAnalysis": string // 语言和语气分析
}"#;

/// Persona instruction, role-labeled transcript, then the reply cue.
pub fn reply_prompt(persona_instruction: &str, messages: &[Message]) -> Result<String, minijinja::Error> {
    Environment::new().render_str(
        REPLY_TEMPLATE,
        context! {
            persona => persona_instruction.trim(),
            transcript => render_transcript(messages),
        },
    )
}

pub fn analysis_prompt(scenario_title: &str, messages: &[Message]) -> Result<String, minijinja::Error> {
    Environment::new().render_str(
        ANALYSIS_TEMPLATE,
        context! {
            title => scenario_title,
            transcript => render_transcript(messages),
        },
    )
}

/// Response schema for structured output mode (OpenAPI subset used by Gemini).
pub fn analysis_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "score": { "type": "INTEGER", "description": "0-100" },
            "summary": { "type": "STRING" },
            "strengths": { "type": "ARRAY", "items": { "type": "STRING" } },
            "improvements": { "type": "ARRAY", "items": { "type": "STRING" } },
            "toneAnalysis": { "type": "STRING" }
        },
        "required": ["score", "summary", "strengths", "improvements", "toneAnalysis"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use unisocial_core::transcript::Transcript;

    #[test]
    fn reply_prompt_layout() {
        let mut transcript = Transcript::open("（低头看着手机）");
        transcript.push_user("嗨，你也是一个人吗？");

        let prompt = reply_prompt("  You are a shy student.\n", transcript.messages()).unwrap();

        assert_eq!(
            prompt,
            "You are a shy student.\n\nTranscript:\nAI: （低头看着手机）\n用户: 嗨，你也是一个人吗？\n\nRespond as the role-play partner in a natural conversational way."
        );
    }

    #[test]
    fn analysis_prompt_embeds_title_and_transcript() {
        let mut transcript = Transcript::open("进来。");
        transcript.push_user("王教授好，我想申请延期。");

        let prompt = analysis_prompt("向严厉教授请假", transcript.messages()).unwrap();

        assert!(prompt.contains("scenario: \"向严厉教授请假\""));
        assert!(prompt.contains("用户: 王教授好，我想申请延期。"));
        assert!(prompt.contains("\"toneAnalysis\": string"));
        assert!(prompt.contains("empathy"));
    }

    #[test]
    fn persona_text_is_not_interpreted_as_template() {
        let prompt = reply_prompt("Say {{ nothing }} literally", &[]).unwrap();
        assert!(prompt.starts_with("Say {{ nothing }} literally"));
    }

    #[test]
    fn schema_requires_every_field() {
        let schema = analysis_schema();
        assert_eq!(schema["required"].as_array().unwrap().len(), 5);
    }
}
