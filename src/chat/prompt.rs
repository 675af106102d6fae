//! Prompt assembly for the generative backend.
//!
//! Blocks are concatenated in fixed order and joined by blank lines:
//! optional context, optional serialized history, the current user
//! message, and the instruction suffix requesting an empathetic,
//! Socratic-style reply.

use crate::types::{ConversationContext, Sender};

/// Role labels used when serializing history into the prompt.
const USER_LABEL: &str = "사용자";
const BOT_LABEL: &str = "챗봇";

/// Fixed instruction suffix.
const INSTRUCTION_SUFFIX: &str = "위 상황에 대해 공감적이고 소크라틱한 질문으로 응답해주세요.";

/// Build the full prompt for one request.
pub fn build_prompt(message: &str, context: &ConversationContext) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(ctx) = context.context.as_deref() {
        if !ctx.is_empty() {
            parts.push(format!("컨텍스트: {}", ctx));
        }
    }

    if !context.history.is_empty() {
        let lines: Vec<String> = context
            .history
            .iter()
            .map(|msg| {
                let label = match msg.sender {
                    Sender::User => USER_LABEL,
                    Sender::Bot => BOT_LABEL,
                };
                format!("{}: {}", label, msg.message)
            })
            .collect();
        parts.push(format!("대화 기록:\n{}", lines.join("\n")));
    }

    parts.push(format!("사용자 메시지: {}", message));
    parts.push(INSTRUCTION_SUFFIX.to_string());

    parts.join("\n\n")
}

#[cfg(test)]
mod tests {
    use crate::types::ChatMessage;

    use super::*;

    #[test]
    fn test_minimal_prompt() {
        let prompt = build_prompt("안녕하세요", &ConversationContext::default());
        assert_eq!(
            prompt,
            format!("사용자 메시지: 안녕하세요\n\n{}", INSTRUCTION_SUFFIX)
        );
    }

    #[test]
    fn test_full_prompt_block_order() {
        let context = ConversationContext {
            context: Some("자기자비 시나리오 연습".to_string()),
            history: vec![
                ChatMessage::new(Sender::User, "요즘 힘들어요"),
                ChatMessage::new(Sender::Bot, "어떤 일이 있으셨나요?"),
            ],
        };
        let prompt = build_prompt("상사가 무시해요", &context);

        let expected = "컨텍스트: 자기자비 시나리오 연습\n\n\
                        대화 기록:\n사용자: 요즘 힘들어요\n챗봇: 어떤 일이 있으셨나요?\n\n\
                        사용자 메시지: 상사가 무시해요\n\n\
                        위 상황에 대해 공감적이고 소크라틱한 질문으로 응답해주세요.";
        assert_eq!(prompt, expected);
    }

    #[test]
    fn test_empty_context_string_is_skipped() {
        let context = ConversationContext {
            context: Some(String::new()),
            history: Vec::new(),
        };
        let prompt = build_prompt("안녕", &context);
        assert!(!prompt.contains("컨텍스트"));
    }

    #[test]
    fn test_history_preserves_chronological_order() {
        let context = ConversationContext {
            context: None,
            history: vec![
                ChatMessage::new(Sender::User, "첫 번째"),
                ChatMessage::new(Sender::Bot, "두 번째"),
                ChatMessage::new(Sender::User, "세 번째"),
            ],
        };
        let prompt = build_prompt("지금", &context);
        let first = prompt.find("첫 번째").unwrap();
        let second = prompt.find("두 번째").unwrap();
        let third = prompt.find("세 번째").unwrap();
        assert!(first < second && second < third);
    }
}
