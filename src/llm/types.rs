//! Wire types for OpenAI-compatible chat completions.

use serde::{Deserialize, Serialize};

/// A chat completion request.
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// A message in a chat conversation.
///
/// Providers may omit `message` or `content` in a response choice; both
/// decode as empty so the handler can reject them instead of failing to
/// parse the whole response.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub content: String,
}

/// The role of a message sender.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    #[default]
    Assistant,
}

/// A chat completion response.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct ChatResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

/// A single completion choice.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct Choice {
    pub index: u32,
    #[serde(default)]
    pub message: Message,
    pub finish_reason: Option<String>,
}

/// Token usage statistics.
#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_serialization() {
        let request = ChatRequest {
            model: "gpt-4.1-mini".to_string(),
            messages: vec![Message {
                role: Role::User,
                content: "请根据以下数据产出一句简短中文推荐理由。".to_string(),
            }],
            temperature: Some(0.2),
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"model\":\"gpt-4.1-mini\""));
        assert!(json.contains("\"role\":\"user\""));
        assert!(json.contains("\"temperature\":0.2"));
        assert!(!json.contains("stream"));
    }

    #[test]
    fn test_chat_request_without_temperature() {
        let request = ChatRequest {
            model: "gpt-4.1-mini".to_string(),
            messages: vec![Message {
                role: Role::User,
                content: "Hi".to_string(),
            }],
            temperature: None,
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("temperature"));
    }

    #[test]
    fn test_chat_response_deserialization() {
        let json = r#"{
            "id": "chatcmpl-123",
            "choices": [
                {
                    "index": 0,
                    "message": {
                        "role": "assistant",
                        "content": "推荐理由：不错的选择。"
                    },
                    "finish_reason": "stop"
                }
            ],
            "usage": {
                "prompt_tokens": 42,
                "completion_tokens": 12,
                "total_tokens": 54
            }
        }"#;

        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.id, "chatcmpl-123");
        assert_eq!(response.choices.len(), 1);
        assert_eq!(response.choices[0].message.role, Role::Assistant);
        assert_eq!(response.choices[0].message.content, "推荐理由：不错的选择。");
        assert_eq!(response.choices[0].finish_reason, Some("stop".to_string()));

        let usage = response.usage.unwrap();
        assert_eq!(usage.prompt_tokens, 42);
        assert_eq!(usage.completion_tokens, 12);
        assert_eq!(usage.total_tokens, 54);
    }

    #[test]
    fn test_choice_without_content_parses_as_empty() {
        let json = r#"{
            "choices": [
                {
                    "index": 0,
                    "message": {"role": "assistant"},
                    "finish_reason": "stop"
                }
            ]
        }"#;

        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert!(response.choices[0].message.content.is_empty());
    }

    #[test]
    fn test_choice_without_message_parses_as_empty() {
        let json = r#"{"choices": [{"index": 0, "finish_reason": "stop"}]}"#;

        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert!(response.choices[0].message.content.is_empty());
        assert_eq!(response.choices[0].message.role, Role::Assistant);
    }

    #[test]
    fn test_chat_response_without_choices() {
        let response: ChatResponse = serde_json::from_str(r#"{"id": "chatcmpl-456"}"#).unwrap();
        assert!(response.choices.is_empty());
        assert!(response.usage.is_none());
    }

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::from_str::<Role>("\"assistant\"").unwrap(),
            Role::Assistant
        );
    }
}
