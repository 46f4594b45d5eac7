//! Input and output record types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One question/answer/reasoning record from the input dataset.
///
/// Every field except `system` is required; a record missing one fails the
/// run rather than being skipped.
#[derive(Debug, Clone, Deserialize)]
pub struct QaRecord {
    /// The question text.
    pub question: String,

    /// Option label to option text, in dataset order.
    ///
    /// Label order is preserved because it drives prompt construction.
    pub options: IndexMap<String, String>,

    /// Label of the correct option (e.g. `A`). Consumed as opaque text.
    pub answer_idx: String,

    /// The reasoning trace produced upstream. May contain newlines.
    pub ds_think: String,

    /// Optional per-record system directive. Takes priority over any
    /// globally supplied directive.
    #[serde(default)]
    pub system: Option<String>,
}

/// A single chat message in the `messages` layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Message role: `system`, `user`, or `assistant`.
    pub role: String,
    /// Message content.
    pub content: String,
}

impl ChatMessage {
    /// Creates a system message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Creates a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }

    /// Creates an assistant message.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant".to_string(),
            content: content.into(),
        }
    }
}

/// A single turn in the `sharegpt` layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// Speaker: `human` or `gpt`.
    pub from: String,
    /// Turn content.
    pub value: String,
}

impl ConversationTurn {
    /// Creates a human turn.
    #[must_use]
    pub fn human(value: impl Into<String>) -> Self {
        Self {
            from: "human".to_string(),
            value: value.into(),
        }
    }

    /// Creates a gpt turn.
    #[must_use]
    pub fn gpt(value: impl Into<String>) -> Self {
        Self {
            from: "gpt".to_string(),
            value: value.into(),
        }
    }
}

/// One transformed training record, in exactly one of the four layouts.
///
/// The variant set is closed: the transformer dispatches over
/// [`super::SftSchema`] exhaustively, so adding a layout is a
/// compiler-checked change. An absent system directive is represented by
/// key absence, never by `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SftRecord {
    /// Role/content message list (`{"messages": [...]}`).
    Messages {
        /// Optional system message first, then user, then assistant.
        messages: Vec<ChatMessage>,
    },

    /// ShareGPT single-turn conversation.
    ShareGpt {
        /// Resolved system directive, if any.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        system: Option<String>,
        /// Human turn followed by gpt turn.
        conversations: Vec<ConversationTurn>,
    },

    /// Alpaca-style input/output pair.
    Alpaca {
        /// Resolved system directive, if any.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        system: Option<String>,
        /// The composed user prompt.
        input: String,
        /// The composed reasoning response.
        output: String,
    },

    /// Plain query/response pair.
    QueryResponse {
        /// Resolved system directive, if any.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        system: Option<String>,
        /// The composed user prompt.
        query: String,
        /// The composed reasoning response.
        response: String,
    },
}

impl SftRecord {
    /// Builds a `messages` record.
    #[must_use]
    pub fn messages(system: Option<String>, prompt: String, response: String) -> Self {
        let mut messages = Vec::with_capacity(3);
        if let Some(directive) = system {
            messages.push(ChatMessage::system(directive));
        }
        messages.push(ChatMessage::user(prompt));
        messages.push(ChatMessage::assistant(response));
        Self::Messages { messages }
    }

    /// Builds a `sharegpt` record.
    #[must_use]
    pub fn sharegpt(system: Option<String>, prompt: String, response: String) -> Self {
        Self::ShareGpt {
            system,
            conversations: vec![ConversationTurn::human(prompt), ConversationTurn::gpt(response)],
        }
    }

    /// Builds an `alpaca-style` record.
    #[must_use]
    pub const fn alpaca(system: Option<String>, input: String, output: String) -> Self {
        Self::Alpaca {
            system,
            input,
            output,
        }
    }

    /// Builds a `query-response` record.
    #[must_use]
    pub const fn query_response(system: Option<String>, query: String, response: String) -> Self {
        Self::QueryResponse {
            system,
            query,
            response,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qa_record_preserves_option_order() {
        let raw = r#"{
            "question": "Q",
            "options": {"C": "third", "A": "first", "B": "second"},
            "answer_idx": "A",
            "ds_think": "t"
        }"#;
        let record: QaRecord = serde_json::from_str(raw).unwrap();
        let labels: Vec<&String> = record.options.keys().collect();
        assert_eq!(labels, ["C", "A", "B"]);
        assert!(record.system.is_none());
    }

    #[test]
    fn test_qa_record_missing_field_is_an_error() {
        let raw = r#"{"options": {}, "answer_idx": "A", "ds_think": "t"}"#;
        let result: Result<QaRecord, _> = serde_json::from_str(raw);
        assert!(result.is_err());
    }

    #[test]
    fn test_messages_record_orders_roles() {
        let record = SftRecord::messages(
            Some("be terse".to_string()),
            "prompt".to_string(),
            "response".to_string(),
        );
        let SftRecord::Messages { messages } = &record else {
            panic!("wrong variant");
        };
        let roles: Vec<&str> = messages.iter().map(|m| m.role.as_str()).collect();
        assert_eq!(roles, ["system", "user", "assistant"]);
    }

    #[test]
    fn test_messages_record_without_directive() {
        let record = SftRecord::messages(None, "prompt".to_string(), "response".to_string());
        let SftRecord::Messages { messages } = &record else {
            panic!("wrong variant");
        };
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "user");
    }

    #[test]
    fn test_absent_system_is_omitted_not_null() {
        let record = SftRecord::sharegpt(None, "p".to_string(), "r".to_string());
        let value = serde_json::to_value(&record).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("system"));
        assert!(object.contains_key("conversations"));
    }

    #[test]
    fn test_present_system_serializes_first() {
        let record = SftRecord::alpaca(
            Some("helpful".to_string()),
            "in".to_string(),
            "out".to_string(),
        );
        let text = serde_json::to_string(&record).unwrap();
        assert_eq!(text, r#"{"system":"helpful","input":"in","output":"out"}"#);
    }

    #[test]
    fn test_round_trip_query_response() {
        let record = SftRecord::query_response(None, "q".to_string(), "r".to_string());
        let text = serde_json::to_string(&record).unwrap();
        let back: SftRecord = serde_json::from_str(&text).unwrap();
        assert_eq!(back, record);
    }
}
