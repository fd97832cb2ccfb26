//! OpenAI-compatible chat completion wire format, limited to the fields the
//! brand identity call sends and reads.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDefinition {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub parameters: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    #[serde(rename = "type")]
    pub tool_type: String,
    pub function: FunctionDefinition,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionName {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolChoice {
    #[serde(rename = "type")]
    pub choice_type: String,
    pub function: FunctionName,
}

impl ToolChoice {
    /// Forces the model to answer through the named function.
    pub fn function(name: impl Into<String>) -> Self {
        Self {
            choice_type: "function".to_string(),
            function: FunctionName { name: name.into() },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub tools: Vec<Tool>,
    pub tool_choice: ToolChoice,
}

impl ChatCompletionRequest {
    pub fn user_message(&self) -> Option<&str> {
        self.messages
            .iter()
            .find(|m| m.role == Role::User)
            .map(|m| m.content.as_str())
    }
}

// Response side: every level is optional, the gateway is not trusted to fill them.

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Option<Vec<Option<Choice>>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: Option<ResponseMessage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
    pub tool_calls: Option<Vec<Option<ToolCall>>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToolCall {
    pub id: Option<String>,
    pub function: Option<FunctionCall>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FunctionCall {
    pub name: Option<String>,
    pub arguments: Option<String>,
}

impl ChatCompletionResponse {
    /// Arguments of the first tool call of the first choice, if non-empty.
    pub fn first_tool_arguments(&self) -> Option<&str> {
        self.choices
            .as_ref()?
            .first()?
            .as_ref()?
            .message
            .as_ref()?
            .tool_calls
            .as_ref()?
            .first()?
            .as_ref()?
            .function
            .as_ref()?
            .arguments
            .as_deref()
            .filter(|args| !args.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_choice_serialization() {
        let choice = ToolChoice::function("generate_brand_identity");
        assert_eq!(
            serde_json::to_value(&choice).unwrap(),
            json!({"type": "function", "function": {"name": "generate_brand_identity"}})
        );
    }

    #[test]
    fn test_first_tool_arguments() {
        let response: ChatCompletionResponse = serde_json::from_value(json!({
            "choices": [{
                "message": {
                    "role": "assistant",
                    "content": null,
                    "tool_calls": [{
                        "id": "call_1",
                        "type": "function",
                        "function": {"name": "generate_brand_identity", "arguments": "{\"tagline\":\"hi\"}"}
                    }]
                }
            }]
        }))
        .unwrap();
        assert_eq!(response.first_tool_arguments(), Some("{\"tagline\":\"hi\"}"));
    }

    #[test]
    fn test_missing_tool_call_levels() {
        let cases = [
            json!({}),
            json!({"choices": []}),
            json!({"choices": [{"message": {"content": "plain text answer"}}]}),
            json!({"choices": [{"message": {"tool_calls": []}}]}),
            json!({"choices": [{"message": {"tool_calls": [{"function": {"name": "x"}}]}}]}),
            json!({"choices": [{"message": {"tool_calls": [{"function": {"arguments": ""}}]}}]}),
            json!({"choices": null}),
            json!({"choices": [null]}),
            json!({"choices": [{"message": null}]}),
            json!({"choices": [{"message": {"tool_calls": null}}]}),
            json!({"choices": [{"message": {"tool_calls": [null]}}]}),
            json!({"choices": [{"message": {"tool_calls": [{"function": null}]}}]}),
            json!({"choices": [{"message": {"tool_calls": [{"function": {"arguments": null}}]}}]}),
        ];
        for case in cases {
            let response: ChatCompletionResponse = serde_json::from_value(case).unwrap();
            assert_eq!(response.first_tool_arguments(), None);
        }
    }
}
