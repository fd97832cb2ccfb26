use crate::domain::completion::{
    ChatCompletionRequest, ChatMessage, FunctionDefinition, Tool, ToolChoice,
};
use crate::domain::model::GenerationRequest;
use serde_json::json;

pub const TOOL_NAME: &str = "generate_brand_identity";

pub const SYSTEM_PROMPT: &str = "You are BrandForge, an expert AI branding strategist. Given a brand idea/keywords and optionally an industry, generate a complete brand identity. You MUST respond by calling the generate_brand_identity tool.";

pub fn user_prompt(request: &GenerationRequest) -> String {
    let industry = request
        .industry
        .as_deref()
        .map(|industry| format!("\nIndustry: \"{}\"", industry))
        .unwrap_or_default();

    format!(
        "Brand idea: \"{}\"{}\n\nGenerate a complete brand identity with creative, memorable names and compelling copy.",
        request.brand_idea, industry
    )
}

/// Tool schema: six required fields, nothing else allowed.
pub fn brand_identity_tool() -> Tool {
    Tool {
        tool_type: "function".to_string(),
        function: FunctionDefinition {
            name: TOOL_NAME.to_string(),
            description: Some("Generate a complete brand identity package".to_string()),
            parameters: json!({
                "type": "object",
                "properties": {
                    "brandNames": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "5 unique brand name suggestions"
                    },
                    "tagline": { "type": "string", "description": "A catchy tagline" },
                    "missionStatement": {
                        "type": "string",
                        "description": "A compelling mission statement (2-3 sentences)"
                    },
                    "brandVoice": {
                        "type": "string",
                        "description": "Description of the brand voice and tone (2-3 sentences)"
                    },
                    "colorSuggestions": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "5 hex color codes for a brand palette"
                    },
                    "elevatorPitch": { "type": "string", "description": "A 3-4 sentence elevator pitch" }
                },
                "required": [
                    "brandNames",
                    "tagline",
                    "missionStatement",
                    "brandVoice",
                    "colorSuggestions",
                    "elevatorPitch"
                ],
                "additionalProperties": false
            }),
        },
    }
}

pub fn build_completion_request(model: &str, request: &GenerationRequest) -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(user_prompt(request)),
        ],
        tools: vec![brand_identity_tool()],
        tool_choice: ToolChoice::function(TOOL_NAME),
    }
}
