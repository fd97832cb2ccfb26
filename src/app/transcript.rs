use serde::Serialize;

pub const ASSISTANT_GREETING: &str = "Hi! I'm your AI branding assistant. Ask me anything about brand strategy, naming, positioning, or visual identity.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptMessage {
    pub role: Speaker,
    pub content: String,
}

/// 助理對話紀錄，以問候語開頭
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcript {
    messages: Vec<TranscriptMessage>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            messages: vec![TranscriptMessage {
                role: Speaker::Assistant,
                content: ASSISTANT_GREETING.to_string(),
            }],
        }
    }

    pub fn messages(&self) -> &[TranscriptMessage] {
        &self.messages
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(Speaker::User, content.into());
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.push(Speaker::Assistant, content.into());
    }

    fn push(&mut self, role: Speaker, content: String) {
        self.messages.push(TranscriptMessage { role, content });
    }

    pub fn last(&self) -> Option<&TranscriptMessage> {
        self.messages.last()
    }

    pub fn render(&self) -> String {
        self.messages
            .iter()
            .map(|message| match message.role {
                Speaker::User => format!("> {}", message.content),
                Speaker::Assistant => message.content.clone(),
            })
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_with_greeting() {
        let transcript = Transcript::new();
        assert_eq!(transcript.messages().len(), 1);
        assert_eq!(transcript.messages()[0].role, Speaker::Assistant);
        assert_eq!(transcript.messages()[0].content, ASSISTANT_GREETING);
    }

    #[test]
    fn test_turns_alternate() {
        let mut transcript = Transcript::new();
        transcript.push_user("How do I name a bakery?");
        transcript.push_assistant("Here are my suggestions:");

        let roles: Vec<Speaker> = transcript.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, [Speaker::Assistant, Speaker::User, Speaker::Assistant]);
        assert_eq!(
            transcript.render(),
            format!(
                "{}\n\n> How do I name a bakery?\n\nHere are my suggestions:",
                ASSISTANT_GREETING
            )
        );
    }

    #[test]
    fn test_serializes_roles_lowercase() {
        let value = serde_json::to_value(Transcript::new()).unwrap();
        assert_eq!(value["messages"][0]["role"], "assistant");
    }
}
