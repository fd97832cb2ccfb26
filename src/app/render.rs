use crate::domain::model::BrandIdentity;

/// Which part of the identity to present, mirroring the single-purpose tools
/// of the web app. Each view may preset the industry sent with the idea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Showcase {
    #[default]
    Full,
    Names,
    Content,
    Palette,
    Sentiment,
    Assistant,
}

impl Showcase {
    pub fn preset_industry(self) -> Option<&'static str> {
        match self {
            Showcase::Full | Showcase::Names => None,
            Showcase::Content => Some("content marketing"),
            Showcase::Palette => Some("visual identity"),
            Showcase::Sentiment => Some("sentiment analysis"),
            Showcase::Assistant => Some("branding advice"),
        }
    }

    pub fn render(self, identity: &BrandIdentity) -> String {
        match self {
            Showcase::Full => [
                names_section(identity),
                section("Tagline", &format!("\"{}\"", identity.tagline)),
                section("Mission Statement", &identity.mission_statement),
                section("Brand Voice", &identity.brand_voice),
                palette_section(identity),
                section("Elevator Pitch", &identity.elevator_pitch),
            ]
            .join("\n"),
            Showcase::Names => names_section(identity),
            Showcase::Content => [
                section("Tagline", &identity.tagline),
                section("Mission Statement", &identity.mission_statement),
                section("Elevator Pitch", &identity.elevator_pitch),
            ]
            .join("\n"),
            Showcase::Palette => [
                palette_section(identity),
                section("Design Direction", &identity.brand_voice),
            ]
            .join("\n"),
            Showcase::Sentiment => sentiment_section(identity),
            Showcase::Assistant => assistant_reply(identity),
        }
    }
}

const DEFAULT_REASONING: &str = "This name evokes trust and innovation.";

/// Perception label of one suggested name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentimentResult {
    pub brand_name: String,
    pub sentiment: &'static str,
    pub reasoning: String,
}

/// Labels cycle by position in the suggestion list.
pub fn sentiment_label(index: usize) -> &'static str {
    match index % 3 {
        0 => "Very Positive",
        1 => "Positive",
        _ => "Neutral",
    }
}

/// One result per name; the brand voice is the reasoning for each of them.
pub fn sentiment_results(identity: &BrandIdentity) -> Vec<SentimentResult> {
    let reasoning = if identity.brand_voice.is_empty() {
        DEFAULT_REASONING
    } else {
        identity.brand_voice.as_str()
    };
    identity
        .brand_names
        .iter()
        .enumerate()
        .map(|(i, name)| SentimentResult {
            brand_name: name.clone(),
            sentiment: sentiment_label(i),
            reasoning: reasoning.to_string(),
        })
        .collect()
}

pub fn assistant_reply(identity: &BrandIdentity) -> String {
    format!(
        "Here are my suggestions:\n\n**Tagline:** {}\n\n**Brand Voice:** {}\n\n**Elevator Pitch:** {}",
        identity.tagline, identity.brand_voice, identity.elevator_pitch
    )
}

fn section(title: &str, body: &str) -> String {
    format!("{}\n{}\n", title, body)
}

fn names_section(identity: &BrandIdentity) -> String {
    let names: Vec<String> = identity
        .brand_names
        .iter()
        .enumerate()
        .map(|(i, name)| format!("  {}. {}", i + 1, name))
        .collect();
    section("Brand Name Suggestions", &names.join("\n"))
}

fn sentiment_section(identity: &BrandIdentity) -> String {
    let rows: Vec<String> = sentiment_results(identity)
        .iter()
        .enumerate()
        .map(|(i, result)| {
            format!(
                "  {}. {} ({})\n     {}",
                i + 1,
                result.brand_name,
                result.sentiment,
                result.reasoning
            )
        })
        .collect();
    section("Sentiment Analysis", &rows.join("\n"))
}

fn palette_section(identity: &BrandIdentity) -> String {
    section("Color Palette", &identity.color_suggestions.join("  "))
}
