use brand_forge::{
    BrandError, BrandHandler, FormController, HttpGateway, LambdaConfig, LocalEndpoint,
    RemoteEndpoint, Showcase, Transcript,
};
use httpmock::prelude::*;
use serde_json::{json, Value};

fn identity() -> Value {
    json!({
        "brandNames": ["Pulse Forge", "Stride Lab", "Rep Ritual", "Kinetic Kin", "Form Fuel"],
        "tagline": "Train with intent.",
        "missionStatement": "We make every workout count.",
        "brandVoice": "Energetic, direct and encouraging.",
        "colorSuggestions": ["#FF5A36", "#1B1B1E", "#F5F5F5", "#3A86FF", "#FFBE0B"],
        "elevatorPitch": "Pulse Forge turns spare minutes into progress."
    })
}

#[tokio::test]
async fn test_remote_endpoint_success() {
    let server = MockServer::start();
    let function_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/functions/v1/generate-brand")
            .header("Authorization", "Bearer anon-key")
            .json_body(json!({"brandIdea": "fitness app", "industry": "Health"}));
        then.status(200)
            .header("Access-Control-Allow-Origin", "*")
            .json_body(identity());
    });

    let endpoint = RemoteEndpoint::new(server.url("/functions/v1/generate-brand"))
        .with_bearer_token("anon-key");
    let form = FormController::new(endpoint);

    let result = form
        .submit("  fitness app ", Some(" Health "), Showcase::Full)
        .await
        .unwrap();

    function_mock.assert();
    assert_eq!(result.brand_names.len(), 5);
    assert_eq!(result.tagline, "Train with intent.");
    assert_eq!(serde_json::to_value(&result).unwrap(), identity());
}

#[tokio::test]
async fn test_remote_endpoint_error_message_verbatim() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/generate-brand");
        then.status(402)
            .json_body(json!({"error": "AI usage limit reached. Please add credits."}));
    });

    let form = FormController::new(RemoteEndpoint::new(server.url("/generate-brand")));
    let err = form
        .submit("fitness app", None, Showcase::Names)
        .await
        .unwrap_err();

    match err {
        BrandError::RemoteError { status, message } => {
            assert_eq!(status, 402);
            assert_eq!(message, "AI usage limit reached. Please add credits.");
        }
        other => panic!("expected RemoteError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_view_preset_industry_sent() {
    let server = MockServer::start();
    let function_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/generate-brand")
            .json_body(json!({"brandIdea": "Lumen", "industry": "branding advice"}));
        then.status(200).json_body(identity());
    });

    let form = FormController::new(RemoteEndpoint::new(server.url("/generate-brand")));
    let identity = form
        .submit("Lumen", None, Showcase::Assistant)
        .await
        .unwrap();

    function_mock.assert();
    assert!(Showcase::Assistant
        .render(&identity)
        .starts_with("Here are my suggestions:"));
}

#[tokio::test]
async fn test_in_process_chain_through_gateway() {
    let server = MockServer::start();
    let arguments = identity().to_string();
    let gateway_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/chat/completions")
            .header("Authorization", "Bearer local-key")
            .body_contains("Brand idea: \\\"fitness app\\\"");
        then.status(200).json_body(json!({
            "choices": [{
                "message": {
                    "tool_calls": [{
                        "type": "function",
                        "function": {"name": "generate_brand_identity", "arguments": arguments}
                    }]
                }
            }]
        }));
    });

    let config = LambdaConfig {
        api_key: Some("local-key".to_string()),
        gateway_url: server.url("/v1/chat/completions"),
        model: "test-model".to_string(),
        strict_identity: true,
    };
    let handler = BrandHandler::new(HttpGateway::new(config.gateway_url.clone()), config);
    let form = FormController::new(LocalEndpoint::new(handler));

    let result = form
        .submit("fitness app", None, Showcase::Full)
        .await
        .unwrap();

    gateway_mock.assert();
    assert_eq!(result.color_suggestions[0], "#FF5A36");
    assert!(Showcase::Full.render(&result).contains("Pulse Forge"));
}

#[tokio::test]
async fn test_in_process_rate_limit_surfaces_to_form() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(429);
    });

    let config = LambdaConfig {
        api_key: Some("local-key".to_string()),
        gateway_url: server.url("/v1/chat/completions"),
        model: "test-model".to_string(),
        strict_identity: false,
    };
    let handler = BrandHandler::new(HttpGateway::new(config.gateway_url.clone()), config);
    let form = FormController::new(LocalEndpoint::new(handler));

    let err = form
        .submit("fitness app", None, Showcase::Full)
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Rate limit exceeded. Please try again in a moment."
    );
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_assistant_transcript_over_remote_endpoint() {
    let server = MockServer::start();
    let function_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/generate-brand")
            .json_body(json!({"brandIdea": "How should I position a gym app?", "industry": "branding advice"}));
        then.status(200).json_body(identity());
    });

    let form = FormController::new(RemoteEndpoint::new(server.url("/generate-brand")));
    let mut transcript = Transcript::new();
    form.ask(&mut transcript, "How should I position a gym app?")
        .await
        .unwrap();

    function_mock.assert();
    let messages = transcript.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].content, "How should I position a gym app?");
    assert!(messages[2].content.contains("**Tagline:** Train with intent."));
}

#[tokio::test]
async fn test_sentiment_view_sends_preset() {
    let server = MockServer::start();
    let function_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/generate-brand")
            .json_body(json!({"brandIdea": "Pulse Forge", "industry": "sentiment analysis"}));
        then.status(200).json_body(identity());
    });

    let form = FormController::new(RemoteEndpoint::new(server.url("/generate-brand")));
    let result = form
        .submit("Pulse Forge", None, Showcase::Sentiment)
        .await
        .unwrap();

    function_mock.assert();
    let text = Showcase::Sentiment.render(&result);
    assert!(text.contains("1. Pulse Forge (Very Positive)"));
    assert!(text.contains("3. Rep Ritual (Neutral)"));
    assert!(text.contains("Energetic, direct and encouraging."));
}
