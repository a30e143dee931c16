// ABOUTME: End-to-end generation tests using the Gemini client against a mock server
// ABOUTME: Covers prompt delivery, structured-output parameters, and error translation

use namecraft_ai::{AIService, AIServiceConfig};
use namecraft_core::{Gender, NamingRequest, Style, GENERATION_FAILED_MESSAGE};
use namecraft_generator::{NameGenerator, Phase};
use serde_json::json;
use wiremock::matchers::{body_partial_json, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ENDPOINT: &str = "/v1beta/models/gemini-3-flash-preview:generateContent";

fn generator_for(server: &MockServer) -> NameGenerator {
    let service =
        AIService::new(AIServiceConfig::new("test-key").with_base_url(server.uri())).unwrap();
    NameGenerator::new(service)
}

fn candidate_text(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": text}]},
            "finishReason": "STOP"
        }],
        "usageMetadata": {"promptTokenCount": 200, "candidatesTokenCount": 400}
    })
}

#[tokio::test]
async fn test_person_request_round_trip() {
    let server = MockServer::start().await;
    let payload = r#"[{"fullName":"张明轩","meaning":"光明磊落","source":"《诗经·大雅》","elements":["木","火"],"analysis":"音律和谐"}]"#;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(body_string_contains("张"))
        .and(body_string_contains("2024"))
        .and(body_partial_json(json!({
            "generationConfig": {
                "responseMimeType": "application/json",
                "temperature": 0.85,
                "topP": 0.95
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_text(payload)))
        .expect(1)
        .mount(&server)
        .await;

    let generator = generator_for(&server);
    generator
        .submit(NamingRequest::person("张", Gender::Male, Some(2024), Style::Poetic))
        .await
        .unwrap();

    let state = generator.state();
    assert_eq!(state.phase(), Phase::Success);
    assert_eq!(state.results()[0].source.as_deref(), Some("《诗经·大雅》"));
}

#[tokio::test]
async fn test_company_request_uses_baseline_temperature() {
    let server = MockServer::start().await;
    let payload = r#"[{"fullName":"智远科技","meaning":"智慧致远","elements":["创新"],"analysis":"简洁有力"}]"#;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .and(body_partial_json(json!({
            "generationConfig": {"temperature": 0.8, "topP": 0.95}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_text(payload)))
        .expect(1)
        .mount(&server)
        .await;

    let generator = generator_for(&server);
    generator
        .submit(NamingRequest::company("科技", Style::Professional))
        .await
        .unwrap();

    assert_eq!(generator.state().results()[0].full_name, "智远科技");
}

#[tokio::test]
async fn test_server_error_becomes_generic_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "error": {"code": 503, "message": "The model is overloaded.", "status": "UNAVAILABLE"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let generator = generator_for(&server);
    generator
        .submit(NamingRequest::pet("李", Gender::Female, Style::Natural))
        .await
        .unwrap();

    let state = generator.state();
    assert_eq!(state.error_message(), Some(GENERATION_FAILED_MESSAGE));
    assert!(!state.error_message().unwrap().contains("overloaded"));
}

#[tokio::test]
async fn test_fenced_payload_is_accepted() {
    let server = MockServer::start().await;
    let fenced = "```json\n[{\"fullName\":\"星语\",\"meaning\":\"m\",\"elements\":[],\"analysis\":\"a\"}]\n```";

    Mock::given(method("POST"))
        .and(path(ENDPOINT))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_text(fenced)))
        .mount(&server)
        .await;

    let generator = generator_for(&server);
    generator
        .submit(NamingRequest::brand("香水", Style::Creative))
        .await
        .unwrap();

    assert_eq!(generator.state().results()[0].full_name, "星语");
}
