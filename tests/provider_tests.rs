// Integration tests for the LLM provider clients against a mock HTTP server

#[cfg(test)]
mod provider_integration_tests {
    use reqgen_lib::config::GenerationConfig;
    use reqgen_lib::generation::{generate_requirements, GenerationError, LlmClient};
    use reqgen_lib::templates::REQUIREMENTS_SYSTEM_PROMPT;
    use std::time::Duration;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const GENERATED: &str = "## 1. PRODUCT OVERVIEW\n**TutorLink** matches tutors.\n\n## 2. SUCCESS METRICS (KPIs)\nBookings - per week";

    fn client_for(provider: &str, server: &MockServer, api_key: Option<&str>) -> LlmClient {
        let config = GenerationConfig::for_provider(
            provider,
            None,
            Some(server.uri()),
            api_key.map(|k| k.to_string()),
        )
        .expect("valid provider")
        .with_timeout(Duration::from_secs(5));
        LlmClient::new(config).expect("client builds")
    }

    fn gemini_body(text: &str) -> serde_json::Value {
        serde_json::json!({
            "candidates": [{
                "content": { "role": "model", "parts": [{ "text": text }] },
                "finishReason": "STOP"
            }]
        })
    }

    #[tokio::test]
    async fn test_gemini_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
            .and(header("x-goog-api-key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body(GENERATED)))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for("gemini", &server, Some("test-key"));
        let result = generate_requirements(&client, Some("A marketplace for local tutors"))
            .await
            .expect("generation succeeds");

        assert_eq!(
            result.raw_content,
            "1. PRODUCT OVERVIEW\nTutorLink matches tutors.\n\n2. SUCCESS METRICS (KPIs)\nBookings - per week"
        );
        assert_eq!(result.sections.product_overview, "TutorLink matches tutors.");
        assert_eq!(result.sections.success_metrics, "Bookings - per week");
        assert_eq!(result.sections.key_risks, "");
    }

    #[tokio::test]
    async fn test_gemini_sends_combined_prompt() {
        let server = MockServer::start().await;

        let expected_text = format!(
            "{}\n\nStartup idea:\nAn app for dog walkers",
            REQUIREMENTS_SYSTEM_PROMPT
        );
        Mock::given(method("POST"))
            .and(body_partial_json(serde_json::json!({
                "contents": [{ "parts": [{ "text": expected_text }] }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(gemini_body("USER FLOWS\nx")))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for("gemini", &server, Some("k"));
        let result = generate_requirements(&client, Some("An app for dog walkers"))
            .await
            .expect("generation succeeds");
        assert_eq!(result.sections.user_flows, "x");
    }

    #[tokio::test]
    async fn test_gemini_rejected_key() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": { "code": 400, "message": "API key not valid. Please pass a valid API key.", "status": "INVALID_ARGUMENT" }
            })))
            .mount(&server)
            .await;

        let client = client_for("gemini", &server, Some("bad-key"));
        let err = generate_requirements(&client, Some("A marketplace for local tutors"))
            .await
            .unwrap_err();

        match err {
            GenerationError::InvalidApiKey {
                provider,
                status,
                message,
            } => {
                assert_eq!(provider, "Gemini");
                assert_eq!(status, 400);
                assert_eq!(message, "API key not valid. Please pass a valid API key.");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_upstream_error_without_json_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
            .mount(&server)
            .await;

        let client = client_for("gemini", &server, Some("k"));
        let err = client.generate("A marketplace for local tutors").await.unwrap_err();
        assert_eq!(err.user_message(), "Gemini API error: 503");
    }

    #[tokio::test]
    async fn test_gemini_blocked_prompt_is_malformed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "promptFeedback": { "blockReason": "SAFETY" }
            })))
            .mount(&server)
            .await;

        let client = client_for("gemini", &server, Some("k"));
        let err = client.generate("A marketplace for local tutors").await.unwrap_err();
        assert!(matches!(err, GenerationError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_non_json_success_body_is_malformed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let client = client_for("openai", &server, Some("sk-test"));
        let err = client.generate("A marketplace for local tutors").await.unwrap_err();
        assert!(matches!(err, GenerationError::MalformedResponse(_)));
    }

    #[tokio::test]
    async fn test_openai_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(serde_json::json!({
                "model": "gpt-4o-mini",
                "messages": [
                    { "role": "system", "content": REQUIREMENTS_SYSTEM_PROMPT },
                    { "role": "user", "content": "Startup idea:\nA marketplace for local tutors" }
                ]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "id": "chatcmpl-123",
                "object": "chat.completion",
                "choices": [{
                    "index": 0,
                    "message": { "role": "assistant", "content": "8. KEY RISKS\nRisk: churn\nImpact: High" },
                    "finish_reason": "stop"
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for("openai", &server, Some("sk-test"));
        let result = generate_requirements(&client, Some("A marketplace for local tutors"))
            .await
            .expect("generation succeeds");

        assert_eq!(result.sections.key_risks, "Risk: churn\nImpact: High");
        assert_eq!(result.sections.filled_count(), 1);
    }

    #[tokio::test]
    async fn test_missing_key_makes_no_request() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for("openai", &server, None);
        let err = generate_requirements(&client, Some("A marketplace for local tutors"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            GenerationError::MissingApiKey {
                env_var: "OPENAI_API_KEY"
            }
        ));
    }

    #[tokio::test]
    async fn test_timeout_is_transport_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(gemini_body("x"))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let config = GenerationConfig::for_provider(
            "gemini",
            None,
            Some(server.uri()),
            Some("k".to_string()),
        )
        .unwrap()
        .with_timeout(Duration::from_millis(200));
        let client = LlmClient::new(config).unwrap();

        let err = client.generate("A marketplace for local tutors").await.unwrap_err();
        match err {
            GenerationError::Transport(e) => assert!(e.is_timeout()),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
