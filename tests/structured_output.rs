//! Typed structured-output tests: schema derivation through to the parsed value.

use mockito::Server;
use prompt_client::{ClientConfig, Error, PromptClient, SchemaGenerator, TypedSchema};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, PartialEq, Deserialize, JsonSchema)]
struct Verdict {
    answer: String,
    confidence: f64,
}

fn completion_body(content: &str) -> String {
    json!({
        "id": "chatcmpl-test",
        "model": "gpt-4o-mini",
        "object": "chat.completion",
        "choices": [{
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"completion_tokens": 4, "prompt_tokens": 9, "total_tokens": 13}
    })
    .to_string()
}

#[tokio::test]
async fn typed_schema_parses_into_the_target_type() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(
            "{\"answer\": \"yes\", \"confidence\": 0.95}",
        ))
        .create_async()
        .await;

    let schema = TypedSchema::<Verdict>::new().unwrap();
    let client =
        PromptClient::new(ClientConfig::new("test-key").base_url(server.url())).unwrap();

    let verdict = client
        .query("Is Titan larger than Mercury's moon?")
        .structured(&schema)
        .await
        .unwrap();

    assert_eq!(
        verdict,
        Verdict {
            answer: "yes".to_string(),
            confidence: 0.95
        }
    );
}

#[tokio::test]
async fn typed_schema_rejects_a_wrong_shape() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("{\"answer\": \"yes\"}"))
        .create_async()
        .await;

    let schema = TypedSchema::<Verdict>::new().unwrap();
    let client =
        PromptClient::new(ClientConfig::new("test-key").base_url(server.url())).unwrap();

    let err = client.query("hi").structured(&schema).await.unwrap_err();
    assert!(matches!(err, Error::OutputRejected { .. }));
}

#[tokio::test]
async fn generated_schema_drives_the_instruction_and_the_validation() {
    let mut server = Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("{\"verdict\": \"plausible\"}"))
        .create_async()
        .await;

    let schema = SchemaGenerator::new()
        .title("Review")
        .required_property("verdict", json!({"type": "string"}))
        .compile()
        .unwrap();

    let client =
        PromptClient::new(ClientConfig::new("test-key").base_url(server.url())).unwrap();
    let value = client.query("review this").structured(&schema).await.unwrap();
    assert_eq!(value, json!({"verdict": "plausible"}));
}
