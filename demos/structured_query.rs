//! Schema-validated query returning a typed value. Requires OPENAI_API_KEY.
//!
//! Run with: cargo run --example structured_query

use prompt_client::{PromptClient, TypedSchema};
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
struct Moon {
    name: String,
    diameter_km: f64,
    discovered_by: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = PromptClient::from_env()?;
    let schema = TypedSchema::<Moon>::new()?;

    let moon = client
        .query("Describe the largest moon of Saturn.")
        .structured(&schema)
        .await?;

    println!("{moon:#?}");
    Ok(())
}
