//! Minimal raw-text query. Requires OPENAI_API_KEY.
//!
//! Run with: cargo run --example basic_query

use prompt_client::PromptClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let client = PromptClient::from_env()?;
    let answer = client
        .query("Name the largest moon of Saturn.")
        .system_prompt("Answer in one short sentence.")
        .text()
        .await?;

    println!("{answer}");
    Ok(())
}
