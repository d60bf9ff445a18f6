use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use haven_bedrock::completion::BedrockCompleter;
use haven_bedrock::interpret::Interpreter;
use haven_lambda::config::Config;
use haven_lambda::state::AppState;
use haven_storage::s3::S3Store;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    haven_instruments::catalog::validate_catalog()?;

    let config = Config::from_env()?;
    let verifier = config.token_verifier()?;

    let s3 = haven_storage::client::build_client().await;
    let bedrock = haven_bedrock::client::build_client().await;

    tracing::info!(
        bucket = %config.bucket,
        model_id = %config.model_id,
        completion_attempts = config.completion_attempts,
        "starting haven api"
    );

    let state = AppState {
        store: Arc::new(S3Store::new(s3, config.bucket.clone())),
        interpreter: Arc::new(Interpreter::new(
            Arc::new(BedrockCompleter::new(bedrock, config.model_id.clone())),
            config.interpret_settings(),
        )),
        verifier: Arc::new(verifier),
        profile_update_attempts: config.profile_update_attempts,
    };

    lambda_http::run(haven_lambda::app(state))
        .await
        .map_err(|e| eyre::eyre!(e))
}
