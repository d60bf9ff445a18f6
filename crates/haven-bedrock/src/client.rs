use aws_config::BehaviorVersion;
use aws_sdk_bedrockruntime::Client;

/// Build a Bedrock runtime client from the default credential chain.
pub async fn build_client() -> Client {
    let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    Client::new(&config)
}
