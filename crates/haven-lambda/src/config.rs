use std::time::Duration;

use eyre::{WrapErr, eyre};

use haven_auth::jwt::TokenVerifier;
use haven_bedrock::interpret::InterpretSettings;

const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-haiku-4-5-20251001-v1:0";

/// Key material for bearer-token verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationKey {
    Hs256Secret(String),
    Rs256PublicKeyPem(String),
}

/// Settings read once at cold start.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bucket: String,
    pub verification_key: VerificationKey,
    pub jwt_issuer: Option<String>,
    pub model_id: String,
    pub completion_timeout: Duration,
    pub completion_attempts: u32,
    pub profile_update_attempts: u32,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build from any variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let verification_key = match (var("HAVEN_JWT_SECRET"), var("HAVEN_JWT_PUBLIC_KEY")) {
            (Some(secret), _) => VerificationKey::Hs256Secret(secret),
            (None, Some(pem)) => VerificationKey::Rs256PublicKeyPem(pem),
            (None, None) => {
                return Err(eyre!(
                    "set HAVEN_JWT_SECRET or HAVEN_JWT_PUBLIC_KEY to verify bearer tokens"
                ));
            }
        };

        let number = |name: &str, default: u64| -> eyre::Result<u64> {
            match var(name) {
                Some(v) => v
                    .trim()
                    .parse()
                    .wrap_err_with(|| format!("{name} must be a non-negative integer")),
                None => Ok(default),
            }
        };

        Ok(Self {
            bucket: var("HAVEN_BUCKET").unwrap_or_else(|| "haven".to_string()),
            verification_key,
            jwt_issuer: var("HAVEN_JWT_ISSUER"),
            model_id: var("HAVEN_MODEL_ID").unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
            completion_timeout: Duration::from_millis(number("HAVEN_COMPLETION_TIMEOUT_MS", 8000)?),
            completion_attempts: u32::try_from(number("HAVEN_COMPLETION_ATTEMPTS", 2)?)
                .unwrap_or(u32::MAX)
                .clamp(1, 2),
            profile_update_attempts: u32::try_from(number("HAVEN_PROFILE_UPDATE_ATTEMPTS", 5)?)
                .unwrap_or(u32::MAX)
                .max(1),
        })
    }

    pub fn token_verifier(&self) -> eyre::Result<TokenVerifier> {
        let issuer = self.jwt_issuer.as_deref();
        match &self.verification_key {
            VerificationKey::Hs256Secret(secret) => {
                Ok(TokenVerifier::hs256(secret.as_bytes(), issuer))
            }
            VerificationKey::Rs256PublicKeyPem(pem) => TokenVerifier::rs256_pem(pem.as_bytes(), issuer)
                .wrap_err("HAVEN_JWT_PUBLIC_KEY is not a valid RSA public key"),
        }
    }

    pub fn interpret_settings(&self) -> InterpretSettings {
        InterpretSettings::new(self.completion_timeout, self.completion_attempts)
    }
}
