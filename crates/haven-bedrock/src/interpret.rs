//! Narrative interpretation of a scored assessment.
//!
//! The completion service is asked first. Each attempt is bounded by a
//! timeout and at most one retry is made; after that the deterministic
//! template from `haven_instruments::fallback` is used. Failures are logged,
//! never returned: [`Interpreter::interpret`] always yields text.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{info, warn};

use haven_core::models::assessment::{AssessmentType, NarrativeSource};
use haven_instruments::fallback::fallback_interpretation;
use haven_instruments::request::InterpretRequest;
use haven_instruments::{Instrument, get_instrument};

use crate::completion::{CompletionRequest, TextCompleter};

const SYSTEM_PROMPT: &str = "\
You are a warm, supportive mental wellness companion inside a self-care app. \
You explain screening questionnaire results in plain, compassionate language. \
You never diagnose, never minimise what the person is feeling, and always \
encourage professional support when symptoms are moderate or higher. If the \
results suggest severe distress, gently mention crisis lines and emergency \
services.";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InterpretSettings {
    /// Bound on each completion attempt.
    pub timeout: Duration,
    /// Total attempts; 1 or 2.
    pub attempts: u32,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl InterpretSettings {
    pub fn new(timeout: Duration, attempts: u32) -> Self {
        Self {
            timeout,
            attempts: attempts.clamp(1, 2),
            ..Self::default()
        }
    }
}

impl Default for InterpretSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(8),
            attempts: 2,
            max_tokens: 400,
            temperature: 0.7,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Interpretation {
    pub text: String,
    pub source: NarrativeSource,
}

pub struct Interpreter {
    completer: Arc<dyn TextCompleter>,
    settings: InterpretSettings,
}

impl Interpreter {
    pub fn new(completer: Arc<dyn TextCompleter>, settings: InterpretSettings) -> Self {
        Self {
            completer,
            settings,
        }
    }

    pub fn settings(&self) -> &InterpretSettings {
        &self.settings
    }

    /// Interpret a validated request. Always returns non-empty text.
    pub async fn interpret(&self, request: &InterpretRequest) -> Interpretation {
        let instrument = get_instrument(request.assessment_type);
        let completion = CompletionRequest {
            system_prompt: SYSTEM_PROMPT.to_string(),
            user_prompt: user_prompt(instrument.as_ref(), request),
            max_tokens: self.settings.max_tokens,
            temperature: self.settings.temperature,
        };

        let attempts = self.settings.attempts.clamp(1, 2);
        for attempt in 1..=attempts {
            match tokio::time::timeout(self.settings.timeout, self.completer.complete(&completion))
                .await
            {
                Ok(Ok(c)) if !c.text.trim().is_empty() => {
                    info!(
                        assessment_type = %request.assessment_type,
                        attempt,
                        "interpretation generated"
                    );
                    return Interpretation {
                        text: c.text.trim().to_string(),
                        source: NarrativeSource::Generated,
                    };
                }
                Ok(Ok(_)) => warn!(attempt, "completion was empty"),
                Ok(Err(e)) => warn!(attempt, error = %e, "completion failed"),
                Err(_) => warn!(
                    attempt,
                    timeout_ms = self.settings.timeout.as_millis() as u64,
                    "completion timed out"
                ),
            }
        }

        warn!(
            assessment_type = %request.assessment_type,
            "using fallback interpretation"
        );
        Interpretation {
            text: fallback_interpretation(
                instrument.definition(),
                request.total_score,
                &request.severity_level,
            ),
            source: NarrativeSource::Fallback,
        }
    }
}

/// Instrument-specific prompt embedding the scores and levels.
pub fn user_prompt(instrument: &dyn Instrument, request: &InterpretRequest) -> String {
    let context = match request.assessment_type {
        AssessmentType::Phq9 => {
            "The person just completed the PHQ-9, a nine-question depression screening \
             covering the last two weeks."
        }
        AssessmentType::Gad7 => {
            "The person just completed the GAD-7, a seven-question anxiety screening \
             covering the last two weeks."
        }
        AssessmentType::Dass21 => {
            "The person just completed the DASS-21, which scores depression, anxiety \
             and stress separately over the past week. Address each subscale."
        }
    };

    format!(
        "{context}\n\n{}\n\
         Write a short interpretation (two or three paragraphs) addressed to them. \
         Explain what the results suggest in everyday language, offer two or three \
         practical self-care ideas, and say clearly when speaking to a professional \
         would help.",
        instrument.to_structured_input(
            request.total_score,
            &request.severity_level,
            request.subscales.as_ref(),
        )
    )
}
