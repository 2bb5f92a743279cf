//! The text generation capability.

use super::GenerationError;
use serde::{Deserialize, Serialize};
use std::future::Future;
use tracing::warn;
use voto_types::ErrorCode;

/// Sampling parameters for one generation call.
///
/// Defaults suit long-form drafting; the `with_*` setters make per-call
/// overrides cheap:
///
/// ```
/// use voto_runtime::textgen::GenerationParams;
///
/// let assistant = GenerationParams::default()
///     .with_temperature(0.8)
///     .with_max_output_tokens(512);
///
/// assert_eq!(assistant.top_k, 40);
/// assert_eq!(assistant.max_output_tokens, 512);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Sampling temperature (0.0-1.0).
    pub temperature: f32,

    /// Top-k sampling cutoff.
    pub top_k: u32,

    /// Nucleus sampling cutoff (0.0-1.0).
    pub top_p: f32,

    /// Maximum tokens to generate.
    pub max_output_tokens: u32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_k: 40,
            top_p: 0.8,
            max_output_tokens: 1024,
        }
    }
}

impl GenerationParams {
    /// Returns params with the given temperature.
    #[must_use]
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Returns params with the given top-k cutoff.
    #[must_use]
    pub fn with_top_k(mut self, top_k: u32) -> Self {
        self.top_k = top_k;
        self
    }

    /// Returns params with the given top-p cutoff.
    #[must_use]
    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = top_p;
        self
    }

    /// Returns params with the given output token limit.
    #[must_use]
    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }
}

/// An opaque text generation backend.
///
/// Failures stay failures: `generate` returns [`GenerationError`] rather
/// than an apology string, and the caller chooses the fallback text
/// through [`generate_or`](Self::generate_or).
pub trait TextGenerator: Send + Sync {
    /// Generates text for `prompt` under the given parameters.
    fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> impl Future<Output = Result<String, GenerationError>> + Send;

    /// Generates text, substituting `fallback` on failure.
    ///
    /// The failure is logged with its code so operators can distinguish
    /// a throttled backend from a missing one.
    fn generate_or(
        &self,
        prompt: &str,
        params: &GenerationParams,
        fallback: &str,
    ) -> impl Future<Output = String> + Send {
        async move {
            match self.generate(prompt, params).await {
                Ok(text) => text,
                Err(error) => {
                    warn!(code = error.code(), %error, "text generation failed, using fallback");
                    fallback.to_owned()
                }
            }
        }
    }
}

/// A [`TextGenerator`] with no backend.
///
/// Every call fails with [`GenerationError::Unconfigured`]; combined with
/// [`generate_or`](TextGenerator::generate_or) this gives demo mode
/// deterministic fallback text.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullGenerator;

impl TextGenerator for NullGenerator {
    fn generate(
        &self,
        _prompt: &str,
        _params: &GenerationParams,
    ) -> impl Future<Output = Result<String, GenerationError>> + Send {
        async { Err(GenerationError::Unconfigured) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct EchoGenerator;

    impl TextGenerator for EchoGenerator {
        fn generate(
            &self,
            prompt: &str,
            _params: &GenerationParams,
        ) -> impl Future<Output = Result<String, GenerationError>> + Send {
            let text = format!("echo: {prompt}");
            async move { Ok(text) }
        }
    }

    #[test]
    fn default_params() {
        let params = GenerationParams::default();
        assert_eq!(params.temperature, 0.7);
        assert_eq!(params.top_k, 40);
        assert_eq!(params.top_p, 0.8);
        assert_eq!(params.max_output_tokens, 1024);
    }

    #[test]
    fn per_call_overrides_keep_the_rest() {
        let params = GenerationParams::default()
            .with_temperature(0.8)
            .with_max_output_tokens(512);

        assert_eq!(params.temperature, 0.8);
        assert_eq!(params.max_output_tokens, 512);
        assert_eq!(params.top_k, 40);
        assert_eq!(params.top_p, 0.8);
    }

    #[tokio::test]
    async fn null_generator_is_unconfigured() {
        let err = NullGenerator
            .generate("draft a speech", &GenerationParams::default())
            .await
            .unwrap_err();
        assert_eq!(err, GenerationError::Unconfigured);
    }

    #[tokio::test]
    async fn generate_or_falls_back_on_error() {
        let text = NullGenerator
            .generate_or(
                "draft a speech",
                &GenerationParams::default(),
                "generation unavailable",
            )
            .await;
        assert_eq!(text, "generation unavailable");
    }

    #[tokio::test]
    async fn generate_or_passes_successes_through() {
        let text = EchoGenerator
            .generate_or("hola", &GenerationParams::default(), "unused")
            .await;
        assert_eq!(text, "echo: hola");
    }
}
