use log::{debug, info, warn};

use crate::config::ClientConfig;
use crate::error::Error;
use crate::parser::parse_response;
use crate::providers::{CompletionBackend, CompletionRequest, OpenRouterClient};
use crate::request::{GenerationRequest, PromptPair};
use crate::templates::build_system_prompt;

/// Turns rough image ideas into architecture-specific prompt pairs.
///
/// Stateless apart from the backend handle: concurrent calls to
/// `enhance` share nothing and need no coordination.
pub struct PromptEnhancer<B = OpenRouterClient>
{   backend: B
}

impl PromptEnhancer<OpenRouterClient>
{   /// Enhancer talking to OpenRouter with default settings.
    pub fn new() -> Result<Self, Error>
    {   Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, Error>
    {   Ok(PromptEnhancer::with_backend(OpenRouterClient::new(config)?))
    }
}

impl<B: CompletionBackend> PromptEnhancer<B>
{   pub fn with_backend(backend: B) -> Self
    {   PromptEnhancer { backend }
    }

    pub fn backend(&self) -> &B
    {   &self.backend
    }

    /// Enhance a prompt. Never fails: validation and network errors come
    /// back as text in the positive slot with an empty negative.
    pub async fn enhance(&self, request: &GenerationRequest) -> PromptPair
    {   match self.try_enhance(request).await
        {   Ok(pair) => pair
          , Err(Error::EmptyInput) => {
              PromptPair::new(Error::EmptyInput.to_string(), "")
            }
          , Err(e) => {
              warn!("Prompt enhancement failed: {}", e);
              PromptPair::from_error(&e)
            }
        }
    }

    /// Same as `enhance`, but with the failure left as an `Error`.
    pub async fn try_enhance(
      &self
    , request: &GenerationRequest
    ) -> Result<PromptPair, Error>
    {   if request.user_input.trim().is_empty()
        {   debug!("Empty user input, skipping LLM call");
            return Err(Error::EmptyInput);
        }
        let api_key = request.api_key.trim();
        if api_key.is_empty()
        {   debug!("Empty API key, skipping LLM call");
            return Err(Error::MissingApiKey);
        }

        let is_iteration = request.is_iteration();
        info!(
          "Enhancing {} prompt ({})",
          request.target,
          if is_iteration { "iteration" } else { "fresh" }
        );

        let completion = CompletionRequest
        {   api_key: api_key.to_string()
          , model: request.model_id.trim().to_string()
          , system_prompt: build_system_prompt(request.target, is_iteration)
          , user_message: request.user_message()
          , temperature: request.temperature()
        };

        let reply = self.backend.complete(&completion).await?;
        Ok(parse_response(&reply, request.target))
    }
}

#[cfg(test)]
mod tests
{   use super::*;
    use crate::TargetArchitecture;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    struct RecordingBackend
    {   reply: Result<String, Error>
      , calls: AtomicUsize
      , last: Mutex<Option<CompletionRequest>>
    }

    impl RecordingBackend
    {   fn replying(reply: Result<String, Error>) -> Self
        {   RecordingBackend
            {   reply
              , calls: AtomicUsize::new(0)
              , last: Mutex::new(None)
            }
        }
    }

    #[async_trait]
    impl CompletionBackend for RecordingBackend
    {   async fn complete(
          &self
        , request: &CompletionRequest
        ) -> Result<String, Error>
        {   self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some(request.clone());
            self.reply.clone()
        }
    }

    #[test]
    fn test_request_is_trimmed_and_clamped()
    {   let enhancer = PromptEnhancer::with_backend(
          RecordingBackend::replying(Ok("POSITIVE: x".to_string()))
        );
        let request = GenerationRequest::new(
          "a cat", TargetArchitecture::Sdxl, "  sk-x \n"
        )
          .with_model(" openai/gpt-4o ")
          .with_creativity(3.0);

        tokio_test::block_on(enhancer.enhance(&request));

        let sent = enhancer.backend().last.lock().unwrap().clone().unwrap();
        assert_eq!(sent.api_key, "sk-x");
        assert_eq!(sent.model, "openai/gpt-4o");
        assert_eq!(sent.temperature, 1.0);
        assert_eq!(sent.user_message, "## Image Idea\na cat");
        assert_eq!(
          sent.system_prompt,
          build_system_prompt(TargetArchitecture::Sdxl, false)
        );
    }

    #[test]
    fn test_iteration_uses_addendum_and_previous_prompt()
    {   let enhancer = PromptEnhancer::with_backend(
          RecordingBackend::replying(Ok("POSITIVE: x".to_string()))
        );
        let request = GenerationRequest::new(
          "make it night", TargetArchitecture::ZImageTurbo, "sk-x"
        )
          .with_previous_prompt("a lighthouse on a cliff");

        tokio_test::block_on(enhancer.enhance(&request));

        let sent = enhancer.backend().last.lock().unwrap().clone().unwrap();
        assert_eq!(
          sent.system_prompt,
          build_system_prompt(TargetArchitecture::ZImageTurbo, true)
        );
        assert_eq!(
          sent.user_message,
          "## Previous Prompt\na lighthouse on a cliff\n\n\
           ## Requested Changes\nmake it night"
        );
    }

    #[test]
    fn test_whitespace_key_makes_no_call()
    {   let enhancer = PromptEnhancer::with_backend(
          RecordingBackend::replying(Ok("POSITIVE: x".to_string()))
        );
        let request = GenerationRequest::new(
          "a cat", TargetArchitecture::Sdxl, " \t "
        );
        let result = tokio_test::block_on(enhancer.try_enhance(&request));
        assert_eq!(result, Err(Error::MissingApiKey));
        assert_eq!(enhancer.backend().calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_backend_error_becomes_error_pair()
    {   let enhancer = PromptEnhancer::with_backend(
          RecordingBackend::replying(Err(Error::InsufficientCredits))
        );
        let request = GenerationRequest::new(
          "a cat", TargetArchitecture::Sdxl, "sk-x"
        );
        let pair = tokio_test::block_on(enhancer.enhance(&request));
        assert_eq!(
          pair.positive,
          "ERROR: OpenRouter account has insufficient credits. \
           Add credits at https://openrouter.ai/credits"
        );
        assert_eq!(pair.negative, "");
    }
}
