//! Request and result types for prompt enhancement

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::TargetArchitecture;

/// One enhancement request from the hosting caller.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest
{   /// Image idea, or change instructions when iterating
    pub user_input: String
  , /// Architecture the prompt is written for
    pub target: TargetArchitecture
  , /// OpenRouter API key, used for this request only
    #[serde(skip_serializing)]
    pub api_key: String
  , /// LLM model identifier, e.g. "anthropic/claude-sonnet-4"
    pub model_id: String
  , /// Sampling temperature in [0.0, 1.0]
    pub creativity: f32
  , /// Prompt being refined, if any
    #[serde(default)]
    pub previous_prompt: Option<String>
}

impl GenerationRequest
{   /// Fresh request with the default model and creativity.
    pub fn new(
      user_input: impl Into<String>
    , target: TargetArchitecture
    , api_key: impl Into<String>
    ) -> Self
    {   GenerationRequest
        {   user_input: user_input.into()
          , target
          , api_key: api_key.into()
          , model_id: crate::DEFAULT_MODEL.to_string()
          , creativity: crate::DEFAULT_CREATIVITY
          , previous_prompt: None
        }
    }

    pub fn with_model(mut self, model_id: impl Into<String>) -> Self
    {   self.model_id = model_id.into();
        self
    }

    pub fn with_creativity(mut self, creativity: f32) -> Self
    {   self.creativity = creativity;
        self
    }

    pub fn with_previous_prompt(
      mut self
    , previous_prompt: impl Into<String>
    ) -> Self
    {   self.previous_prompt = Some(previous_prompt.into());
        self
    }

    /// True when refining a non-blank previous prompt.
    pub fn is_iteration(&self) -> bool
    {   self.previous_prompt
          .as_deref()
          .map_or(false, |p| !p.trim().is_empty())
    }

    /// Creativity clamped into [0.0, 1.0]; NaN falls back to the default.
    pub fn temperature(&self) -> f32
    {   if self.creativity.is_nan()
        {   crate::DEFAULT_CREATIVITY
        } else
        {   self.creativity.clamp(0.0, 1.0)
        }
    }

    /// User message sent alongside the system prompt.
    pub fn user_message(&self) -> String
    {   build_user_message(
          &self.user_input,
          self.previous_prompt.as_deref(),
          self.is_iteration()
        )
    }
}

impl fmt::Debug for GenerationRequest
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.debug_struct("GenerationRequest")
          .field("user_input", &self.user_input)
          .field("target", &self.target)
          .field("api_key", &"<redacted>")
          .field("model_id", &self.model_id)
          .field("creativity", &self.creativity)
          .field("previous_prompt", &self.previous_prompt)
          .finish()
    }
}

/// Format the user message for the LLM.
pub fn build_user_message(
  user_input: &str
, previous_prompt: Option<&str>
, is_iteration: bool
) -> String
{   match previous_prompt
    {   Some(previous) if is_iteration => format!(
          "## Previous Prompt\n{}\n\n## Requested Changes\n{}",
          previous, user_input
        )
      , _ => format!("## Image Idea\n{}", user_input)
    }
}

/// Positive/negative prompt pair handed back to the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptPair
{   pub positive: String
  , pub negative: String
}

impl PromptPair
{   pub fn new(
      positive: impl Into<String>
    , negative: impl Into<String>
    ) -> Self
    {   PromptPair
        {   positive: positive.into()
          , negative: negative.into()
        }
    }

    /// Failure encoded the way the host expects: `ERROR: ...` in the
    /// positive slot, nothing in the negative slot.
    pub fn from_error(err: &crate::Error) -> Self
    {   PromptPair::new(format!("ERROR: {}", err), "")
    }

    pub fn is_error(&self) -> bool
    {   self.positive.starts_with("ERROR:")
    }

    pub fn into_tuple(self) -> (String, String)
    {   (self.positive, self.negative)
    }
}

impl From<PromptPair> for (String, String)
{   fn from(pair: PromptPair) -> Self
    {   pair.into_tuple()
    }
}
