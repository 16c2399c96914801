pub mod error;
pub mod config;
pub mod templates;
pub mod providers;
pub mod request;
pub mod parser;
pub mod client;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use client::PromptEnhancer;
pub use config::ClientConfig;
pub use error::Error;
pub use providers::{CompletionBackend, CompletionRequest, OpenRouterClient};
pub use request::{GenerationRequest, PromptPair};

/*

prompt-enhancer turns a rough image idea (or an edit instruction plus
the prompt it should edit) into a positive/negative prompt pair for
one of two image-generation architectures. One LLM call per request:

  GenerationRequest
    -> templates::build_system_prompt + request::build_user_message
    -> CompletionBackend::complete   (OpenRouter chat completions)
    -> parser::parse_response
    -> PromptPair

Failures never escape `PromptEnhancer::enhance`; they come back as
`ERROR: ...` text in the positive slot.

*/

/// Default LLM used when the caller does not pick one.
pub const DEFAULT_MODEL: &str = "anthropic/claude-sonnet-4";

/// Default sampling temperature ("creativity").
pub const DEFAULT_CREATIVITY: f32 = 0.7;

/// Image-generation architecture the prompt is written for.
/// Selects the expert template and the negative-prompt policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum TargetArchitecture
{   /// Stable Diffusion XL: natural language with light (word:1.2) weighting
    #[serde(rename = "SDXL")]
    Sdxl
  , /// Z-Image-Turbo: pure prose, negative prompt is ignored
    #[serde(rename = "Z-Image-Turbo", alias = "ZIT")]
    ZImageTurbo
}

impl TargetArchitecture
{   /// Label used by the hosting UI.
    pub fn label(&self) -> &'static str
    {   match self
        {   TargetArchitecture::Sdxl => "SDXL"
          , TargetArchitecture::ZImageTurbo => "Z-Image-Turbo"
        }
    }

    /// Whether the architecture consumes a negative prompt at all.
    pub fn uses_negative_prompt(&self) -> bool
    {   matches!(self, TargetArchitecture::Sdxl)
    }
}

impl fmt::Display for TargetArchitecture
{   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {   f.write_str(self.label())
    }
}

impl FromStr for TargetArchitecture
{   type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err>
    {   let s = s.trim();
        if s.eq_ignore_ascii_case("SDXL")
        {   Ok(TargetArchitecture::Sdxl)
        } else if s.eq_ignore_ascii_case("Z-Image-Turbo")
          || s.eq_ignore_ascii_case("ZIT")
        {   Ok(TargetArchitecture::ZImageTurbo)
        } else
        {   Err(Error::UnknownTarget(s.to_string()))
        }
    }
}
