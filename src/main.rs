//! prompt-enhancer: command-line host for `PromptEnhancer`.

use clap::Parser;
use log::debug;
use std::process::ExitCode;

use prompt_enhancer::{
  ClientConfig, GenerationRequest, PromptEnhancer, TargetArchitecture,
  DEFAULT_CREATIVITY, DEFAULT_MODEL,
};

/// Turn a rough image idea into an SDXL or Z-Image-Turbo prompt.
#[derive(Debug, Parser)]
#[command(name = "prompt-enhancer", version)]
struct Cli
{   /// Image idea, or change instructions when --previous is given
    #[arg(required = true)]
    idea: Vec<String>
  , /// Target architecture: SDXL or Z-Image-Turbo
    #[arg(short, long, default_value = "SDXL")]
    target: TargetArchitecture
  , /// LLM model identifier on OpenRouter
    #[arg(short, long, default_value = DEFAULT_MODEL)]
    model: String
  , /// Sampling temperature, 0.0 to 1.0
    #[arg(short, long, default_value_t = DEFAULT_CREATIVITY)]
    creativity: f32
  , /// Previously generated prompt to refine
    #[arg(short, long)]
    previous: Option<String>
  , /// OpenRouter API key
    #[arg(long, env = "OPENROUTER_API_KEY", hide_env_values = true, default_value = "")]
    api_key: String
  , /// Override the API base URL
    #[arg(long)]
    api_base: Option<String>
  , /// Enable debug logging
    #[arg(short, long)]
    verbose: bool
}

#[tokio::main]
async fn main() -> ExitCode
{   let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(
      env_logger::Env::default().default_filter_or(default_level)
    ).init();

    let config = match &cli.api_base
    {   Some(base) => ClientConfig::with_api_base(base)
      , None => ClientConfig::default()
    };
    debug!("Using endpoint {}", config.endpoint());

    let enhancer = match PromptEnhancer::with_config(config)
    {   Ok(enhancer) => enhancer
      , Err(e) => {
          eprintln!("ERROR: {}", e);
          return ExitCode::FAILURE;
        }
    };

    let mut request = GenerationRequest::new(
      cli.idea.join(" "), cli.target, cli.api_key
    )
      .with_model(cli.model)
      .with_creativity(cli.creativity);
    if let Some(previous) = cli.previous
    {   request = request.with_previous_prompt(previous);
    }

    let pair = enhancer.enhance(&request).await;

    println!("## Positive\n{}", pair.positive);
    if cli.target.uses_negative_prompt()
    {   println!("\n## Negative\n{}", pair.negative);
    }

    if pair.is_error() { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}
