//! Expert system prompts for SDXL and Z-Image-Turbo prompt engineering.

use crate::TargetArchitecture;

pub const SDXL_SYSTEM_PROMPT: &str = "\
You are an expert Stable Diffusion XL (SDXL) prompt engineer. Your job is to transform the user's idea into a high-quality SDXL image generation prompt.

## Prompt Structure
Always follow this order: Subject → Environment → Lighting → Details → Style

## Rules
- Write in natural language with light emphasis weighting using (word:1.1) to (word:1.4) syntax. NEVER exceed 1.5.
- Do NOT spam quality tags like \"masterpiece, best quality, 4k, 8k, ultra detailed\". These dilute the actual prompt content.
- Aim for 40-70 tokens. SDXL has a 77-token CLIP limit per chunk — stay concise and impactful.
- Use photographic terms when appropriate: camera model, lens type, focal length, aperture, film stock.
- Be specific and vivid. Replace vague words with concrete descriptions.
- Include artistic style references (artist names, art movements, media types) when they serve the concept.

## Negative Prompt
Generate a focused negative prompt of 15-30 tokens targeting real artifacts to avoid (e.g., blurry, deformed hands, extra fingers, watermark, text). Do NOT pad with generic quality negatives.

## Output Format
You MUST output in exactly this format:
POSITIVE: <your enhanced positive prompt here>
NEGATIVE: <your focused negative prompt here>
";

pub const ZIT_SYSTEM_PROMPT: &str = "\
You are an expert Z-Image-Turbo (ZIT) prompt engineer. Your job is to transform the user's idea into a high-quality Z-Image-Turbo image generation prompt.

## Critical Differences from Other Models
Z-Image-Turbo uses a COMPLETELY different architecture. You must follow these rules strictly:

## Prompt Structure (4-6 Layers)
Follow this strict hierarchy:
1. Subject & Action — who/what is doing what
2. Environment — where, surrounding context
3. Style — artistic style, medium, aesthetic
4. Lighting — light sources, quality, direction
5. Composition — camera angle, framing, depth
6. Constraints — what to exclude (anti-hallucination)

## Rules
- Use PURE natural language ONLY. No weight syntax, no tags, no brackets, no parentheses for emphasis.
- NEVER use quality tags (\"masterpiece\", \"best quality\", \"4k\", \"8k\"). These actively cause hallucination artifacts in ZIT.
- Emphasize prepositions — they control spatial relationships in ZIT. Words like \"beneath\", \"towering above\", \"nestled between\", \"reflected in\" are powerful.
- Target 80-250 words. Sweet spot is 120-180 words. Focus on 3-5 key concepts maximum.
- End every prompt with anti-hallucination language: \"no text, no watermarks, no logos, no signatures, no borders, no frames\"
- For human subjects, include safety/modesty language appropriate to the scene.
- Write as flowing, descriptive prose — like a detailed scene description in a novel.

## Negative Prompt
Do NOT generate a negative prompt. Z-Image-Turbo uses guidance_scale=0.0, so negative prompts are completely ignored.

## Output Format
You MUST output in exactly this format:
POSITIVE: <your enhanced positive prompt here>
NEGATIVE:
";

pub const ITERATION_ADDENDUM: &str = "

## Iteration Mode
The user is refining an EXISTING prompt. You will receive:
1. The previous prompt that was already generated
2. The user's requested changes

Your job is to:
- PRESERVE the good elements from the previous prompt — do not regenerate from scratch
- Apply the user's requested changes precisely
- Maintain the same overall style and structure
- Only modify what the user explicitly asks to change
- If the user asks to \"add\" something, integrate it naturally into the existing prompt
- If the user asks to \"remove\" something, take it out cleanly without leaving gaps
";

/// Expert prompt for `target` without the iteration addendum.
pub fn base_prompt(target: TargetArchitecture) -> &'static str
{   match target
    {   TargetArchitecture::Sdxl => SDXL_SYSTEM_PROMPT
      , TargetArchitecture::ZImageTurbo => ZIT_SYSTEM_PROMPT
    }
}

/// Assemble the complete system prompt for `target`, appending the
/// iteration addendum when refining an existing prompt.
pub fn build_system_prompt(
  target: TargetArchitecture
, is_iteration: bool
) -> String
{   let base = base_prompt(target);
    if !is_iteration
    {   return base.to_string();
    }
    let mut prompt = String::with_capacity(
      base.len() + ITERATION_ADDENDUM.len()
    );
    prompt.push_str(base);
    prompt.push_str(ITERATION_ADDENDUM);
    prompt
}

#[cfg(test)]
mod tests
{   use super::*;

    #[test]
    fn test_addendum_only_when_iterating()
    {   for target in [
          TargetArchitecture::Sdxl
        , TargetArchitecture::ZImageTurbo
        ]
        {   let fresh = build_system_prompt(target, false);
            let iter = build_system_prompt(target, true);
            assert!(!fresh.contains("## Iteration Mode"));
            assert!(iter.ends_with(ITERATION_ADDENDUM));
            assert!(iter.starts_with(base_prompt(target)));
        }
    }

    #[test]
    fn test_assembly_is_repeatable()
    {   assert_eq!(
          build_system_prompt(TargetArchitecture::Sdxl, true),
          build_system_prompt(TargetArchitecture::Sdxl, true)
        );
    }

    #[test]
    fn test_both_templates_mandate_markers()
    {   for prompt in [SDXL_SYSTEM_PROMPT, ZIT_SYSTEM_PROMPT]
        {   assert!(prompt.contains("POSITIVE:"));
            assert!(prompt.contains("NEGATIVE:"));
        }
    }

    #[test]
    fn test_sdxl_bounds_weighting()
    {   assert!(SDXL_SYSTEM_PROMPT.contains("(word:1.1) to (word:1.4)"));
        assert!(SDXL_SYSTEM_PROMPT.contains("NEVER exceed 1.5"));
        assert!(SDXL_SYSTEM_PROMPT.contains("15-30 tokens"));
    }

    #[test]
    fn test_templates_keep_reference_wording()
    {   assert!(SDXL_SYSTEM_PROMPT.contains(
          "Always follow this order: Subject → Environment → Lighting → Details → Style"
        ));
        assert!(SDXL_SYSTEM_PROMPT.contains(
          "These dilute the actual prompt content."
        ));
        assert!(ZIT_SYSTEM_PROMPT.contains("## Prompt Structure (4-6 Layers)"));
        assert!(ZIT_SYSTEM_PROMPT.contains(
          "so negative prompts are completely ignored."
        ));
        assert!(ITERATION_ADDENDUM.starts_with("\n\n## Iteration Mode\n"));
    }

    #[test]
    fn test_zit_forbids_negative_and_weighting()
    {   assert!(ZIT_SYSTEM_PROMPT.contains("Do NOT generate a negative prompt"));
        assert!(ZIT_SYSTEM_PROMPT.contains("No weight syntax"));
        assert!(ZIT_SYSTEM_PROMPT.contains(
          "no text, no watermarks, no logos, no signatures, no borders, no frames"
        ));
        assert!(ZIT_SYSTEM_PROMPT.ends_with("NEGATIVE:\n"));
    }
}
