//! Splits an LLM reply into positive and negative prompts.
//!
//! Markers are matched ASCII case-insensitively; the extracted text
//! keeps the reply's own casing.

use crate::request::PromptPair;
use crate::TargetArchitecture;

pub const POSITIVE_MARKER: &str = "POSITIVE:";
pub const NEGATIVE_MARKER: &str = "NEGATIVE:";

/// Byte offset of the first case-insensitive occurrence of `marker`.
/// `marker` is ASCII, so the offset is always a char boundary.
fn find_marker(haystack: &str, marker: &str) -> Option<usize>
{   let hay = haystack.as_bytes();
    let needle = marker.as_bytes();
    if needle.len() > hay.len()
    {   return None;
    }
    (0..=hay.len() - needle.len())
      .find(|&i| hay[i..i + needle.len()].eq_ignore_ascii_case(needle))
}

/// Extract the prompt pair from `response`.
///
/// When `NEGATIVE:` comes before `POSITIVE:` the positive prompt runs to
/// the end of the reply and the negative prompt is still everything
/// after `NEGATIVE:`, so the two overlap. Callers rely on this.
pub fn parse_response(
  response: &str
, target: TargetArchitecture
) -> PromptPair
{   let pos_idx = find_marker(response, POSITIVE_MARKER);
    let neg_idx = find_marker(response, NEGATIVE_MARKER);

    let (positive, mut negative) = match pos_idx
    {   Some(pos) => {
          let pos_start = pos + POSITIVE_MARKER.len();
          let positive = match neg_idx
          {   Some(neg) if neg > pos => &response[pos_start..neg]
            , _ => &response[pos_start..]
          };
          let negative = neg_idx
            .map(|neg| response[neg + NEGATIVE_MARKER.len()..].trim())
            .unwrap_or("");
          (positive.trim(), negative)
        }
      , None => (response.trim(), "")
    };

    if !target.uses_negative_prompt()
    {   negative = "";
    }

    PromptPair::new(positive, negative)
}

#[cfg(test)]
mod tests
{   use super::*;

    const SDXL: TargetArchitecture = TargetArchitecture::Sdxl;
    const ZIT: TargetArchitecture = TargetArchitecture::ZImageTurbo;

    #[test]
    fn test_both_markers()
    {   let pair = parse_response(
          "POSITIVE: a fluffy cat\nNEGATIVE: blurry", SDXL
        );
        assert_eq!(pair, PromptPair::new("a fluffy cat", "blurry"));
    }

    #[test]
    fn test_zit_drops_negative()
    {   let pair = parse_response(
          "POSITIVE: a fluffy cat\nNEGATIVE: blurry", ZIT
        );
        assert_eq!(pair, PromptPair::new("a fluffy cat", ""));
    }

    #[test]
    fn test_markers_case_insensitive_text_preserved()
    {   let pair = parse_response(
          "Here you go.\npositive: A Red Fox\nNegative:  Extra Limbs  ", SDXL
        );
        assert_eq!(pair, PromptPair::new("A Red Fox", "Extra Limbs"));
    }

    #[test]
    fn test_no_positive_marker_is_whole_reply()
    {   for target in [SDXL, ZIT]
        {   let pair = parse_response("  just a prompt\n", target);
            assert_eq!(pair, PromptPair::new("just a prompt", ""));
        }
        let pair = parse_response("NEGATIVE: blurry", SDXL);
        assert_eq!(pair, PromptPair::new("NEGATIVE: blurry", ""));
    }

    #[test]
    fn test_negative_before_positive_overlaps()
    {   let pair = parse_response(
          "NEGATIVE: blurry\nPOSITIVE: a cat", SDXL
        );
        assert_eq!(pair.positive, "a cat");
        assert_eq!(pair.negative, "blurry\nPOSITIVE: a cat");
    }

    #[test]
    fn test_empty_negative_marker()
    {   let pair = parse_response(
          "POSITIVE: misty forest at dawn\nNEGATIVE:\n", SDXL
        );
        assert_eq!(pair, PromptPair::new("misty forest at dawn", ""));
    }

    #[test]
    fn test_non_ascii_reply()
    {   let pair = parse_response(
          "POSITIVE: café à l'aube, ß\nNEGATIVE: flou", SDXL
        );
        assert_eq!(pair, PromptPair::new("café à l'aube, ß", "flou"));
        assert_eq!(find_marker("é", POSITIVE_MARKER), None);
    }
}
