//! Inline markup found inside card fields.
//!
//! - Audio: `[sound:1600420050000.mp3]`
//! - Image: `<img src="1600420050000.jpg">`
//! - Furigana: `漢字[かんじ]です`, a non-whitespace base followed by a bracketed reading

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::AnnotatedToken;

static REGEX_SOUND: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[sound:(.*?)\]").unwrap());

static REGEX_IMAGE_SRC: Lazy<Regex> = Lazy::new(|| Regex::new(r#"src="([^"]+)""#).unwrap());

// The base excludes brackets so adjacent runs split; the reading stops at the first `]`.
static REGEX_FURIGANA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^\s\[\]]+)\[([^\]\n]*)\]").unwrap());

/// Resolve the first `[sound:...]` tag to a media URL.
pub fn extract_audio_reference(field: &str, media_base_url: &str) -> Option<String> {
    resolve_first(&REGEX_SOUND, field, media_base_url)
}

/// Resolve the first `src="..."` attribute to a media URL.
pub fn extract_image_reference(field: &str, media_base_url: &str) -> Option<String> {
    resolve_first(&REGEX_IMAGE_SRC, field, media_base_url)
}

fn resolve_first(regex: &Regex, field: &str, media_base_url: &str) -> Option<String> {
    let name = regex.captures(field)?.get(1)?.as_str().trim();
    if name.is_empty() {
        return None;
    }
    Some(format!("{media_base_url}{name}"))
}

/// Split furigana-annotated text into display tokens, in reading order.
///
/// Concatenating [`AnnotatedToken::base_text`] of the result reproduces the
/// input with every `[reading]` removed.
pub fn tokenize_annotated_text(text: &str) -> Vec<AnnotatedToken> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for caps in REGEX_FURIGANA.captures_iter(text) {
        let (Some(whole), Some(base), Some(reading)) = (caps.get(0), caps.get(1), caps.get(2))
        else {
            continue;
        };
        push_plain(&mut tokens, &text[last..whole.start()]);
        tokens.push(AnnotatedToken::Annotated {
            base: base.as_str().to_string(),
            reading: reading.as_str().to_string(),
        });
        last = whole.end();
    }
    push_plain(&mut tokens, &text[last..]);

    tokens
}

fn push_plain(tokens: &mut Vec<AnnotatedToken>, text: &str) {
    if !text.is_empty() {
        tokens.push(AnnotatedToken::Plain {
            text: text.to_string(),
        });
    }
}
