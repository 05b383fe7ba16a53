//! Render-ready view of a card.

use serde::{Deserialize, Serialize};

use crate::markup::{extract_audio_reference, extract_image_reference, tokenize_annotated_text};
use crate::types::{AnnotatedToken, CardRecord};

/// Everything a front/back card preview needs, with media resolved and
/// furigana tokenized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub row_number: usize,
    pub id: String,
    pub deck_name: String,
    /// Front headline: furigana sentence, or the bare phrase.
    pub front: Vec<AnnotatedToken>,
    /// Back sentence: furigana sentence, or the plain sentence.
    pub sentence: Vec<AnnotatedToken>,
    pub romaji: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub note_eng: String,
    pub note_rus: String,
    pub explanation_eng: String,
    pub explanation_rus: String,
    /// HTML, passed through untouched.
    pub explanation_rus_detailed: String,
    /// HTML, passed through untouched.
    pub external_link_rus: String,
}

impl CardView {
    /// Build the view for a card, resolving media against `media_base_url`.
    pub fn build(card: &CardRecord, media_base_url: &str) -> Self {
        let front = or_fallback(&card.japanese_sentence_furigana, &card.japanese_phrase);
        let sentence = or_fallback(&card.japanese_sentence_furigana, &card.japanese_sentence);

        Self {
            row_number: card.row_number,
            id: card.id.clone(),
            deck_name: card.deck_name.clone(),
            front: tokenize_annotated_text(front),
            sentence: tokenize_annotated_text(sentence),
            romaji: card.romaji.clone(),
            audio_url: extract_audio_reference(&card.sound, media_base_url),
            image_url: extract_image_reference(&card.image, media_base_url),
            note_eng: card.note_eng.clone(),
            note_rus: card.note_rus.clone(),
            explanation_eng: card.explanation_eng.clone(),
            explanation_rus: card.explanation_rus.clone(),
            explanation_rus_detailed: card.explanation_rus_detailed.clone(),
            external_link_rus: card.external_link_rus.clone(),
        }
    }
}

fn or_fallback<'a>(preferred: &'a str, fallback: &'a str) -> &'a str {
    if preferred.is_empty() {
        fallback
    } else {
        preferred
    }
}
