//! Core types for spreadsheet-backed cards.

use serde::{Deserialize, Serialize};

/// One vocabulary card derived from a single data row of the sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRecord {
    /// 1-based row in the original sheet (header is row 1).
    pub row_number: usize,
    pub id: String,
    pub deck_name: String,
    pub sound: String,
    pub image: String,
    pub note_eng: String,
    pub note_rus: String,
    pub explanation_eng: String,
    pub explanation_rus: String,
    pub explanation_rus_detailed: String,
    pub external_link_rus: String,
    pub japanese_sentence_furigana: String,
    pub japanese_sentence: String,
    pub japanese_phrase: String,
    pub romaji: String,
}

impl CardRecord {
    /// A record is usable only with both an ID and a phrase.
    pub fn has_required_fields(&self) -> bool {
        !self.id.is_empty() && !self.japanese_phrase.is_empty()
    }
}

/// Zero-based column offsets for every card field.
///
/// The mapping is ordinal, not header-driven: reordering columns in the
/// sheet requires a matching change here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMap {
    pub id: usize,
    pub deck_name: usize,
    pub sound: usize,
    pub image: usize,
    pub note_eng: usize,
    pub note_rus: usize,
    pub explanation_eng: usize,
    pub explanation_rus: usize,
    pub explanation_rus_detailed: usize,
    pub japanese_sentence: usize,
    pub japanese_phrase: usize,
    pub external_link_rus: usize,
    pub japanese_sentence_furigana: usize,
    pub romaji: usize,
}

impl Default for ColumnMap {
    fn default() -> Self {
        Self {
            id: 1,
            deck_name: 2,
            sound: 3,
            image: 4,
            note_eng: 5,
            note_rus: 6, // G
            explanation_eng: 7,
            explanation_rus: 8,
            explanation_rus_detailed: 10, // K
            japanese_sentence: 14, // O
            japanese_phrase: 15, // P
            external_link_rus: 16, // Q
            japanese_sentence_furigana: 17, // R
            romaji: 28,
        }
    }
}

impl ColumnMap {
    /// Highest column offset referenced by the map.
    pub fn max_index(&self) -> usize {
        [
            self.id,
            self.deck_name,
            self.sound,
            self.image,
            self.note_eng,
            self.note_rus,
            self.explanation_eng,
            self.explanation_rus,
            self.explanation_rus_detailed,
            self.japanese_sentence,
            self.japanese_phrase,
            self.external_link_rus,
            self.japanese_sentence_furigana,
            self.romaji,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
    }
}

/// A display segment of furigana-annotated text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnnotatedToken {
    /// Text shown as-is.
    Plain { text: String },
    /// Base text with a reading rendered above it.
    Annotated { base: String, reading: String },
}

impl AnnotatedToken {
    /// The text that appears on the baseline, ignoring any reading.
    pub fn base_text(&self) -> &str {
        match self {
            Self::Plain { text } => text,
            Self::Annotated { base, .. } => base,
        }
    }
}

/// Category of a feedback submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    Explanation,
    Resource,
    General,
}

impl Default for FeedbackKind {
    fn default() -> Self {
        Self::General
    }
}
