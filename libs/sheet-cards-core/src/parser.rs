//! TSV parser for published spreadsheet exports.
//!
//! # Format
//! ```text
//! Index<TAB>ID<TAB>Deck<TAB>...          <- header, ignored
//! 1<TAB>1600420050000<TAB>N5<TAB>...     <- row 2
//! 2<TAB>1600420050001<TAB>N5<TAB>...     <- row 3
//! ```
//!
//! Columns are looked up by position through a [`ColumnMap`]. Rows without an
//! ID or a Japanese phrase are skipped; rows shorter than the map are padded
//! with empty text.

use crate::error::Result;
use crate::types::{CardRecord, ColumnMap};

/// Rows of trimmed cells, header included.
pub type RawTable<'a> = Vec<Vec<&'a str>>;

/// Split raw TSV text into rows of trimmed cells.
pub fn split_rows(content: &str) -> RawTable<'_> {
    content
        .split('\n')
        .map(|row| row.split('\t').map(str::trim).collect())
        .collect()
}

/// Parse TSV text into card records, dropping the header row.
pub fn parse(content: &str, columns: &ColumnMap) -> Vec<CardRecord> {
    split_rows(content)
        .iter()
        .skip(1)
        .enumerate()
        .map(|(idx, cells)| Row { cells }.to_record(idx + 2, columns))
        .filter(CardRecord::has_required_fields)
        .collect()
}

/// Parse a raw response body. Fails only when the bytes are not UTF-8 text.
pub fn parse_payload(payload: &[u8], columns: &ColumnMap) -> Result<Vec<CardRecord>> {
    let content = std::str::from_utf8(payload)?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    Ok(parse(content, columns))
}

struct Row<'r, 'a> {
    cells: &'r [&'a str],
}

impl Row<'_, '_> {
    fn cell(&self, idx: usize) -> String {
        self.cells.get(idx).copied().unwrap_or_default().to_string()
    }

    fn to_record(&self, row_number: usize, columns: &ColumnMap) -> CardRecord {
        CardRecord {
            row_number,
            id: self.cell(columns.id),
            deck_name: self.cell(columns.deck_name),
            sound: self.cell(columns.sound),
            image: self.cell(columns.image),
            note_eng: self.cell(columns.note_eng),
            note_rus: self.cell(columns.note_rus),
            explanation_eng: self.cell(columns.explanation_eng),
            explanation_rus: self.cell(columns.explanation_rus),
            explanation_rus_detailed: self.cell(columns.explanation_rus_detailed),
            external_link_rus: self.cell(columns.external_link_rus),
            japanese_sentence_furigana: self.cell(columns.japanese_sentence_furigana),
            japanese_sentence: self.cell(columns.japanese_sentence),
            japanese_phrase: self.cell(columns.japanese_phrase),
            romaji: self.cell(columns.romaji),
        }
    }
}
