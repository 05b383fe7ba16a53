//! Core card library for spreadsheet-backed vocabulary decks.
//!
//! Provides:
//! - TSV parser mapping spreadsheet rows to card records
//! - Inline markup extraction (Anki `[sound:..]` tags, `<img src="..">`, furigana)
//! - Render-ready card views
//! - Feedback message composition
//! - Shared types (CardRecord, ColumnMap, AnnotatedToken, etc.)

pub mod error;
pub mod feedback;
pub mod markup;
pub mod parser;
pub mod types;
pub mod view;

pub use error::{ParseError, Result};
pub use feedback::compose_comment;
pub use markup::{extract_audio_reference, extract_image_reference, tokenize_annotated_text};
pub use parser::{parse, parse_payload, split_rows, RawTable};
pub use types::{AnnotatedToken, CardRecord, ColumnMap, FeedbackKind};
pub use view::CardView;
