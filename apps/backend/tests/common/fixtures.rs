//! Test fixtures and factory functions for creating test data.

use serde_json::json;

use sheet_cards_backend::config::FeedbackForm;

pub const MEDIA_BASE_URL: &str = "https://media.test/jlabfiles/";
pub const FORM_URL: &str = "https://docs.google.com/forms/d/e/test-form/viewform?usp=pp_url";
pub const FORM_FIELD_CARD_ID: &str = "entry.1001";
pub const FORM_FIELD_COMMENT: &str = "entry.1002";

/// Width of the production sheet (columns A..AC).
const SHEET_WIDTH: usize = 29;

/// A data row in the production column layout.
pub fn sheet_row(id: &str, phrase: &str, furigana: &str) -> String {
    let mut cells = vec![String::new(); SHEET_WIDTH];
    cells[0] = "1".to_string();
    cells[1] = id.to_string();
    cells[2] = "JLab".to_string();
    cells[3] = format!("[sound:{}.mp3]", id);
    cells[4] = format!(r#"<img src="{}.jpg">"#, id);
    cells[6] = "заметка".to_string();
    cells[10] = "<p>объяснение</p>".to_string();
    cells[14] = "猫がいる".to_string();
    cells[15] = phrase.to_string();
    cells[17] = furigana.to_string();
    cells[28] = "neko".to_string();
    cells.join("\t")
}

/// Generate a sheet with `num_cards` valid rows and one row missing its phrase.
///
/// Valid rows have IDs `card-1`..`card-N` and sit on sheet rows 2..N+1.
pub fn sample_tsv(num_cards: usize) -> String {
    let mut rows = vec!["Index\tID\tDeck\tSound\tImage".to_string()];
    for i in 1..=num_cards {
        rows.push(sheet_row(
            &format!("card-{}", i),
            "猫",
            &format!("猫[ねこ]が{} 匹[ひき]いる", i),
        ));
    }
    rows.push(sheet_row("broken", "", ""));
    rows.join("\n") + "\n"
}

pub fn feedback_form() -> FeedbackForm {
    FeedbackForm::new(FORM_URL, FORM_FIELD_CARD_ID, FORM_FIELD_COMMENT)
        .expect("valid form URL")
        .expect("form is configured")
}

/// Create a feedback request body.
pub fn feedback_request(kind: &str, comment: &str) -> serde_json::Value {
    json!({ "kind": kind, "comment": comment })
}
