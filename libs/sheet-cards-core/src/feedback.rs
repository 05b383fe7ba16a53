//! Feedback message composition.

use crate::types::FeedbackKind;

impl FeedbackKind {
    /// Prefix shown in the submitted comment.
    pub fn label(self) -> &'static str {
        match self {
            Self::Explanation => "Explanation Edit",
            Self::Resource => "Resource Link Suggestion",
            Self::General => "General Suggestion",
        }
    }
}

/// Compose the comment text submitted for a card.
/// Returns `None` for blank comments.
pub fn compose_comment(kind: FeedbackKind, comment: &str) -> Option<String> {
    if comment.trim().is_empty() {
        return None;
    }
    Some(format!("[{}] {}", kind.label(), comment))
}
