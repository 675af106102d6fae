//! Intent classification for incoming messages.
//!
//! A fixed, priority-ordered pattern table maps message text to a
//! response category. Matching is substring containment on the
//! lower-cased message: Korean does not split on whitespace in a useful
//! way, so token-level matching would miss inflected forms such as
//! "힘들어요".

use serde::{Deserialize, Serialize};

/// Response category for one request. Exactly one is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseCategory {
    /// Opening turn of a distress scenario (work/stress terms).
    SituationStart,
    /// Agreement or continued distress.
    Empathy,
    /// Uncertainty, or the default when nothing matches.
    Socratic,
    /// Supportive closing remarks within a session.
    Encouragement,
    /// The user asked to end the conversation.
    Closing,
}

/// Term that ends the conversation. Checked before the table so it wins
/// over any other keyword present in the same message.
const CLOSING_TRIGGER: &str = "종료";

/// Priority-ordered trigger patterns. The first rule with a hit wins;
/// there is no scoring.
const RULES: &[(ResponseCategory, &[&str])] = &[
    (
        ResponseCategory::SituationStart,
        &["상사", "무시", "회사", "직장", "스트레스", "힘들", "짜증"],
    ),
    (
        ResponseCategory::Empathy,
        &["그래", "맞아", "그렇", "힘들", "어려워", "답답"],
    ),
    (
        ResponseCategory::Socratic,
        &["모르겠", "생각해보", "잘 모르", "그럴 수도"],
    ),
];

/// Classify a message into its response category.
///
/// Deterministic and total: the closing trigger short-circuits first,
/// then the table is scanned in priority order, and anything unmatched
/// falls back to a Socratic prompt.
pub fn classify(message: &str) -> ResponseCategory {
    let lowered = message.to_lowercase();

    if lowered.contains(CLOSING_TRIGGER) {
        return ResponseCategory::Closing;
    }

    for (category, patterns) in RULES {
        if patterns.iter().any(|pattern| lowered.contains(pattern)) {
            return *category;
        }
    }

    ResponseCategory::Socratic
}
