// src/services/classifier.rs
use crate::rules::FINANCE_KEYWORDS;

/// True when any finance keyword occurs anywhere in the message, ignoring case.
pub fn is_finance_related(message: &str) -> bool {
    matched_keyword(message).is_some()
}

/// First keyword found in the message.
pub fn matched_keyword(message: &str) -> Option<&'static str> {
    let msg_lower = message.to_lowercase();
    FINANCE_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| msg_lower.contains(keyword))
}
