// src/services/prompt.rs
use crate::message::{Sender, Turn};
use crate::rules::{CURRENT_QUESTION_LABEL, HISTORY_HEADER, HISTORY_WINDOW, QUESTION_LABEL, SYSTEM_PROMPT};

/// Splits client history into the turns that precede `message`.
///
/// Clients append the turn being sent before posting, so the last entry is
/// always the current-turn slot and is left out. A trailing entry that is not
/// the current user message is still dropped, but logged.
pub fn prior_turns<'a>(history: &'a [Turn], message: &str) -> &'a [Turn] {
    let Some((last, rest)) = history.split_last() else {
        return history;
    };
    if last.sender != Sender::User || last.text.trim() != message.trim() {
        tracing::warn!(
            turns = history.len(),
            "conversation history does not end with the current message; dropping its last entry"
        );
    }
    rest
}

/// Renders the most recent prior turns as `Role: text` lines, oldest first.
pub fn render_history(prior: &[Turn]) -> String {
    let start = prior.len().saturating_sub(HISTORY_WINDOW);
    prior[start..]
        .iter()
        .map(|turn| format!("{}: {}", turn.sender.label(), turn.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Builds the single text blob sent to the completion API.
pub fn build_prompt(prior: &[Turn], message: &str) -> String {
    if prior.is_empty() {
        format!("{SYSTEM_PROMPT}\n\n{QUESTION_LABEL} {message}")
    } else {
        format!(
            "{SYSTEM_PROMPT}\n\n{HISTORY_HEADER}\n{}\n\n{CURRENT_QUESTION_LABEL} {message}",
            render_history(prior)
        )
    }
}
