use crate::engine::gauge;
use crate::engine::session::{GameSession, Phase};
use crate::engine::share::format_with_commas;

/// One status line for the current session state. An override wins over
/// everything; otherwise the line follows the phase and placement state.
pub fn build_status_text(session: &GameSession, status_override: Option<&str>) -> String {
    if let Some(message) = status_override {
        return message.to_string();
    }
    if session.phase() == Phase::Done {
        if let Some(eval) = session.presentation_eval() {
            return format!(
                "Crucible sealed! You forged a {} number: {}.",
                gauge::label_for(&eval.final_value),
                format_with_commas(&eval.final_value)
            );
        }
        return "Crucible sealed!".to_string();
    }
    if session.sequence_complete() {
        return format!(
            "Sequence complete. Seal the crucible to finish the {} round.",
            session.phase().label().to_lowercase()
        );
    }
    if let Some(live) = session.live_eval() {
        return format!(
            "{} round: brewing {} so far.",
            session.phase().label(),
            format_with_commas(&live.final_value)
        );
    }
    format!(
        "{} round: place an element to begin.",
        session.phase().label()
    )
}
