//! Immutable snapshots for a presentation layer.
//!
//! A view model is plain data: the renderer never touches the session
//! directly, and control sensitivity is planned here from the same
//! grammar the session enforces.

use crate::engine::element_info::{element_label, ElementCatalog};
use crate::engine::gauge;
use crate::engine::session::{GameSession, Phase};
use crate::engine::share::format_with_commas;
use crate::engine::status_text::build_status_text;
use crate::game::operators::spec_for;
use crate::game::{OperatorId, Reagent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionControls {
    pub place_element_enabled: bool,
    pub place_reagent_enabled: bool,
    pub undo_enabled: bool,
    pub finalize_enabled: bool,
    pub retry_same_enabled: bool,
    pub retry_new_enabled: bool,
}

/// Sensitivity planning from phase plus sequence lengths. The Done phase
/// freezes everything except the retries.
pub fn plan_controls(session: &GameSession) -> ActionControls {
    let placing = session.phase() != Phase::Done;
    ActionControls {
        place_element_enabled: placing && session.can_place_element(),
        place_reagent_enabled: placing && session.can_place_reagent(),
        undo_enabled: placing
            && (!session.sequence_elements().is_empty() || !session.sequence_reagents().is_empty()),
        finalize_enabled: placing && session.sequence_complete(),
        retry_same_enabled: true,
        retry_new_enabled: true,
    }
}

/// A reagent with its hidden identity exposed, shown once the game is
/// done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealedReagent {
    pub glyph: String,
    pub op: OperatorId,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionViewModel {
    pub phase: Phase,
    pub seed: String,
    pub selection_elements: Vec<u32>,
    pub selection_reagents: Vec<Reagent>,
    pub sequence_elements: Vec<u32>,
    pub sequence_reagents: Vec<Reagent>,
    pub element_names: Vec<String>,
    pub step_log: Vec<String>,
    pub live_value: Option<String>,
    pub live_gauge: Option<&'static str>,
    pub research_final: Option<String>,
    pub presentation_final: Option<String>,
    pub revealed_reagents: Vec<RevealedReagent>,
    pub controls: ActionControls,
    pub status_line: String,
}

impl SessionViewModel {
    pub fn new(session: &GameSession, catalog: Option<&dyn ElementCatalog>) -> Self {
        let daily = session.daily();
        let element_names = daily
            .elements
            .iter()
            .map(|z| element_label(catalog, *z))
            .collect();
        let step_log = session
            .live_eval()
            .map(|eval| eval.steps.iter().map(|step| step.log.clone()).collect())
            .unwrap_or_default();
        // Operator identities stay hidden until the final phase.
        let revealed_reagents = if session.phase() == Phase::Done {
            daily
                .reagents
                .iter()
                .map(|r| RevealedReagent {
                    glyph: r.glyph.clone(),
                    op: r.op,
                    label: spec_for(r.op).label,
                })
                .collect()
        } else {
            Vec::new()
        };
        Self {
            phase: session.phase(),
            seed: daily.seed.clone(),
            selection_elements: session.selection_elements().to_vec(),
            selection_reagents: session.selection_reagents().to_vec(),
            sequence_elements: session.sequence_elements().to_vec(),
            sequence_reagents: session.sequence_reagents().to_vec(),
            element_names,
            step_log,
            live_value: session
                .live_eval()
                .map(|eval| format_with_commas(&eval.final_value)),
            live_gauge: session.live_eval().map(|eval| gauge::label_for(&eval.final_value)),
            research_final: session
                .research_eval()
                .map(|eval| format_with_commas(&eval.final_value)),
            presentation_final: session
                .presentation_eval()
                .map(|eval| format_with_commas(&eval.final_value)),
            revealed_reagents,
            controls: plan_controls(session),
            status_line: build_status_text(session, None),
        }
    }
}
