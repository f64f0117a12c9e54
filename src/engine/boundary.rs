//! Thin façade over the game session.
//!
//! UI code routes actions through `execute_command` and reads state
//! through the helpers here instead of touching the session's mutators
//! directly. That keeps the placement grammar behind one stable API.

use crate::engine::commands::{EngineCommand, EngineCommandResult};
use crate::engine::element_info::ElementCatalog;
use crate::engine::session::GameSession;
use crate::engine::view_model::SessionViewModel;

pub fn execute_command(session: &mut GameSession, command: EngineCommand) -> EngineCommandResult {
    match command {
        EngineCommand::PlaceElement { value } => {
            EngineCommandResult::from_changed(session.place_element(value))
        }
        EngineCommand::PlaceReagent { op, glyph } => {
            EngineCommandResult::from_changed(session.place_reagent(op, &glyph))
        }
        EngineCommand::Undo => EngineCommandResult::from_changed(session.undo()),
        EngineCommand::FinalizeResearch => {
            EngineCommandResult::from_changed(session.finalize_research())
        }
        EngineCommand::FinalizePresentation => {
            EngineCommandResult::from_changed(session.finalize_presentation())
        }
        EngineCommand::RetrySameIngredients => {
            session.retry_same_ingredients();
            EngineCommandResult::changed()
        }
        EngineCommand::RetryNewIngredients => {
            session.retry_new_ingredients();
            EngineCommandResult::changed()
        }
        EngineCommand::Reset { seed_override } => {
            session.reset(seed_override.as_deref());
            EngineCommandResult::changed()
        }
    }
}

pub fn can_place_element(session: &GameSession) -> bool {
    session.can_place_element()
}

pub fn can_place_reagent(session: &GameSession) -> bool {
    session.can_place_reagent()
}

pub fn sequence_complete(session: &GameSession) -> bool {
    session.sequence_complete()
}

pub fn session_view_model(
    session: &GameSession,
    catalog: Option<&dyn ElementCatalog>,
) -> SessionViewModel {
    SessionViewModel::new(session, catalog)
}
