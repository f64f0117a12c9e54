use crate::game::OperatorId;

/// Every player action the session accepts, in command form so callers
/// can queue, replay, or route them uniformly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    PlaceElement { value: u32 },
    PlaceReagent { op: OperatorId, glyph: String },
    Undo,
    FinalizeResearch,
    FinalizePresentation,
    RetrySameIngredients,
    RetryNewIngredients,
    Reset { seed_override: Option<String> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineCommandResult {
    pub changed: bool,
}

impl EngineCommandResult {
    pub const fn unchanged() -> Self {
        Self { changed: false }
    }

    pub const fn changed() -> Self {
        Self { changed: true }
    }

    pub const fn from_changed(changed: bool) -> Self {
        Self { changed }
    }
}
