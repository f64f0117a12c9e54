//! The placement state machine that owns a game in progress.
//!
//! Selection pools and the built sequence are complementary views of the
//! daily puzzle's ingredients: every element and reagent instance is in
//! exactly one of them at all times. Illegal calls are silent no-ops so
//! UI code can fire actions eagerly without guarding.

use crate::engine::evaluator::{evaluate_full, evaluate_partial, Evaluation};
use crate::engine::seed_ops;
use crate::game::{DailyPuzzle, OperatorId, Reagent};

pub const SEQUENCE_ELEMENT_SLOTS: usize = 5;
pub const SEQUENCE_REAGENT_SLOTS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Research,
    Presentation,
    Done,
}

impl Phase {
    pub fn id(self) -> &'static str {
        match self {
            Self::Research => "research",
            Self::Presentation => "presentation",
            Self::Done => "done",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Research => "Research",
            Self::Presentation => "Presentation",
            Self::Done => "Done",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    daily: DailyPuzzle,
    phase: Phase,
    selection_elements: Vec<u32>,
    selection_reagents: Vec<Reagent>,
    sequence_elements: Vec<u32>,
    sequence_reagents: Vec<Reagent>,
    research_eval: Option<Evaluation>,
    presentation_eval: Option<Evaluation>,
    live_eval: Option<Evaluation>,
}

impl GameSession {
    pub fn new_for_today() -> Self {
        Self::from_puzzle(DailyPuzzle::new_for_today())
    }

    pub fn new_with_seed(seed: &str) -> Self {
        Self::from_puzzle(DailyPuzzle::new_with_seed(seed))
    }

    pub fn from_puzzle(daily: DailyPuzzle) -> Self {
        let selection_elements = daily.elements.clone();
        let selection_reagents = daily.reagents.clone();
        Self {
            daily,
            phase: Phase::Research,
            selection_elements,
            selection_reagents,
            sequence_elements: Vec::new(),
            sequence_reagents: Vec::new(),
            research_eval: None,
            presentation_eval: None,
            live_eval: None,
        }
    }

    /// Full rebuild onto the same-day puzzle or an explicit override seed.
    pub fn reset(&mut self, seed_override: Option<&str>) {
        let daily = match seed_override {
            Some(seed) => DailyPuzzle::new_with_seed(seed),
            None => DailyPuzzle::new_for_today(),
        };
        log::debug!("session reset seed={}", daily.seed);
        *self = Self::from_puzzle(daily);
    }

    pub fn daily(&self) -> &DailyPuzzle {
        &self.daily
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn selection_elements(&self) -> &[u32] {
        &self.selection_elements
    }

    pub fn selection_reagents(&self) -> &[Reagent] {
        &self.selection_reagents
    }

    pub fn sequence_elements(&self) -> &[u32] {
        &self.sequence_elements
    }

    pub fn sequence_reagents(&self) -> &[Reagent] {
        &self.sequence_reagents
    }

    pub fn research_eval(&self) -> Option<&Evaluation> {
        self.research_eval.as_ref()
    }

    pub fn presentation_eval(&self) -> Option<&Evaluation> {
        self.presentation_eval.as_ref()
    }

    pub fn live_eval(&self) -> Option<&Evaluation> {
        self.live_eval.as_ref()
    }

    /// Grammar: an element goes next exactly when counts are equal
    /// (E R E R E R E R E).
    pub fn can_place_element(&self) -> bool {
        self.sequence_elements.len() == self.sequence_reagents.len()
            && self.sequence_elements.len() < SEQUENCE_ELEMENT_SLOTS
    }

    /// Grammar: a reagent goes next exactly when there is one more
    /// element than reagents.
    pub fn can_place_reagent(&self) -> bool {
        self.sequence_elements.len() == self.sequence_reagents.len() + 1
            && self.sequence_reagents.len() < SEQUENCE_REAGENT_SLOTS
    }

    pub fn sequence_complete(&self) -> bool {
        self.sequence_elements.len() == SEQUENCE_ELEMENT_SLOTS
            && self.sequence_reagents.len() == SEQUENCE_REAGENT_SLOTS
    }

    pub fn place_element(&mut self, value: u32) -> bool {
        if !self.can_place_element() {
            return false;
        }
        let Some(index) = self.selection_elements.iter().position(|&v| v == value) else {
            return false;
        };
        self.selection_elements.remove(index);
        self.sequence_elements.push(value);
        self.refresh_live_eval();
        true
    }

    /// Pool matching is by the full `(operator, glyph)` pair: the glyph
    /// is what the player actually selected.
    pub fn place_reagent(&mut self, op: OperatorId, glyph: &str) -> bool {
        if !self.can_place_reagent() {
            return false;
        }
        let Some(index) = self
            .selection_reagents
            .iter()
            .position(|r| r.op == op && r.glyph == glyph)
        else {
            return false;
        };
        let reagent = self.selection_reagents.remove(index);
        self.sequence_reagents.push(reagent);
        self.refresh_live_eval();
        true
    }

    /// A trailing unmatched reagent pops back to its pool first, then the
    /// last element. No-op when nothing is placed.
    pub fn undo(&mut self) -> bool {
        if self.sequence_reagents.len() >= self.sequence_elements.len() {
            if let Some(reagent) = self.sequence_reagents.pop() {
                self.selection_reagents.push(reagent);
                self.refresh_live_eval();
                return true;
            }
        }
        if let Some(value) = self.sequence_elements.pop() {
            self.selection_elements.push(value);
            self.refresh_live_eval();
            return true;
        }
        false
    }

    /// Seal the research round: store its evaluation and restage the same
    /// ingredients for the presentation replay.
    pub fn finalize_research(&mut self) -> bool {
        if self.phase != Phase::Research || !self.sequence_complete() {
            return false;
        }
        let Ok(eval) = evaluate_full(&self.sequence_elements, &self.sequence_reagents) else {
            return false;
        };
        log::debug!(
            "research finalized seed={} digits={}",
            self.daily.seed,
            eval.final_value.to_string().len()
        );
        self.research_eval = Some(eval);
        self.phase = Phase::Presentation;
        self.restage_pools();
        true
    }

    /// Seal the presentation round. The final phase keeps the placed
    /// sequence on display, so pools are left as-is.
    pub fn finalize_presentation(&mut self) -> bool {
        if self.phase != Phase::Presentation || !self.sequence_complete() {
            return false;
        }
        let Ok(eval) = evaluate_full(&self.sequence_elements, &self.sequence_reagents) else {
            return false;
        };
        log::debug!(
            "presentation finalized seed={} digits={}",
            self.daily.seed,
            eval.final_value.to_string().len()
        );
        self.presentation_eval = Some(eval);
        self.phase = Phase::Done;
        self.live_eval = None;
        true
    }

    /// Back to a fresh research round on the existing puzzle.
    pub fn retry_same_ingredients(&mut self) {
        self.phase = Phase::Research;
        self.research_eval = None;
        self.presentation_eval = None;
        self.restage_pools();
    }

    /// Fresh puzzle from a throwaway override seed; still routed through
    /// the deterministic generator.
    pub fn retry_new_ingredients(&mut self) {
        let seed = seed_ops::retry_seed();
        self.reset(Some(&seed));
    }

    fn restage_pools(&mut self) {
        self.selection_elements = self.daily.elements.clone();
        self.selection_reagents = self.daily.reagents.clone();
        self.sequence_elements.clear();
        self.sequence_reagents.clear();
        self.live_eval = None;
    }

    fn refresh_live_eval(&mut self) {
        self.live_eval = evaluate_partial(&self.sequence_elements, &self.sequence_reagents);
    }
}
