use thiserror::Error;

use crate::rng::{local_day_key, SeedStream};

pub mod operators;

/// Stable identity of an arithmetic transform. The glyph a player sees is
/// assigned per puzzle and is deliberately not part of this identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    Add,
    Mul,
    Pow,
    Concat,
    ResetBx1000,
    DigitReplace,
    Sub,
    Div,
    DigitFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    Positive,
    Mischievous,
    Negative,
}

impl OperatorId {
    pub const ALL: [OperatorId; 9] = [
        OperatorId::Add,
        OperatorId::Mul,
        OperatorId::Pow,
        OperatorId::Concat,
        OperatorId::ResetBx1000,
        OperatorId::DigitReplace,
        OperatorId::Sub,
        OperatorId::Div,
        OperatorId::DigitFilter,
    ];

    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "add" => Some(Self::Add),
            "mul" => Some(Self::Mul),
            "pow" => Some(Self::Pow),
            "concat" => Some(Self::Concat),
            "resetBx1000" => Some(Self::ResetBx1000),
            "digitReplace" => Some(Self::DigitReplace),
            "sub" => Some(Self::Sub),
            "div" => Some(Self::Div),
            "digitFilter" => Some(Self::DigitFilter),
            _ => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Mul => "mul",
            Self::Pow => "pow",
            Self::Concat => "concat",
            Self::ResetBx1000 => "resetBx1000",
            Self::DigitReplace => "digitReplace",
            Self::Sub => "sub",
            Self::Div => "div",
            Self::DigitFilter => "digitFilter",
        }
    }

    pub fn category(self) -> OperatorCategory {
        match self {
            Self::Add | Self::Mul | Self::Pow | Self::Concat => OperatorCategory::Positive,
            Self::ResetBx1000 | Self::DigitReplace => OperatorCategory::Mischievous,
            Self::Sub | Self::Div | Self::DigitFilter => OperatorCategory::Negative,
        }
    }
}

/// Category pools the generator draws from: two positives, one
/// mischievous, one negative per puzzle.
pub const POSITIVE_OPERATORS: [OperatorId; 4] = [
    OperatorId::Add,
    OperatorId::Mul,
    OperatorId::Pow,
    OperatorId::Concat,
];

pub const MISCHIEVOUS_OPERATORS: [OperatorId; 2] =
    [OperatorId::ResetBx1000, OperatorId::DigitReplace];

pub const NEGATIVE_OPERATORS: [OperatorId; 3] =
    [OperatorId::Sub, OperatorId::Div, OperatorId::DigitFilter];

/// The two contract-violation failures of the core. Both indicate a
/// caller bug; the session state machine is built so neither is reachable
/// through normal play.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("unknown operator id: {id}")]
    UnknownOperator { id: String },
    #[error("sequence needs exactly one more element than reagents (got {elements} elements, {reagents} reagents)")]
    LengthMismatch { elements: usize, reagents: usize },
}

/// A player-facing reagent: hidden operator identity plus the glyph
/// assigned to it for this puzzle. Pool matching is by the full pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Reagent {
    pub op: OperatorId,
    pub glyph: String,
}

impl Reagent {
    pub fn new(op: OperatorId, glyph: impl Into<String>) -> Self {
        Self {
            op,
            glyph: glyph.into(),
        }
    }

    /// Reagent with no assigned glyph; step logs show the placeholder.
    pub fn bare(op: OperatorId) -> Self {
        Self::new(op, operators::PLACEHOLDER_GLYPH)
    }
}

/// One day's ingredients. Immutable once generated; retries either reuse
/// it wholesale or replace it with a fresh seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyPuzzle {
    pub seed: String,
    pub elements: Vec<u32>,
    pub reagents: Vec<Reagent>,
}

// Tangible, holdable objects only; no trophies or abstract symbols.
const GLYPH_POOL: [&str; 98] = [
    "🍎", "🍌", "🍇", "🍉", "🍓", "🍒", "🍑", "🥝", "🍍", "🥥", //
    "🍔", "🍟", "🌭", "🍕", "🌮", "🌯", "🥪", "🍜", "🍣", "🍪", //
    "🍫", "🍩", "🍰", "🧁", "🥐", "🥖", "🧀", "🥚", "🥛", "🧃", //
    "🍺", "🍷", "🥤", "🧋", "🍶", "🍵", "☕️", "🍼", "🍾", "🥫", //
    "🧂", "🧈", "🫙", "🍯", "🍗", "🍖", "🥓", "🥩", "🥗", "🥔", //
    "🥕", "🌽", "🧄", "🧅", "🥒", "🫑", "🍄", "🍆", "🧊", //
    "🔧", "🔨", "🪓", "🪚", "🔩", "🔗", "⛓️", "🧲", "🧪", "⚗️", //
    "🧴", "🧺", "🪣", "🧹", "🧽", "🪥", "🧻", "🧼", "🧯", "🧷", //
    "📦", "📕", "📘", "📙", "📗", "📎", "✂️", "🖊️", "✏️", "🗝️", //
    "🔑", "🔒", "🔓", "🪙", "💡", "🔦", "🕯️", "🧸", "🎲",
];

impl DailyPuzzle {
    pub fn new_for_today() -> Self {
        Self::new_with_seed(&local_day_key())
    }

    /// Deterministic generation: every draw below happens in this exact
    /// order, including the resample loops, so a seed always maps to the
    /// same puzzle.
    pub fn new_with_seed(seed: &str) -> Self {
        let mut stream = SeedStream::from_seed_text(seed);

        // Elements: three small values sampled without replacement, then
        // one mid and one large, rejecting collisions.
        let small_pool = stream.shuffle(&[1_u32, 2, 3, 4, 5, 6, 7, 8, 9]);
        let small = [small_pool[0], small_pool[1], small_pool[2]];
        let mut mid = stream.int_in_range(10, 50);
        while small.contains(&mid) {
            mid = stream.int_in_range(10, 50);
        }
        let mut large = stream.int_in_range(51, 99);
        while small.contains(&large) || large == mid {
            large = stream.int_in_range(51, 99);
        }
        let elements = stream.shuffle(&[small[0], small[1], small[2], mid, large]);

        // Reagents: 2 distinct positives, 1 mischievous, 1 negative,
        // order shuffled, then glyphs assigned independently of identity.
        let positive = stream.shuffle(&POSITIVE_OPERATORS);
        let mischievous = *stream.pick(&MISCHIEVOUS_OPERATORS);
        let negative = *stream.pick(&NEGATIVE_OPERATORS);
        let ids = stream.shuffle(&[positive[0], positive[1], mischievous, negative]);

        let glyphs = stream.shuffle(&GLYPH_POOL);
        let reagents = ids
            .into_iter()
            .zip(glyphs)
            .map(|(op, glyph)| Reagent::new(op, glyph))
            .collect();

        log::debug!("generated puzzle seed={seed}");
        Self {
            seed: seed.to_string(),
            elements,
            reagents,
        }
    }
}
