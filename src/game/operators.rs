//! The nine arithmetic transforms and their registry metadata.
//!
//! Every transform is a pure total function over arbitrary-precision
//! integers. Division by zero and a digit filter that leaves no digits
//! are game rules (both yield 0), not error paths.

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

use super::{EngineError, OperatorId};

/// Glyph used in step logs when a reagent carries no assigned glyph.
pub const PLACEHOLDER_GLYPH: &str = "?";

/// Registry metadata for one operator: the reveal label shown once a
/// round is over, and the default glyph used outside seeded puzzles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorSpec {
    pub op: OperatorId,
    pub label: &'static str,
    pub default_glyph: &'static str,
}

const OPERATOR_SPECS: [OperatorSpec; 9] = [
    OperatorSpec {
        op: OperatorId::Add,
        label: "Add",
        default_glyph: "➕",
    },
    OperatorSpec {
        op: OperatorId::Mul,
        label: "Multiply",
        default_glyph: "✖️",
    },
    OperatorSpec {
        op: OperatorId::Pow,
        label: "Power",
        default_glyph: "^",
    },
    OperatorSpec {
        op: OperatorId::Concat,
        label: "Concatenate",
        default_glyph: "🔗",
    },
    OperatorSpec {
        op: OperatorId::ResetBx1000,
        label: "Reset to b×1000",
        default_glyph: "🧪",
    },
    OperatorSpec {
        op: OperatorId::DigitReplace,
        label: "Digit replace",
        default_glyph: "🔁",
    },
    OperatorSpec {
        op: OperatorId::Sub,
        label: "Subtract",
        default_glyph: "➖",
    },
    OperatorSpec {
        op: OperatorId::Div,
        label: "Divide",
        default_glyph: "➗",
    },
    OperatorSpec {
        op: OperatorId::DigitFilter,
        label: "Digit filter",
        default_glyph: "🧹",
    },
];

pub fn all_operator_specs() -> &'static [OperatorSpec] {
    &OPERATOR_SPECS
}

pub fn spec_for(op: OperatorId) -> &'static OperatorSpec {
    OPERATOR_SPECS
        .iter()
        .find(|spec| spec.op == op)
        .unwrap_or(&OPERATOR_SPECS[0])
}

/// Fallible wire-id lookup. Unknown ids cannot come out of puzzle
/// generation, so hitting the error means the caller is broken.
pub fn operator_for_id(id: &str) -> Result<OperatorId, EngineError> {
    OperatorId::from_id(id).ok_or_else(|| EngineError::UnknownOperator { id: id.to_string() })
}

/// Apply one operator to `(a, b)`, where `a` is the running value and
/// `b` the next element consumed.
pub fn apply(op: OperatorId, a: &BigInt, b: &BigInt) -> BigInt {
    match op {
        OperatorId::Add => a + b,
        OperatorId::Mul => a * b,
        OperatorId::Pow => pow_by_squaring(a, b),
        OperatorId::Concat => concat_decimal(a, b),
        OperatorId::ResetBx1000 => b * BigInt::from(1000),
        OperatorId::DigitReplace => digit_replace(a, b),
        OperatorId::Sub => a - b,
        OperatorId::Div => div_toward_zero(a, b),
        OperatorId::DigitFilter => digit_filter(a, b),
    }
}

/// Step rendering with the operator's registry-default glyph. Gameplay
/// logs use the per-puzzle glyph instead; this is for bare operator use.
pub fn describe(op: OperatorId, a: &BigInt, b: &BigInt, result: &BigInt) -> String {
    format!("{a} {} {b} = {result}", spec_for(op).default_glyph)
}

/// Exponentiation by squaring. Negative exponents are treated as 0, so
/// the result is 1 (including for base 0).
fn pow_by_squaring(a: &BigInt, b: &BigInt) -> BigInt {
    let mut result = BigInt::one();
    if b.is_negative() {
        return result;
    }
    let one = BigInt::one();
    let mut base = a.clone();
    let mut exp = b.clone();
    while exp.is_positive() {
        if (&exp & &one) == one {
            result *= &base;
        }
        base = &base * &base;
        exp >>= 1;
    }
    result
}

/// Literal decimal-string join: the sign of `a` survives only because it
/// already leads `a`'s own rendering. `concat(-5, 3)` is `-53`.
fn concat_decimal(a: &BigInt, b: &BigInt) -> BigInt {
    format!("{a}{b}")
        .parse()
        .expect("joined decimal strings form an integer")
}

/// Every digit of `a` becomes the full decimal string of `b`; a leading
/// minus on `a` is kept as-is.
fn digit_replace(a: &BigInt, b: &BigInt) -> BigInt {
    let replacement = b.to_string();
    let mut rebuilt = String::new();
    for ch in a.to_string().chars() {
        if ch.is_ascii_digit() {
            rebuilt.push_str(&replacement);
        } else {
            rebuilt.push(ch);
        }
    }
    rebuilt
        .parse()
        .expect("digit replacement forms an integer")
}

fn div_toward_zero(a: &BigInt, b: &BigInt) -> BigInt {
    if b.is_zero() {
        // Defined as 0 rather than an error.
        return BigInt::zero();
    }
    a / b
}

/// Drop from `a`'s rendering every character appearing anywhere in `b`'s
/// rendering (a character set, not counts). A result with no digits left
/// is 0.
fn digit_filter(a: &BigInt, b: &BigInt) -> BigInt {
    let strip = b.to_string();
    let filtered: String = a
        .to_string()
        .chars()
        .filter(|ch| !strip.contains(*ch))
        .collect();
    if filtered.chars().any(|ch| ch.is_ascii_digit()) {
        filtered.parse().expect("filtered digits form an integer")
    } else {
        BigInt::zero()
    }
}
