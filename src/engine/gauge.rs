use num_bigint::BigInt;

/// Size ladder for the result gauge, indexed by decimal order of
/// magnitude and saturating at the top entry.
pub const GAUGE_LABELS: [&str; 14] = [
    "tiny",
    "little",
    "small",
    "modest",
    "chunky",
    "big",
    "huge",
    "immense",
    "titanic",
    "astronomical",
    "mythic",
    "unfathomable",
    "cosmic",
    "transcendent",
];

/// Base-10 order of magnitude: digit count of the absolute value, minus
/// one. Zero and single-digit values are order 0.
pub fn order_of_magnitude(n: &BigInt) -> usize {
    n.magnitude().to_string().len() - 1
}

pub fn label_for(n: &BigInt) -> &'static str {
    let order = order_of_magnitude(n);
    GAUGE_LABELS[order.min(GAUGE_LABELS.len() - 1)]
}
