//! Share-text construction: the boast line a finished game produces.
//!
//! Pure text only; rasterizing a share image is a presentation concern
//! and lives outside this crate.

use num_bigint::BigInt;
use rand::seq::SliceRandom;

use crate::engine::element_info::{element_label, ElementCatalog};
use crate::game::Reagent;

/// Thousands separators, sign preserved: `-1234567` becomes
/// `-1,234,567`.
pub fn format_with_commas(n: &BigInt) -> String {
    let rendered = n.to_string();
    let (sign, digits) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    let lead = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && i % 3 == lead % 3 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}")
}

// Plain nouns for every glyph in the reagent pool, used when the share
// phrase spells out what was combined.
const GLYPH_DESCRIPTIONS: [(&str, &str); 98] = [
    ("🍎", "apple"),
    ("🍌", "banana"),
    ("🍇", "grapes"),
    ("🍉", "watermelon"),
    ("🍓", "strawberry"),
    ("🍒", "cherries"),
    ("🍑", "peach"),
    ("🥝", "kiwi"),
    ("🍍", "pineapple"),
    ("🥥", "coconut"),
    ("🍔", "hamburger"),
    ("🍟", "fries"),
    ("🌭", "hot dog"),
    ("🍕", "pizza"),
    ("🌮", "taco"),
    ("🌯", "burrito"),
    ("🥪", "sandwich"),
    ("🍜", "noodles"),
    ("🍣", "sushi"),
    ("🍪", "cookie"),
    ("🍫", "chocolate bar"),
    ("🍩", "donut"),
    ("🍰", "cake"),
    ("🧁", "cupcake"),
    ("🥐", "croissant"),
    ("🥖", "baguette"),
    ("🧀", "cheese"),
    ("🥚", "egg"),
    ("🥛", "milk"),
    ("🧃", "juice box"),
    ("🍺", "beer"),
    ("🍷", "wine"),
    ("🥤", "soda cup"),
    ("🧋", "bubble tea"),
    ("🍶", "sake"),
    ("🍵", "tea"),
    ("☕️", "coffee"),
    ("🍼", "baby bottle"),
    ("🍾", "champagne"),
    ("🥫", "canned food"),
    ("🧂", "salt"),
    ("🧈", "butter"),
    ("🫙", "jar"),
    ("🍯", "honey"),
    ("🍗", "poultry leg"),
    ("🍖", "meat on bone"),
    ("🥓", "bacon"),
    ("🥩", "steak"),
    ("🥗", "salad"),
    ("🥔", "potato"),
    ("🥕", "carrot"),
    ("🌽", "corn"),
    ("🧄", "garlic"),
    ("🧅", "onion"),
    ("🥒", "cucumber"),
    ("🫑", "bell pepper"),
    ("🍄", "mushroom"),
    ("🍆", "eggplant"),
    ("🧊", "ice"),
    ("🔧", "wrench"),
    ("🔨", "hammer"),
    ("🪓", "axe"),
    ("🪚", "saw"),
    ("🔩", "nut and bolt"),
    ("🔗", "link"),
    ("⛓️", "chain"),
    ("🧲", "magnet"),
    ("🧪", "test tube"),
    ("⚗️", "alembic"),
    ("🧴", "lotion bottle"),
    ("🧺", "basket"),
    ("🪣", "bucket"),
    ("🧹", "broom"),
    ("🧽", "sponge"),
    ("🪥", "toothbrush"),
    ("🧻", "roll of paper"),
    ("🧼", "soap"),
    ("🧯", "fire extinguisher"),
    ("🧷", "safety pin"),
    ("📦", "box"),
    ("📕", "book"),
    ("📘", "blue book"),
    ("📙", "orange book"),
    ("📗", "green book"),
    ("📎", "paperclip"),
    ("✂️", "scissors"),
    ("🖊️", "pen"),
    ("✏️", "pencil"),
    ("🗝️", "old key"),
    ("🔑", "key"),
    ("🔒", "lock"),
    ("🔓", "unlocked lock"),
    ("🪙", "coin"),
    ("💡", "light bulb"),
    ("🔦", "flashlight"),
    ("🕯️", "candle"),
    ("🧸", "teddy bear"),
    ("🎲", "die"),
];

// Mass nouns that read wrong with an article.
const NO_ARTICLE_REAGENTS: [&str; 14] = [
    "soap", "milk", "butter", "honey", "salt", "ice", "sushi", "bacon", "garlic", "tea", "coffee",
    "sake", "wine", "beer",
];

pub fn describe_glyph(glyph: &str) -> &'static str {
    GLYPH_DESCRIPTIONS
        .iter()
        .find(|(candidate, _)| *candidate == glyph)
        .map(|(_, noun)| *noun)
        .unwrap_or("mystery")
}

fn a_or_an(word: &str) -> &'static str {
    match word.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

/// "I combined <names> and all I got was <number> gold". Names are
/// shuffled so the phrase does not leak the placement order; the shuffle
/// is deliberately non-deterministic.
pub fn build_share_phrase(
    elements: &[u32],
    reagents: &[Reagent],
    final_value: &BigInt,
    catalog: Option<&dyn ElementCatalog>,
) -> String {
    let mut element_names: Vec<String> = elements
        .iter()
        .map(|z| element_label(catalog, *z).to_lowercase())
        .collect();
    let mut reagent_names: Vec<&str> = reagents
        .iter()
        .map(|r| describe_glyph(&r.glyph))
        .collect();
    let mut rng = rand::thread_rng();
    element_names.shuffle(&mut rng);
    reagent_names.shuffle(&mut rng);

    let mut parts = vec!["I combined".to_string()];
    for (i, name) in element_names.iter().enumerate() {
        parts.push(name.clone());
        if let Some(noun) = reagent_names.get(i) {
            parts.push("and".to_string());
            if NO_ARTICLE_REAGENTS.contains(noun) {
                parts.push((*noun).to_string());
            } else {
                parts.push(format!("{} {noun}", a_or_an(noun)));
            }
        }
        if i + 1 < element_names.len() {
            parts.push("and".to_string());
        }
    }
    parts.push("and all I got was".to_string());
    parts.push(format_with_commas(final_value));
    parts.push("gold".to_string());
    parts.join(" ")
}
