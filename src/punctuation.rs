use once_cell::sync::Lazy;
use rustc_hash::FxHashSet as HashSet;
use log::debug;

/// ASCII punctuation, in the usual `!` .. `~` order
pub const ASCII_PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// Symbols that show up in scraped question text (Quora dumps mostly):
/// typographic quotes and dashes, currency, arrows, box drawing, fullwidth
/// CJK punctuation and a few mojibake leftovers like `Â` and `Ã`
pub const EXTENDED_SYMBOLS: &str = "•£·©®→°€™›♥←×§″′Â█½à…“★”–●â►−¢²¬░¶↑±¿▾═¦║―¥▓—‹─▒：¼⊕▼▪†■’▀¨▄♫☆é¯♦¤▲è¸¾Ã⋅‘∞∙）↓、│（»，♪╩╚³・╦╣╔╗▬❤ïØ¹≤‡√";

static STANDARD: Lazy<PunctuationSet> = Lazy::new(|| {
    PunctuationSet::from_chars(ASCII_PUNCTUATION.chars().chain(EXTENDED_SYMBOLS.chars()))
});

/// Immutable set of characters that get padded with spaces
///
/// Keeps the characters both as an ordered sequence (first occurrence wins,
/// so iteration is stable across runs) and as a hash set for lookups.
#[derive(Debug, Clone)]
pub struct PunctuationSet {
    ordered: Vec<char>,
    members: HashSet<char>,
}

impl PunctuationSet {
    /// Process-wide set: ASCII punctuation followed by the extended symbols
    pub fn standard() -> &'static PunctuationSet {
        &STANDARD
    }

    /// Build a set from arbitrary characters, dropping duplicates
    pub fn from_chars<I>(chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut ordered = Vec::new();
        let mut members = HashSet::default();

        for c in chars {
            if members.insert(c) {
                ordered.push(c);
            }
        }

        Self { ordered, members }
    }

    /// Copy of this set with `extra` characters appended
    pub fn with_extra(&self, extra: &str) -> Self {
        Self::from_chars(self.ordered.iter().copied().chain(extra.chars()))
    }

    pub fn contains(&self, c: char) -> bool {
        self.members.contains(&c)
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.ordered.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }
}

impl Default for PunctuationSet {
    fn default() -> Self {
        Self::standard().clone()
    }
}

/// Surround every punctuation character with a single space on each side
pub fn space_out_punctuation(text: &str) -> String {
    space_out_punctuation_with(text, PunctuationSet::standard())
}

/// Same as [`space_out_punctuation`] with an explicit set
///
/// Existing whitespace is left alone, so `"a, b"` becomes `"a ,  b"`.
/// The inserted space is never a member, which makes the result
/// independent of the order characters are visited in.
pub fn space_out_punctuation_with(text: &str, set: &PunctuationSet) -> String {
    let mut result = String::with_capacity(text.len() + text.len() / 4);
    let mut padded = 0usize;

    for c in text.chars() {
        if set.contains(c) {
            result.push(' ');
            result.push(c);
            result.push(' ');
            padded += 1;
        } else {
            result.push(c);
        }
    }

    debug!("Spaced out {} punctuation characters", padded);
    result
}
