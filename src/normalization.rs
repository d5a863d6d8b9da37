use unicode_normalization::UnicodeNormalization;
use log::debug;

/// Unicode compatibility decomposition (NFKD)
///
/// Folds glyph variants onto their plain forms (fullwidth letters,
/// ligatures, superscripts) and splits accented letters into base letter
/// plus combining mark.
pub fn normalize_unicode(text: &str) -> String {
    text.nfkd().collect()
}

/// Collapse every whitespace run (spaces, tabs, newlines) into one space
/// and trim both ends
pub fn collapse_whitespace(text: &str) -> String {
    let result = text.split_whitespace().collect::<Vec<_>>().join(" ");
    debug!("Collapsed whitespace: {} -> {} bytes", text.len(), result.len());
    result
}
