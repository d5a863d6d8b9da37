use once_cell::sync::Lazy;
use regex::Regex;
use log::debug;

static ANY_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").expect("Invalid digit regex"));

/// Longest runs first, so a 6-digit run is taken whole by the 5+ rule
/// before the shorter patterns get a chance at its pieces
static BUCKETS: Lazy<[(Regex, &'static str); 4]> = Lazy::new(|| {
    [
        (Regex::new(r"[0-9]{5,}").expect("Invalid 5+ digit regex"), "#####"),
        (Regex::new(r"[0-9]{4}").expect("Invalid 4 digit regex"), "####"),
        (Regex::new(r"[0-9]{3}").expect("Invalid 3 digit regex"), "###"),
        (Regex::new(r"[0-9]{2}").expect("Invalid 2 digit regex"), "##"),
    ]
});

/// Replace digit runs with fixed-width placeholders
///
/// 5 or more digits become `#####`, then 4 -> `####`, 3 -> `###`,
/// 2 -> `##`. Single digits are kept. Text without digits is returned
/// unchanged.
pub fn bucket_numbers(text: &str) -> String {
    if !ANY_DIGIT.is_match(text) {
        return text.to_string();
    }

    let mut result = text.to_string();
    for (pattern, placeholder) in BUCKETS.iter() {
        result = pattern.replace_all(&result, *placeholder).into_owned();
    }

    debug!("Bucketed numbers: {:?} -> {:?}", text, result);
    result
}
