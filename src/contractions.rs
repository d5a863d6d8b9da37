use once_cell::sync::Lazy;
use regex::Regex;
use log::debug;

/// One substitution rule: every match of `pattern` becomes `replacement`
pub struct ContractionRule {
    pub pattern: Regex,
    pub replacement: &'static str,
}

impl ContractionRule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("Invalid contraction regex"),
            replacement,
        }
    }
}

/// Ordered rule table. The apostrophe may be ASCII `'` or U+2019.
///
/// Whole-word forms come first so that `won't` is not caught by the
/// generic `n't` rule and read as `wo not`.
static RULES: Lazy<Vec<ContractionRule>> = Lazy::new(|| {
    vec![
        // specific
        ContractionRule::new(r"[Ww]on['’]t", "will not"),
        ContractionRule::new(r"[Cc]an['’]t", "can not"),
        ContractionRule::new(r"[Yy]['’]all", "you all"),
        ContractionRule::new(r"[Yy]a['’]ll", "you all"),
        // general
        ContractionRule::new(r"[Ii]['’]m", "i am"),
        ContractionRule::new(r"[Aa]in['’]t", "aint"),
        ContractionRule::new(r"n['’]t", " not"),
        ContractionRule::new(r"['’]re", " are"),
        ContractionRule::new(r"['’]s", " is"),
        ContractionRule::new(r"['’]d", " would"),
        ContractionRule::new(r"['’]ll", " will"),
        ContractionRule::new(r"['’]t", " not"),
        ContractionRule::new(r"['’]ve", " have"),
    ]
});

/// The contraction rules in the order they are applied
pub fn rules() -> &'static [ContractionRule] {
    &RULES
}

/// Expand English contractions (`won't` -> `will not`, `'ve` -> ` have`)
///
/// Rules match anywhere in the text, not only on word boundaries, and a
/// possessive `'s` is expanded to ` is` like any other.
pub fn expand_contractions(text: &str) -> String {
    let mut result = text.to_string();

    for rule in RULES.iter() {
        if rule.pattern.is_match(&result) {
            result = rule.pattern.replace_all(&result, rule.replacement).into_owned();
        }
    }

    debug!("Expanded contractions: {} -> {} bytes", text.len(), result.len());
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specific_forms() {
        assert_eq!(expand_contractions("won't"), "will not");
        assert_eq!(expand_contractions("Won't"), "will not");
        assert_eq!(expand_contractions("can't"), "can not");
        assert_eq!(expand_contractions("y'all"), "you all");
        assert_eq!(expand_contractions("Ya'll"), "you all");
    }

    #[test]
    fn test_i_am() {
        assert_eq!(expand_contractions("I'm"), "i am");
        assert_eq!(expand_contractions("I’m here"), "i am here");
    }

    #[test]
    fn test_generic_suffixes() {
        assert_eq!(expand_contractions("Don't"), "Do not");
        assert_eq!(expand_contractions("they're"), "they are");
        assert_eq!(expand_contractions("she'd"), "she would");
        assert_eq!(expand_contractions("we'll"), "we will");
        assert_eq!(expand_contractions("I've"), "I have");
        assert_eq!(expand_contractions("ain't"), "aint");
    }

    #[test]
    fn test_unicode_apostrophe() {
        assert_eq!(expand_contractions("isn’t it"), "is not it");
        assert_eq!(expand_contractions("can’t"), "can not");
    }

    #[test]
    fn test_possessive_is_not_disambiguated() {
        assert_eq!(expand_contractions("John's car"), "John is car");
    }

    #[test]
    fn test_only_leading_letter_is_case_insensitive() {
        assert_eq!(expand_contractions("WON'T"), "WON'T");
        assert_eq!(expand_contractions("wOn't"), "wO not");
    }

    #[test]
    fn test_rule_count() {
        assert_eq!(rules().len(), 13);
    }
}
