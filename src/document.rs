use crate::contractions;
use crate::normalization;
use crate::numbers;
use crate::punctuation::{self, PunctuationSet};

/// A piece of text moving through the cleaning stages
///
/// Every stage takes the document by value and hands back the rewritten
/// one, so calls chain without any shared mutable state:
///
/// ```
/// use textcleaner::TextDocument;
///
/// let text = TextDocument::new(" Don't  panic ")
///     .collapse_whitespace()
///     .expand_contractions()
///     .into_text();
/// assert_eq!(text, "Do not panic");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextDocument {
    text: String,
}

impl TextDocument {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    /// Whitespace tokens of the current text
    pub fn tokens(&self) -> Vec<&str> {
        self.text.split_whitespace().collect()
    }

    pub fn normalize_unicode(self) -> Self {
        Self::new(normalization::normalize_unicode(&self.text))
    }

    pub fn collapse_whitespace(self) -> Self {
        Self::new(normalization::collapse_whitespace(&self.text))
    }

    pub fn expand_contractions(self) -> Self {
        Self::new(contractions::expand_contractions(&self.text))
    }

    pub fn space_out_punctuation(self) -> Self {
        self.space_out_punctuation_with(PunctuationSet::standard())
    }

    pub fn space_out_punctuation_with(self, set: &PunctuationSet) -> Self {
        Self::new(punctuation::space_out_punctuation_with(&self.text, set))
    }

    pub fn bucket_numbers(self) -> Self {
        Self::new(numbers::bucket_numbers(&self.text))
    }
}

impl From<&str> for TextDocument {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for TextDocument {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<TextDocument> for String {
    fn from(doc: TextDocument) -> Self {
        doc.text
    }
}

impl AsRef<str> for TextDocument {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
