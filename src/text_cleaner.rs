use crate::contractions::expand_contractions;
use crate::document::TextDocument;
use crate::error::CleaningError;
use crate::normalization::{collapse_whitespace, normalize_unicode};
use crate::numbers::bucket_numbers;
use crate::punctuation::{space_out_punctuation_with, PunctuationSet};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use log::debug;

/// One rewriting pass of the cleaning pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    NormalizeUnicode,
    CollapseWhitespace,
    ExpandContractions,
    SpaceOutPunctuation,
    BucketNumbers,
}

impl Stage {
    /// Every stage, in the order the pipeline runs them
    pub const ALL: [Stage; 5] = [
        Stage::NormalizeUnicode,
        Stage::CollapseWhitespace,
        Stage::ExpandContractions,
        Stage::SpaceOutPunctuation,
        Stage::BucketNumbers,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Stage::NormalizeUnicode => "normalize_unicode",
            Stage::CollapseWhitespace => "collapse_whitespace",
            Stage::ExpandContractions => "expand_contractions",
            Stage::SpaceOutPunctuation => "space_out_punctuation",
            Stage::BucketNumbers => "bucket_numbers",
        }
    }

    fn apply(&self, text: &str, puncts: &PunctuationSet) -> String {
        match self {
            Stage::NormalizeUnicode => normalize_unicode(text),
            Stage::CollapseWhitespace => collapse_whitespace(text),
            Stage::ExpandContractions => expand_contractions(text),
            Stage::SpaceOutPunctuation => space_out_punctuation_with(text, puncts),
            Stage::BucketNumbers => bucket_numbers(text),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stage {
    type Err = CleaningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stage::ALL
            .iter()
            .copied()
            .find(|stage| stage.name() == s)
            .ok_or_else(|| CleaningError::UnknownStage(s.to_string()))
    }
}

/// Which stages run, plus extra characters to treat as punctuation
///
/// Parsed from JSON such as
/// `{"stages": ["collapse_whitespace", "bucket_numbers"], "extra_punctuation": "¡"}`.
/// Missing fields fall back to the full pipeline and the standard set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CleanerConfig {
    pub stages: Vec<Stage>,
    pub extra_punctuation: String,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            stages: Stage::ALL.to_vec(),
            extra_punctuation: String::new(),
        }
    }
}

impl CleanerConfig {
    pub fn from_json(json: &str) -> Result<Self, CleaningError> {
        let config: CleanerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, CleaningError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn validate(&self) -> Result<(), CleaningError> {
        if self.stages.is_empty() {
            return Err(CleaningError::ConfigError("no stages enabled".to_string()));
        }

        for (i, stage) in self.stages.iter().enumerate() {
            if self.stages[..i].contains(stage) {
                return Err(CleaningError::ConfigError(format!(
                    "stage {} listed more than once",
                    stage
                )));
            }
        }

        Ok(())
    }
}

/// Text cleaning pipeline for classifier input
///
/// Stages always run in declared order:
/// 1. Unicode NFKD normalization
/// 2. Whitespace collapsing and trimming
/// 3. Contraction expansion
/// 4. Punctuation spacing
/// 5. Digit-run bucketing
///
/// The config only picks which of them run.
#[derive(Debug, Clone)]
pub struct TextCleaner {
    stages: Vec<Stage>,
    punctuation: PunctuationSet,
}

impl TextCleaner {
    /// Full pipeline with the standard punctuation set
    pub fn new() -> Self {
        Self {
            stages: Stage::ALL.to_vec(),
            punctuation: PunctuationSet::default(),
        }
    }

    pub fn from_config(config: &CleanerConfig) -> Result<Self, CleaningError> {
        config.validate()?;

        let mut stages = config.stages.clone();
        stages.sort();

        let punctuation = PunctuationSet::standard().with_extra(&config.extra_punctuation);

        debug!(
            "Initialized cleaner: stages={:?}, punctuation={} chars",
            stages,
            punctuation.len()
        );

        Ok(Self { stages, punctuation })
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    pub fn punctuation(&self) -> &PunctuationSet {
        &self.punctuation
    }

    /// Run the enabled stages over `text`
    pub fn clean(&self, text: &str) -> String {
        debug!("Cleaning text: {} bytes", text.len());

        let mut current = text.to_string();
        for stage in &self.stages {
            current = stage.apply(&current, &self.punctuation);
        }

        debug!("Cleaned text: {} -> {} bytes", text.len(), current.len());
        current
    }

    pub fn clean_document(&self, doc: TextDocument) -> TextDocument {
        TextDocument::new(self.clean(doc.text()))
    }

    /// Clean, then split on whitespace
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.clean(text)
            .split_whitespace()
            .map(|s| s.to_string())
            .collect()
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_pipeline() {
        let cleaner = TextCleaner::new();
        let result = cleaner.clean(" Don't  y'all  think 12345 is cool? ");
        assert_eq!(result, "Do not you all think ##### is cool ? ");
    }

    #[test]
    fn test_pipeline_matches_chained_document() {
        let input = "Ｉ’ve   paid\t£1,250 — isn't that 2 much?!";
        let chained = TextDocument::new(input)
            .normalize_unicode()
            .collapse_whitespace()
            .expand_contractions()
            .space_out_punctuation()
            .bucket_numbers();

        let cleaner = TextCleaner::new();
        assert_eq!(cleaner.clean_document(TextDocument::new(input)), chained);
    }

    #[test]
    fn test_stage_order_is_fixed() {
        let config = CleanerConfig {
            stages: vec![Stage::BucketNumbers, Stage::CollapseWhitespace],
            ..CleanerConfig::default()
        };
        let cleaner = TextCleaner::from_config(&config).unwrap();
        assert_eq!(
            cleaner.stages(),
            &[Stage::CollapseWhitespace, Stage::BucketNumbers]
        );
        assert_eq!(cleaner.clean("  room   101 "), "room ###");
    }

    #[test]
    fn test_disabled_stages_do_not_run() {
        let config = CleanerConfig::from_json(r#"{"stages": ["collapse_whitespace"]}"#).unwrap();
        let cleaner = TextCleaner::from_config(&config).unwrap();
        assert_eq!(cleaner.clean(" can't  stop 42 "), "can't stop 42");
    }

    #[test]
    fn test_extra_punctuation() {
        let config = CleanerConfig::from_json(r#"{"extra_punctuation": "¡"}"#).unwrap();
        let cleaner = TextCleaner::from_config(&config).unwrap();
        assert_eq!(config.stages, Stage::ALL.to_vec());
        assert_eq!(cleaner.clean("¡hola"), " ¡ hola");
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = CleanerConfig {
            stages: vec![Stage::NormalizeUnicode, Stage::SpaceOutPunctuation],
            extra_punctuation: "¡".to_string(),
        };
        let json = config.to_json().unwrap();
        assert!(json.contains("space_out_punctuation"));
        assert_eq!(CleanerConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_config_rejections() {
        assert!(matches!(
            CleanerConfig::from_json(r#"{"stages": []}"#),
            Err(CleaningError::ConfigError(_))
        ));
        assert!(matches!(
            CleanerConfig::from_json(r#"{"stages": ["bucket_numbers", "bucket_numbers"]}"#),
            Err(CleaningError::ConfigError(_))
        ));
        assert!(matches!(
            CleanerConfig::from_json(r#"{"stages": ["stem_words"]}"#),
            Err(CleaningError::InvalidJson(_))
        ));
        assert!(matches!(
            CleanerConfig::from_json(r#"{"lowercase": true}"#),
            Err(CleaningError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_stage_names() {
        for stage in Stage::ALL {
            assert_eq!(stage.name().parse::<Stage>().unwrap(), stage);
        }
        assert!(matches!(
            "lowercase".parse::<Stage>(),
            Err(CleaningError::UnknownStage(_))
        ));
    }

    #[test]
    fn test_tokenize() {
        let cleaner = TextCleaner::new();
        assert_eq!(
            cleaner.tokenize("Why can't I sleep?"),
            vec!["Why", "can", "not", "I", "sleep", "?"]
        );
    }
}
