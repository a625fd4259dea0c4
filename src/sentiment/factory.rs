//! Helper functions for creating sentiment classifiers.

use crate::config::ClassifierConfig;
use crate::sentiment::classifier::SentimentClassifier;
use crate::sentiment::keyword_classifier::KeywordSentimentClassifier;
use crate::sentiment::lexicon::KeywordLists;
use crate::sentiment::types::MatchMode;

/// Create a keyword classifier over the built-in lexicons.
pub fn new_keyword_based(match_mode: MatchMode) -> Box<dyn SentimentClassifier> {
    Box::new(KeywordSentimentClassifier::new(
        KeywordLists::DEFAULT,
        match_mode,
    ))
}

/// Create a keyword classifier from configuration.
pub fn new_keyword_based_with_config(config: &ClassifierConfig) -> Box<dyn SentimentClassifier> {
    new_keyword_based(config.match_mode)
}
