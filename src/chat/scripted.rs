//! Scripted response library for degraded mode.
//!
//! Utterances are embedded at compile time and parsed once. Selection
//! within a category is a uniform draw from an injected random source;
//! the closing utterance is fixed and never randomized. The library has
//! no state across calls beyond the random source the caller supplies.

use std::sync::OnceLock;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

use super::intent::ResponseCategory;

/// Embedded Korean utterance sets.
const EMBEDDED_UTTERANCES: &str = include_str!("responses_ko.json");

/// Candidate utterances per category.
#[derive(Debug, Deserialize)]
struct UtteranceSets {
    situation_start: Vec<String>,
    empathy: Vec<String>,
    socratic: Vec<String>,
    encouragement: Vec<String>,
    closing: Vec<String>,
}

/// Holds the per-category utterance sets and selects one on demand.
#[derive(Debug)]
pub struct ScriptedLibrary {
    sets: UtteranceSets,
}

impl ScriptedLibrary {
    /// Parse the embedded utterance data.
    ///
    /// # Panics
    /// Panics if the embedded JSON is invalid or any category is empty;
    /// both are compile-time data defects.
    pub fn new() -> Self {
        let sets: UtteranceSets = serde_json::from_str(EMBEDDED_UTTERANCES)
            .expect("Error decoding embedded responses_ko.json utterances.");
        assert!(
            !sets.situation_start.is_empty()
                && !sets.empathy.is_empty()
                && !sets.socratic.is_empty()
                && !sets.encouragement.is_empty()
                && !sets.closing.is_empty(),
            "Every utterance category must have at least one entry."
        );
        Self { sets }
    }

    /// Candidate utterances for a category.
    pub fn utterances(&self, category: ResponseCategory) -> &[String] {
        match category {
            ResponseCategory::SituationStart => &self.sets.situation_start,
            ResponseCategory::Empathy => &self.sets.empathy,
            ResponseCategory::Socratic => &self.sets.socratic,
            ResponseCategory::Encouragement => &self.sets.encouragement,
            ResponseCategory::Closing => &self.sets.closing,
        }
    }

    /// The fixed closing utterance.
    pub fn closing_utterance(&self) -> &str {
        &self.sets.closing[0]
    }

    /// Select a scripted response with the given random source.
    ///
    /// `Closing` always returns its single fixed utterance; every other
    /// category draws uniformly. Repeated calls may repeat.
    pub fn respond_with<R: Rng + ?Sized>(&self, category: ResponseCategory, rng: &mut R) -> String {
        if category == ResponseCategory::Closing {
            return self.closing_utterance().to_string();
        }
        self.utterances(category)
            .choose(rng)
            .expect("utterance sets are validated non-empty at construction")
            .clone()
    }

    /// Select a scripted response using thread-local entropy. Safe under
    /// concurrent use; each call draws from its own source.
    pub fn respond(&self, category: ResponseCategory) -> String {
        self.respond_with(category, &mut rand::thread_rng())
    }
}

impl Default for ScriptedLibrary {
    fn default() -> Self {
        Self::new()
    }
}

/// Global cached library instance.
static LIBRARY: OnceLock<ScriptedLibrary> = OnceLock::new();

/// Get the global cached `ScriptedLibrary`.
pub fn library() -> &'static ScriptedLibrary {
    LIBRARY.get_or_init(ScriptedLibrary::new)
}
