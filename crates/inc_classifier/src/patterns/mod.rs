//! Compiled rule tables.
//!
//! Every table is a named group of case-insensitive expressions matched
//! against [`inc_core::normalize`]d text. Groups are compiled once and shared
//! read-only through [`LIBRARY`].

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

mod context;
mod indicators;
mod negative;

pub use context::*;
pub use indicators::{ACCIDENT_INDICATORS, VEHICLE_INDICATORS};
pub use negative::NEGATIVE_PATTERNS;

lazy_static! {
    pub static ref LIBRARY: PatternLibrary = PatternLibrary::builtin();
}

#[derive(Debug, Clone)]
pub struct PatternGroup {
    name: &'static str,
    patterns: Vec<Regex>,
}

impl PatternGroup {
    /// Compiles a static table. The tables are part of the source, so a bad
    /// expression is a programming error.
    pub fn compile(name: &'static str, sources: &[&str]) -> Self {
        let patterns = sources
            .iter()
            .map(|source| {
                RegexBuilder::new(source)
                    .case_insensitive(true)
                    .build()
                    .unwrap_or_else(|e| panic!("invalid pattern in group {}: {}", name, e))
            })
            .collect();
        Self { name, patterns }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(text))
    }

    /// First pattern of the group matching `text`.
    pub fn find(&self, text: &str) -> Option<&Regex> {
        self.patterns.iter().find(|p| p.is_match(text))
    }
}

/// A match of the topic-exclusion tables.
#[derive(Debug, Clone, Copy)]
pub struct NegativeMatch<'a> {
    pub category: &'static str,
    pub pattern: &'a Regex,
}

#[derive(Debug, Clone)]
pub struct PatternLibrary {
    pub negative: Vec<PatternGroup>,
    pub explicit_negation: PatternGroup,
    pub generic_mention: PatternGroup,
    pub generic_mention_override: PatternGroup,
    pub past_reference: PatternGroup,
    pub past_reference_override: PatternGroup,
    pub dated_death: PatternGroup,
    pub dated_death_override: PatternGroup,
    pub viability: PatternGroup,
    pub viability_override: PatternGroup,
    pub vehicle: PatternGroup,
    pub accident: PatternGroup,
}

impl PatternLibrary {
    pub fn builtin() -> Self {
        Self {
            negative: NEGATIVE_PATTERNS
                .iter()
                .map(|(name, sources)| PatternGroup::compile(name, sources))
                .collect(),
            explicit_negation: PatternGroup::compile("explicit_negation", EXPLICIT_NEGATION),
            generic_mention: PatternGroup::compile("generic_mention", GENERIC_MENTION),
            generic_mention_override: PatternGroup::compile(
                "generic_mention_override",
                GENERIC_MENTION_OVERRIDE,
            ),
            past_reference: PatternGroup::compile("past_reference", PAST_REFERENCE),
            past_reference_override: PatternGroup::compile(
                "past_reference_override",
                PAST_REFERENCE_OVERRIDE,
            ),
            dated_death: PatternGroup::compile("dated_death", DATED_DEATH),
            dated_death_override: PatternGroup::compile("dated_death_override", DATED_DEATH_OVERRIDE),
            viability: PatternGroup::compile("viability", VIABILITY),
            viability_override: PatternGroup::compile("viability_override", VIABILITY_OVERRIDE),
            vehicle: PatternGroup::compile("vehicle", VEHICLE_INDICATORS),
            accident: PatternGroup::compile("accident", ACCIDENT_INDICATORS),
        }
    }

    pub fn negative_match(&self, text: &str) -> Option<NegativeMatch<'_>> {
        self.negative.iter().find_map(|group| {
            group.find(text).map(|pattern| NegativeMatch {
                category: group.name(),
                pattern,
            })
        })
    }

    pub fn negative_category(&self, name: &str) -> Option<&PatternGroup> {
        self.negative.iter().find(|g| g.name() == name)
    }

    /// Every group, negative categories first.
    pub fn groups(&self) -> impl Iterator<Item = &PatternGroup> {
        self.negative.iter().chain([
            &self.explicit_negation,
            &self.generic_mention,
            &self.generic_mention_override,
            &self.past_reference,
            &self.past_reference_override,
            &self.dated_death,
            &self.dated_death_override,
            &self.viability,
            &self.viability_override,
            &self.vehicle,
            &self.accident,
        ])
    }
}
