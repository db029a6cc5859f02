//! The classification cascade.
//!
//! Gates run in the order of [`GATES`]; the first one returning
//! [`Verdict::Reject`] decides. Earlier gates pre-empt later ones, so the
//! order is part of the behavior.

use crate::patterns::{PatternGroup, PatternLibrary};
use crate::reason::RejectionReason;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Continue,
    Reject(RejectionReason),
}

#[derive(Debug, Clone, Copy)]
pub struct Gate {
    pub name: &'static str,
    pub check: fn(&PatternLibrary, &str) -> Verdict,
}

pub const GATES: &[Gate] = &[
    Gate {
        name: "negative_pattern",
        check: negative_pattern,
    },
    Gate {
        name: "explicit_negation",
        check: explicit_negation,
    },
    Gate {
        name: "generic_mention",
        check: generic_mention,
    },
    Gate {
        name: "past_reference",
        check: past_reference,
    },
    Gate {
        name: "dated_death",
        check: dated_death,
    },
    Gate {
        name: "viability",
        check: viability,
    },
    Gate {
        name: "positive_evidence",
        check: positive_evidence,
    },
];

/// Rejects when `trigger` matches and `unless` does not.
fn unless_overridden(
    text: &str,
    trigger: &PatternGroup,
    unless: &PatternGroup,
    reason: RejectionReason,
) -> Verdict {
    if trigger.is_match(text) && !unless.is_match(text) {
        Verdict::Reject(reason)
    } else {
        Verdict::Continue
    }
}

pub fn negative_pattern(library: &PatternLibrary, text: &str) -> Verdict {
    match library.negative_match(text) {
        Some(_) => Verdict::Reject(RejectionReason::NegativePattern),
        None => Verdict::Continue,
    }
}

pub fn explicit_negation(library: &PatternLibrary, text: &str) -> Verdict {
    if library.explicit_negation.is_match(text) {
        Verdict::Reject(RejectionReason::ExplicitNegation)
    } else {
        Verdict::Continue
    }
}

pub fn generic_mention(library: &PatternLibrary, text: &str) -> Verdict {
    unless_overridden(
        text,
        &library.generic_mention,
        &library.generic_mention_override,
        RejectionReason::GenericMention,
    )
}

pub fn past_reference(library: &PatternLibrary, text: &str) -> Verdict {
    unless_overridden(
        text,
        &library.past_reference,
        &library.past_reference_override,
        RejectionReason::PastReference,
    )
}

pub fn dated_death(library: &PatternLibrary, text: &str) -> Verdict {
    unless_overridden(
        text,
        &library.dated_death,
        &library.dated_death_override,
        RejectionReason::DatedDeath,
    )
}

pub fn viability(library: &PatternLibrary, text: &str) -> Verdict {
    unless_overridden(
        text,
        &library.viability,
        &library.viability_override,
        RejectionReason::Viability,
    )
}

/// Needs a vehicle or road mention and an accident mention; vehicle is checked first.
pub fn positive_evidence(library: &PatternLibrary, text: &str) -> Verdict {
    if !library.vehicle.is_match(text) {
        Verdict::Reject(RejectionReason::MissingVehicle)
    } else if !library.accident.is_match(text) {
        Verdict::Reject(RejectionReason::MissingAccident)
    } else {
        Verdict::Continue
    }
}
