use inc_core::text::{normalize, truncate_chars};
use inc_core::ArticleRecord;
use serde::Serialize;

use crate::gates::{Gate, Verdict, GATES};
use crate::patterns::{PatternLibrary, LIBRARY};
use crate::reason::RejectionReason;

/// Outcome of classifying one record. Never stored, recomputed every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub accepted: bool,
    pub reason: Option<RejectionReason>,
    /// Gate that rejected the record, `None` when accepted.
    pub gate: Option<&'static str>,
}

impl Decision {
    pub fn accept() -> Self {
        Self {
            accepted: true,
            reason: None,
            gate: None,
        }
    }

    pub fn reject(gate: &'static str, reason: RejectionReason) -> Self {
        Self {
            accepted: false,
            reason: Some(reason),
            gate: Some(gate),
        }
    }
}

/// Runs the gate cascade over a record's normalized text.
#[derive(Debug, Clone, Copy)]
pub struct Classifier {
    library: &'static PatternLibrary,
    gates: &'static [Gate],
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            library: &*LIBRARY,
            gates: GATES,
        }
    }

    pub fn classify(&self, record: &ArticleRecord) -> Decision {
        let text = normalize(&record.full_text());
        let decision = self.classify_text(&text);
        if let Some(reason) = decision.reason {
            tracing::debug!(
                id = %record.id,
                gate = decision.gate.unwrap_or_default(),
                "rejected ({}): {}",
                reason,
                truncate_chars(&record.title, 60)
            );
        }
        decision
    }

    /// Classifies text that is already normalized.
    pub fn classify_text(&self, normalized: &str) -> Decision {
        for gate in self.gates {
            if let Verdict::Reject(reason) = (gate.check)(self.library, normalized) {
                return Decision::reject(gate.name, reason);
            }
        }
        Decision::accept()
    }

    pub fn is_incident(&self, record: &ArticleRecord) -> bool {
        self.classify(record).accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, content: &str) -> ArticleRecord {
        ArticleRecord::new(1, title, "", content)
    }

    #[test]
    fn test_accepts_current_accident() {
        let decision = Classifier::new().classify(&record(
            "Scontro sulla SP231",
            "Due auto si sono scontrate, un ferito trasportato in ospedale",
        ));
        assert_eq!(decision, Decision::accept());
    }

    #[test]
    fn test_rejection_names_the_gate() {
        let decision = Classifier::new().classify(&record("Nuovo senso unico in via Garibaldi", ""));
        assert!(!decision.accepted);
        assert_eq!(decision.reason, Some(RejectionReason::Viability));
        assert_eq!(decision.gate, Some("viability"));
    }

    #[test]
    fn test_empty_record_lacks_vehicle() {
        let decision = Classifier::new().classify(&ArticleRecord::default());
        assert_eq!(decision.reason, Some(RejectionReason::MissingVehicle));
    }

    #[test]
    fn test_classification_is_deterministic() {
        let classifier = Classifier::new();
        let r = record("Schianto sulla statale", "Il conducente è rimasto ferito");
        assert_eq!(classifier.classify(&r), classifier.classify(&r));
        assert!(classifier.is_incident(&r));
    }
}
