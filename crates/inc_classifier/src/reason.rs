use std::fmt;

use serde::{Deserialize, Serialize};

/// Why an article was dropped. One variant per rejecting gate outcome.
///
/// `pattern_negativo`, `manca_veicolo` and `manca_incidente` are the tags older
/// reports carry. The other five come from the checks that sit between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RejectionReason {
    #[serde(rename = "pattern_negativo")]
    NegativePattern,
    #[serde(rename = "nessun_incidente")]
    ExplicitNegation,
    #[serde(rename = "menzione_generica")]
    GenericMention,
    #[serde(rename = "incidente_passato")]
    PastReference,
    #[serde(rename = "commemorazione")]
    DatedDeath,
    #[serde(rename = "viabilita")]
    Viability,
    #[serde(rename = "manca_veicolo")]
    MissingVehicle,
    #[serde(rename = "manca_incidente")]
    MissingAccident,
}

impl RejectionReason {
    pub const ALL: [RejectionReason; 8] = [
        RejectionReason::NegativePattern,
        RejectionReason::ExplicitNegation,
        RejectionReason::GenericMention,
        RejectionReason::PastReference,
        RejectionReason::DatedDeath,
        RejectionReason::Viability,
        RejectionReason::MissingVehicle,
        RejectionReason::MissingAccident,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RejectionReason::NegativePattern => "pattern_negativo",
            RejectionReason::ExplicitNegation => "nessun_incidente",
            RejectionReason::GenericMention => "menzione_generica",
            RejectionReason::PastReference => "incidente_passato",
            RejectionReason::DatedDeath => "commemorazione",
            RejectionReason::Viability => "viabilita",
            RejectionReason::MissingVehicle => "manca_veicolo",
            RejectionReason::MissingAccident => "manca_incidente",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RejectionReason::NegativePattern => "off-topic pattern",
            RejectionReason::ExplicitNegation => "states that no accident happened",
            RejectionReason::GenericMention => "accidents mentioned only generically",
            RejectionReason::PastReference => "only refers to a past accident",
            RejectionReason::DatedDeath => "commemorates an accident of a past year",
            RejectionReason::Viability => "traffic ordinance without an accident",
            RejectionReason::MissingVehicle => "no vehicle or road indicator",
            RejectionReason::MissingAccident => "no accident indicator",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_tags_match_as_str() {
        for reason in RejectionReason::ALL {
            let json = serde_json::to_string(&reason).unwrap();
            assert_eq!(json, format!("\"{}\"", reason.as_str()));
            let back: RejectionReason = serde_json::from_str(&json).unwrap();
            assert_eq!(back, reason);
        }
    }
}
