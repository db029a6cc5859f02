use inc_core::ArticleRecord;

use crate::classifier::{Classifier, Decision};
use crate::report::{CleaningReport, RemovedRecord};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Kept and removed partitions of a batch, both in input order.
#[derive(Debug, Clone)]
pub struct CleanOutcome {
    pub kept: Vec<ArticleRecord>,
    pub removed: Vec<RemovedRecord>,
    pub report: CleaningReport,
}

#[cfg(feature = "rayon")]
fn decide_all(classifier: &Classifier, records: &[ArticleRecord]) -> Vec<Decision> {
    records.par_iter().map(|r| classifier.classify(r)).collect()
}

#[cfg(not(feature = "rayon"))]
fn decide_all(classifier: &Classifier, records: &[ArticleRecord]) -> Vec<Decision> {
    records.iter().map(|r| classifier.classify(r)).collect()
}

pub fn clean(records: Vec<ArticleRecord>) -> CleanOutcome {
    clean_with(&Classifier::new(), records)
}

pub fn clean_with(classifier: &Classifier, records: Vec<ArticleRecord>) -> CleanOutcome {
    let decisions = decide_all(classifier, &records);

    let mut kept = Vec::new();
    let mut removed = Vec::new();
    for (record, decision) in records.iter().zip(decisions) {
        match decision.reason {
            None => kept.push(record.clone()),
            Some(reason) => removed.push(RemovedRecord {
                record: record.clone(),
                removal_reason: reason,
            }),
        }
    }

    let report = CleaningReport::build(&records, &kept, &removed);
    tracing::debug!("cleaned {} records: {} kept, {} removed", report.total, report.kept, report.removed);
    CleanOutcome { kept, removed, report }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reason::RejectionReason;

    fn batch() -> Vec<ArticleRecord> {
        vec![
            ArticleRecord::new(1, "Tamponamento sulla SP231, due feriti", "", "").with_date("2023-05-01"),
            ArticleRecord::new(2, "Nessun incidente a Pasquetta", "", "").with_date("2023-04-10"),
            ArticleRecord::new(3, "Auto fuori strada: il conducente è sbandato", "", "").with_date("2022-11-20"),
            ArticleRecord::new(4, "Elezioni comunali, i risultati", "", ""),
        ]
    }

    #[test]
    fn test_partitions_in_input_order() {
        let outcome = clean(batch());
        let kept: Vec<_> = outcome.kept.iter().map(|r| r.id.to_string()).collect();
        assert_eq!(kept, vec!["1", "3"]);

        let removed: Vec<_> = outcome
            .removed
            .iter()
            .map(|r| (r.record.id.to_string(), r.removal_reason))
            .collect();
        assert_eq!(
            removed,
            vec![
                ("2".to_string(), RejectionReason::ExplicitNegation),
                ("4".to_string(), RejectionReason::NegativePattern),
            ]
        );
    }

    #[test]
    fn test_report_counts() {
        let report = clean(batch()).report;
        assert_eq!(report.total, 4);
        assert_eq!(report.kept + report.removed, report.total);
        assert_eq!(report.years_before.get(&2023), Some(&2));
        assert_eq!(report.years_after.get(&2023), Some(&1));
        assert_eq!(report.years_after.get(&2022), Some(&1));
        assert!(!report.dry_run);
    }

    #[test]
    fn test_empty_batch() {
        let outcome = clean(Vec::new());
        assert!(outcome.kept.is_empty());
        assert!(outcome.removed.is_empty());
        assert_eq!(outcome.report.total, 0);
    }
}
