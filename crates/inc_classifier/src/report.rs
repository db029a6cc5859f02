use std::collections::BTreeMap;
use std::path::PathBuf;

use inc_core::text::truncate_chars;
use inc_core::{ArticleRecord, RecordId};
use serde::{Deserialize, Serialize};

use crate::reason::RejectionReason;

pub const SAMPLE_SIZE: usize = 10;
pub const SAMPLE_TITLE_CHARS: usize = 80;

/// A dropped record as written to the `*_removed.json` sibling file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemovedRecord {
    #[serde(flatten)]
    pub record: ArticleRecord,
    pub removal_reason: RejectionReason,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemovedSample {
    pub id: RecordId,
    pub title: String,
}

impl From<&RemovedRecord> for RemovedSample {
    fn from(removed: &RemovedRecord) -> Self {
        Self {
            id: removed.record.id.clone(),
            title: truncate_chars(&removed.record.title, SAMPLE_TITLE_CHARS).to_string(),
        }
    }
}

/// Summary of one cleaning run, built once and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleaningReport {
    pub total: usize,
    pub kept: usize,
    pub removed: usize,
    pub kept_pct: f64,
    pub removed_pct: f64,
    pub removed_by_reason: BTreeMap<RejectionReason, usize>,
    pub years_before: BTreeMap<i32, usize>,
    pub years_after: BTreeMap<i32, usize>,
    pub removed_samples: Vec<RemovedSample>,
    pub dry_run: bool,
    pub output: Option<PathBuf>,
}

impl CleaningReport {
    pub fn build(records: &[ArticleRecord], kept: &[ArticleRecord], removed: &[RemovedRecord]) -> Self {
        let mut removed_by_reason: BTreeMap<RejectionReason, usize> =
            RejectionReason::ALL.iter().map(|r| (*r, 0)).collect();
        for r in removed {
            *removed_by_reason.entry(r.removal_reason).or_default() += 1;
        }

        let total = records.len();
        Self {
            total,
            kept: kept.len(),
            removed: removed.len(),
            kept_pct: percentage(kept.len(), total),
            removed_pct: percentage(removed.len(), total),
            removed_by_reason,
            years_before: year_distribution(records),
            years_after: year_distribution(kept),
            removed_samples: removed.iter().take(SAMPLE_SIZE).map(RemovedSample::from).collect(),
            dry_run: false,
            output: None,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = output;
        self
    }

    pub fn log(&self) {
        tracing::info!("Total articles: {}", self.total);
        tracing::info!("Kept: {} ({:.1}%)", self.kept, self.kept_pct);
        tracing::info!("Removed: {} ({:.1}%)", self.removed, self.removed_pct);
        for (reason, count) in &self.removed_by_reason {
            tracing::info!("  {:<18} {:>5}  {}", reason.as_str(), count, reason.description());
        }

        let years: std::collections::BTreeSet<_> =
            self.years_before.keys().chain(self.years_after.keys()).collect();
        for year in years {
            let before = self.years_before.get(year).copied().unwrap_or(0);
            let after = self.years_after.get(year).copied().unwrap_or(0);
            tracing::info!("  {}: {} -> {}", year, before, after);
        }

        if !self.removed_samples.is_empty() {
            tracing::info!("First {} removed articles:", self.removed_samples.len());
            for sample in &self.removed_samples {
                tracing::info!("  [{}] {}", sample.id, sample.title);
            }
        }

        match (&self.output, self.dry_run) {
            (_, true) => tracing::info!("Dry run: nothing written"),
            (Some(path), false) => tracing::info!("Cleaned dataset written to {}", path.display()),
            (None, false) => {}
        }
    }
}

pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 * 100.0 / total as f64
    }
}

/// Records per year; records without a usable year are left out.
pub fn year_distribution(records: &[ArticleRecord]) -> BTreeMap<i32, usize> {
    let mut years = BTreeMap::new();
    for year in records.iter().filter_map(ArticleRecord::effective_year) {
        *years.entry(year).or_insert(0) += 1;
    }
    years
}
