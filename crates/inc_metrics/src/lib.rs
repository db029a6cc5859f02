//! Descriptive statistics over a cleaned dataset.

use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate};
use inc_core::{ArticleRecord, Severity};
use serde::{Deserialize, Serialize};

pub const MONTH_WINDOW: usize = 24;
pub const TOP_LOCATIONS: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

/// Shape of `metrics.json`, read by the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Metrics {
    pub totale_articoli: usize,
    pub periodo: Option<Period>,
    pub per_anno: BTreeMap<i32, usize>,
    pub per_mese: BTreeMap<String, usize>,
    pub per_severita: BTreeMap<Severity, usize>,
    pub top_strade: Vec<(String, usize)>,
    pub top_citta: Vec<(String, usize)>,
}

pub fn build_metrics(records: &[ArticleRecord]) -> Metrics {
    let dated: Vec<NaiveDate> = records.iter().filter_map(ArticleRecord::parsed_date).collect();
    if dated.len() < records.len() {
        tracing::debug!("{} records without a usable date", records.len() - dated.len());
    }

    let periodo = match (dated.iter().min(), dated.iter().max()) {
        (Some(min), Some(max)) => Some(Period { min: *min, max: *max }),
        _ => None,
    };

    let mut per_anno = BTreeMap::new();
    let mut months = BTreeMap::new();
    for date in &dated {
        *per_anno.entry(date.year()).or_insert(0) += 1;
        *months
            .entry(format!("{:04}-{:02}", date.year(), date.month()))
            .or_insert(0) += 1;
    }
    let skip = months.len().saturating_sub(MONTH_WINDOW);
    let per_mese = months.into_iter().skip(skip).collect();

    let mut per_severita = BTreeMap::new();
    for record in records {
        *per_severita.entry(record.severity).or_insert(0) += 1;
    }

    Metrics {
        totale_articoli: records.len(),
        periodo,
        per_anno,
        per_mese,
        per_severita,
        top_strade: top_counts(records.iter().flat_map(|r| r.roads.iter()), TOP_LOCATIONS),
        top_citta: top_counts(records.iter().flat_map(|r| r.cities.iter()), TOP_LOCATIONS),
    }
}

/// Most frequent title-cased names; ties keep first-seen order.
pub fn top_counts<'a>(names: impl Iterator<Item = &'a String>, n: usize) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for name in names {
        let name = title_case(name.trim());
        match index.get(&name) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(name.clone(), counts.len());
                counts.push((name, 1));
            }
        }
    }
    // Stable sort keeps insertion order among equal counts.
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(n);
    counts
}

/// Upper-cases the first letter of every alphabetic run, lower-cases the rest.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}
