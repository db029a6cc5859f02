use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::text::normalize;

/// Identifier of an article, numeric for WordPress posts but accepted as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl Default for RecordId {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(id) => write!(f, "{}", id),
            RecordId::Text(id) if id.is_empty() => write!(f, "n/a"),
            RecordId::Text(id) => write!(f, "{}", id),
        }
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl From<i32> for RecordId {
    fn from(id: i32) -> Self {
        Self::Int(id.into())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Fatale,
    Grave,
    Moderato,
    #[default]
    Informativo,
}

/// Keyword table, matched as substrings of the normalized text.
const SEVERITY_KEYWORDS: &[(&str, Severity)] = &[
    ("morto", Severity::Fatale),
    ("morta", Severity::Fatale),
    ("decesso", Severity::Fatale),
    ("codice rosso", Severity::Grave),
    ("gravi", Severity::Grave),
    ("grave", Severity::Grave),
    ("feriti", Severity::Moderato),
    ("ferito", Severity::Moderato),
];

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Fatale,
        Severity::Grave,
        Severity::Moderato,
        Severity::Informativo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Fatale => "fatale",
            Severity::Grave => "grave",
            Severity::Moderato => "moderato",
            Severity::Informativo => "informativo",
        }
    }

    /// Most severe level whose keyword occurs in `text`.
    pub fn from_text(text: &str) -> Self {
        let ntext = normalize(text);
        SEVERITY_KEYWORDS
            .iter()
            .filter(|(keyword, _)| ntext.contains(keyword))
            .map(|(_, level)| *level)
            .min()
            .unwrap_or_default()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One harvested article, the unit the classifier works on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ArticleRecord {
    #[serde(default, deserialize_with = "lenient::id")]
    pub id: RecordId,
    #[serde(default, deserialize_with = "lenient::opt_text", skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datetime: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_int")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekday: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub excerpt: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub content: String,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub categories: Vec<String>,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient::severity")]
    pub severity: Severity,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub keywords: Vec<String>,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub roads: Vec<String>,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub cities: Vec<String>,
    /// Fields this crate does not know about, written back untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ArticleRecord {
    pub fn new(id: impl Into<RecordId>, title: &str, excerpt: &str, content: &str) -> Self {
        Self {
            id: id.into(),
            title: title.to_string(),
            excerpt: excerpt.to_string(),
            content: content.to_string(),
            ..Default::default()
        }
    }

    pub fn with_date(mut self, date: &str) -> Self {
        self.date = Some(date.to_string());
        self.year = self.parsed_date().map(|d| d.year());
        self
    }

    /// Title, excerpt and content joined by single spaces.
    pub fn full_text(&self) -> String {
        format!("{} {} {}", self.title, self.excerpt, self.content)
    }

    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let date = self.date.as_deref()?;
        let day = date.get(..10).unwrap_or(date);
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }

    /// `year` when present, otherwise the year of `date`.
    pub fn effective_year(&self) -> Option<i32> {
        self.year.or_else(|| self.parsed_date().map(|d| d.year()))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Rendered {
    #[serde(default)]
    pub rendered: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WpTerm {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub taxonomy: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WpEmbedded {
    #[serde(rename = "wp:term", default)]
    pub terms: Vec<Vec<WpTerm>>,
}

/// The part of a WordPress REST `post` object the harvester reads.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WpPost {
    pub id: i64,
    pub date: String,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub title: Rendered,
    #[serde(default)]
    pub excerpt: Rendered,
    #[serde(default)]
    pub content: Rendered,
    #[serde(rename = "_embedded", default)]
    pub embedded: Option<WpEmbedded>,
}

impl WpPost {
    /// Term names of the given taxonomy, across every embedded term group.
    pub fn term_names(&self, taxonomy: &str) -> Vec<String> {
        self.embedded
            .iter()
            .flat_map(|e| e.terms.iter().flatten())
            .filter(|t| t.taxonomy.as_deref() == Some(taxonomy))
            .filter_map(|t| t.name.clone())
            .collect()
    }
}

mod lenient {
    use super::*;

    /// Missing, `null` or non-string values read as text without failing the record.
    pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s,
            Some(other) => other.to_string(),
        })
    }

    pub fn opt_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        })
    }

    pub fn opt_int<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i32>, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(Value::Number(n)) => n.as_i64().and_then(|n| i32::try_from(n).ok()),
            Some(Value::String(s)) => s.trim().parse().ok(),
            _ => None,
        })
    }

    /// Integral numbers stay numeric ids; anything else non-null becomes text.
    pub fn id<'de, D: Deserializer<'de>>(d: D) -> Result<RecordId, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            None | Some(Value::Null) => RecordId::default(),
            Some(Value::Number(n)) => match (n.as_i64(), n.as_f64()) {
                (Some(id), _) => RecordId::Int(id),
                (None, Some(f)) if f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
                    RecordId::Int(f as i64)
                }
                _ => RecordId::Text(n.to_string()),
            },
            Some(Value::String(s)) => RecordId::Text(s),
            Some(other) => RecordId::Text(other.to_string()),
        })
    }

    /// A list of labels; `null` or a non-array reads as empty, `null` items are skipped.
    pub fn strings<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
        Ok(match Option::<Value>::deserialize(d)? {
            Some(Value::Array(items)) => items
                .into_iter()
                .filter_map(|item| match item {
                    Value::Null => None,
                    Value::String(s) => Some(s),
                    other => Some(other.to_string()),
                })
                .collect(),
            _ => Vec::new(),
        })
    }

    /// Unknown labels fall back to `informativo`.
    pub fn severity<'de, D: Deserializer<'de>>(d: D) -> Result<Severity, D::Error> {
        let label = match Option::<Value>::deserialize(d)? {
            Some(Value::String(s)) => s.trim().to_lowercase(),
            _ => return Ok(Severity::default()),
        };
        Ok(Severity::ALL
            .into_iter()
            .find(|level| level.as_str() == label)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_picks_most_severe() {
        assert_eq!(Severity::from_text("Due feriti, uno in codice rosso"), Severity::Grave);
        assert_eq!(Severity::from_text("Un ferito lieve"), Severity::Moderato);
        assert_eq!(Severity::from_text("Grave incidente, un MORTO e tre feriti"), Severity::Fatale);
        assert_eq!(Severity::from_text("Traffico rallentato"), Severity::Informativo);
        assert_eq!(Severity::from_text(""), Severity::Informativo);
    }

    #[test]
    fn test_record_tolerates_missing_and_null_fields() {
        let json = r#"[
            {"id": 7, "title": null, "content": "testo"},
            {"id": "abc", "excerpt": 12, "year": "2021"},
            {"title": "senza id", "year": "n/d"}
        ]"#;
        let records: Vec<ArticleRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records[0].id, RecordId::Int(7));
        assert_eq!(records[0].title, "");
        assert_eq!(records[0].excerpt, "");
        assert_eq!(records[1].id, RecordId::Text("abc".into()));
        assert_eq!(records[1].excerpt, "12");
        assert_eq!(records[1].year, Some(2021));
        assert_eq!(records[2].id.to_string(), "n/a");
        assert_eq!(records[2].year, None);
        assert_eq!(records[2].severity, Severity::Informativo);
    }

    #[test]
    fn test_record_tolerates_malformed_ids_lists_and_severity() {
        let json = r#"[
            {"id": 1, "roads": null, "cities": "Corato", "title": "a"},
            {"id": 2, "severity": "alta", "categories": null, "tags": ["Cronaca", null, 5]},
            {"id": null, "severity": "GRAVE", "keywords": {"k": "v"}},
            {"id": 1.5},
            {"id": 3.0, "severity": 4},
            {"id": true}
        ]"#;
        let records: Vec<ArticleRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 6);

        assert_eq!(records[0].id, RecordId::Int(1));
        assert!(records[0].roads.is_empty());
        assert!(records[0].cities.is_empty());
        assert_eq!(records[0].title, "a");

        assert_eq!(records[1].severity, Severity::Informativo);
        assert!(records[1].categories.is_empty());
        assert_eq!(records[1].tags, vec!["Cronaca", "5"]);

        assert_eq!(records[2].id, RecordId::default());
        assert_eq!(records[2].severity, Severity::Grave);
        assert!(records[2].keywords.is_empty());

        assert_eq!(records[3].id, RecordId::Text("1.5".into()));
        assert_eq!(records[4].id, RecordId::Int(3));
        assert_eq!(records[4].severity, Severity::Informativo);
        assert_eq!(records[5].id, RecordId::Text("true".into()));
    }

    #[test]
    fn test_record_preserves_unknown_fields() {
        let json = r#"{"id": 1, "title": "Città", "fonte": "redazione", "severity": "grave"}"#;
        let record: ArticleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.severity, Severity::Grave);
        assert_eq!(record.extra.get("fonte"), Some(&Value::String("redazione".into())));

        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["fonte"], "redazione");
        assert_eq!(back["title"], "Città");
    }

    #[test]
    fn test_effective_year_falls_back_to_date() {
        let record = ArticleRecord::new(1, "t", "", "");
        assert_eq!(record.effective_year(), None);

        let mut record = record.with_date("2023-05-04");
        assert_eq!(record.effective_year(), Some(2023));
        record.year = None;
        assert_eq!(record.effective_year(), Some(2023));
        record.date = Some("2019-01-02T10:00:00".into());
        assert_eq!(record.effective_year(), Some(2019));
    }

    #[test]
    fn test_post_term_names() {
        let json = r#"{
            "id": 10, "date": "2024-01-01T08:00:00",
            "title": {"rendered": "Titolo"},
            "_embedded": {"wp:term": [
                [{"name": "Cronaca", "taxonomy": "category"}],
                [{"name": "incidente", "taxonomy": "post_tag"}, {"name": "sp231", "taxonomy": "post_tag"}]
            ]}
        }"#;
        let post: WpPost = serde_json::from_str(json).unwrap();
        assert_eq!(post.term_names("category"), vec!["Cronaca"]);
        assert_eq!(post.term_names("post_tag"), vec!["incidente", "sp231"]);
        assert_eq!(post.excerpt.rendered, "");
    }
}
