//! Turns raw WordPress posts into dataset records.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use inc_core::text::normalize;
use inc_core::{ArticleRecord, Error, Result, Severity, WpPost};
use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};
use scraper::Html;

pub const MAX_MENTIONS: usize = 5;

lazy_static! {
    static ref ROAD_RE: Regex = RegexBuilder::new(
        r"\b(?:sp\s?\d+|ss\s?\d+|ex\s?\d+|strada\s+provinciale\s+\d+|strada\s+statale\s+\d+|via\s+[A-ZÀ-Ù][^,.;]+|piazza\s+[A-ZÀ-Ù][^,.;]+)"
    )
    .case_insensitive(true)
    .build()
    .unwrap();
    static ref CITY_RE: Regex = RegexBuilder::new(
        r"\b(?:Corato|Andria|Ruvo|Bisceglie|Trani|Bari|Bitonto|Altamura|Terlizzi|Giovinazzo|Molfetta|Barletta|Canosa)\b"
    )
    .case_insensitive(true)
    .build()
    .unwrap();
}

/// Text content of an HTML fragment, entities decoded and whitespace collapsed.
pub fn strip_html(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let text = fragment.root_element().text().collect::<Vec<_>>().join(" ");
    collapse_whitespace(&text)
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParts {
    pub date: String,
    pub datetime: String,
    pub year: i32,
    pub month: u32,
    pub month_name: String,
    pub weekday: String,
}

/// Accepts RFC 3339 timestamps, WordPress' naive `YYYY-MM-DDTHH:MM:SS` and
/// bare dates.
pub fn extract_date_parts(value: &str) -> Result<DateParts> {
    let value = value.trim();
    let (naive, datetime) = if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        (dt.naive_local(), dt.to_rfc3339())
    } else if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        (dt, dt.format("%Y-%m-%dT%H:%M:%S").to_string())
    } else if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        (dt, dt.format("%Y-%m-%dT%H:%M:%S").to_string())
    } else if let Some(dt) = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        (dt, dt.format("%Y-%m-%dT%H:%M:%S").to_string())
    } else {
        return Err(Error::DateParse(value.to_string()));
    };

    Ok(DateParts {
        date: naive.format("%Y-%m-%d").to_string(),
        datetime,
        year: naive.year(),
        month: naive.month(),
        month_name: naive.format("%B").to_string(),
        weekday: naive.format("%A").to_string(),
    })
}

/// Keywords (lowercased) found in the normalized text, in keyword order.
pub fn flag_keywords(text: &str, keywords: &[String]) -> Vec<String> {
    let text = normalize(text);
    keywords
        .iter()
        .map(|k| k.to_lowercase())
        .filter(|k| text.contains(normalize(k).as_str()))
        .collect()
}

/// Distinct matches of `pattern`, compared case-insensitively, first-seen order.
pub fn extract_mentions(pattern: &Regex, text: &str, limit: usize) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();
    for m in pattern.find_iter(text) {
        let mention = collapse_whitespace(m.as_str());
        if !found.iter().any(|f| f.to_lowercase() == mention.to_lowercase()) {
            found.push(mention);
        }
        if found.len() >= limit {
            break;
        }
    }
    found
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Locations {
    pub roads: Vec<String>,
    pub cities: Vec<String>,
}

pub fn detect_locations(text: &str) -> Locations {
    Locations {
        roads: extract_mentions(&ROAD_RE, text, MAX_MENTIONS),
        cities: extract_mentions(&CITY_RE, text, MAX_MENTIONS),
    }
}

pub fn post_to_record(post: &WpPost, keywords: &[String]) -> Result<ArticleRecord> {
    let parts = extract_date_parts(&post.date)?;
    let title = strip_html(&post.title.rendered);
    let excerpt = strip_html(&post.excerpt.rendered);
    let content = strip_html(&post.content.rendered);

    let full_text = format!("{}. {}. {}", title, excerpt, content);
    let full_text = full_text.trim();
    let locations = detect_locations(full_text);

    let mut record = ArticleRecord::new(post.id, &title, &excerpt, &content);
    record.date = Some(parts.date);
    record.datetime = Some(parts.datetime);
    record.year = Some(parts.year);
    record.month = Some(parts.month);
    record.month_name = Some(parts.month_name);
    record.weekday = Some(parts.weekday);
    record.link = post.link.clone();
    record.categories = post.term_names("category");
    record.tags = post.term_names("post_tag");
    record.severity = Severity::from_text(full_text);
    record.keywords = flag_keywords(full_text, keywords);
    record.roads = locations.roads;
    record.cities = locations.cities;
    Ok(record)
}
