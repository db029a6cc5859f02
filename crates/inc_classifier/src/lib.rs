//! Rule-cascade classification of road-accident news.
//!
//! [`Classifier`] decides a single record; [`clean`] partitions a batch and
//! builds a [`CleaningReport`].

pub mod classifier;
pub mod cleaner;
pub mod gates;
pub mod patterns;
pub mod reason;
pub mod report;

pub use classifier::{Classifier, Decision};
pub use cleaner::{clean, clean_with, CleanOutcome};
pub use patterns::{PatternGroup, PatternLibrary, LIBRARY};
pub use reason::RejectionReason;
pub use report::{CleaningReport, RemovedRecord, RemovedSample};
