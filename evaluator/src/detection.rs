//! # Sensitive Data Detection
//!
//! Finds personal data in Dutch-language text: e-mail addresses, phone numbers, IBANs, citizen
//! service numbers (BSN, validated with the eleven test), postcodes and dates. Used to derive the
//! sensitive spans of anonymization exercises whose author did not list them explicitly.

use crate::types::{SensitiveKind, SensitiveSpan, Severity};
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}\b").expect("static regex")
});

static IBAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Z]{2}\d{2}\s?[A-Z]{4}(?:\s?\d{4}){2}(?:\s?\d{1,4})?\b").expect("static regex")
});

static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:\+31[\s-]?|\b0031[\s-]?|\b0)(?:6[\s-]?\d{8}|[1-9]\d{1,2}[\s-]?\d{6,7})\b")
        .expect("static regex")
});

static BSN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\d{9}\b").expect("static regex"));

static POSTCODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[1-9]\d{3}\s?[A-Z]{2}\b").expect("static regex"));

static DATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b\d{1,2}[-/.]\d{1,2}[-/.](?:\d{4}|\d{2})\b").expect("static regex")
});

pub fn severity_of(kind: SensitiveKind) -> Severity {
    match kind {
        SensitiveKind::Bsn | SensitiveKind::Iban => Severity::High,
        SensitiveKind::Name
        | SensitiveKind::Email
        | SensitiveKind::Phone
        | SensitiveKind::Address => Severity::Medium,
        SensitiveKind::Postcode | SensitiveKind::Date | SensitiveKind::Other => Severity::Low,
    }
}

/// Dutch BSN eleven test: weights 9..2 for the first eight digits, -1 for the last.
pub fn is_valid_bsn(candidate: &str) -> bool {
    let digits: Vec<i64> = candidate
        .chars()
        .filter_map(|c| c.to_digit(10).map(i64::from))
        .collect();
    if digits.len() != 9 || digits.iter().all(|d| *d == 0) {
        return false;
    }
    let sum: i64 = digits[..8]
        .iter()
        .zip((2..=9).rev())
        .map(|(d, w)| d * w)
        .sum::<i64>()
        - digits[8];
    sum % 11 == 0
}

/// Detects sensitive spans in `text`, in text order.
///
/// When matches overlap, the one starting first wins; on equal starts the longer one wins.
pub fn detect_sensitive_spans(text: &str) -> Vec<SensitiveSpan> {
    let patterns: [(&Lazy<Regex>, SensitiveKind); 6] = [
        (&EMAIL, SensitiveKind::Email),
        (&IBAN, SensitiveKind::Iban),
        (&PHONE, SensitiveKind::Phone),
        (&BSN, SensitiveKind::Bsn),
        (&POSTCODE, SensitiveKind::Postcode),
        (&DATE, SensitiveKind::Date),
    ];

    let mut candidates: Vec<(usize, usize, SensitiveKind)> = Vec::new();
    for (regex, kind) in patterns {
        for m in regex.find_iter(text) {
            if kind == SensitiveKind::Bsn && !is_valid_bsn(m.as_str()) {
                continue;
            }
            candidates.push((m.start(), m.end(), kind));
        }
    }

    candidates.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

    let mut spans = Vec::new();
    let mut covered_until = 0;
    for (start, end, kind) in candidates {
        if start < covered_until {
            continue;
        }
        covered_until = end;
        spans.push(SensitiveSpan {
            kind,
            text: text[start..end].to_string(),
            severity: severity_of(kind),
        });
    }
    spans
}
