//! Key-shape normalisation for legacy answer sets.
//!
//! Question sources that key answers as `q3_resumeStrategy` are rewritten to
//! `resume_strategy`. Rewritten keys only fill fields that alias resolution
//! over the raw keys left empty.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::answers::aliases::{is_truthy, normalize, AnswerRecord};

static QUESTION_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^q\d+_").expect("valid question prefix regex"));
static CAMEL_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid camel boundary regex"));

/// Strips a `q<digits>_` prefix, splits camelCase with `_`, then lowercases.
pub fn normalize_key(key: &str) -> String {
    let stripped = QUESTION_PREFIX.replace(key, "");
    CAMEL_BOUNDARY
        .replace_all(&stripped, "${1}_${2}")
        .to_lowercase()
}

/// Rewrites every key of `raw`. When two keys collapse onto the same name a
/// truthy key already in normalized form wins; otherwise the first truthy
/// value is kept.
pub fn normalize_keys(raw: &Map<String, Value>) -> Map<String, Value> {
    let mut out = Map::new();

    for (key, value) in raw {
        let normalized = normalize_key(key);
        let verbatim = normalized == *key && is_truthy(value);
        match out.get(&normalized) {
            Some(existing) if is_truthy(existing) && !verbatim => continue,
            _ => {
                out.insert(normalized, value.clone());
            }
        }
    }

    out
}

/// Alias resolution over the raw keys, with the key-shape pre-pass filling
/// only the fields still missing.
pub fn normalize_legacy(raw: &Map<String, Value>) -> AnswerRecord {
    let mut record = normalize(raw);
    record.fill_missing(normalize(&normalize_keys(raw)));
    record
}
