//! "Career profile at a glance" table: fixed rows, human-readable values.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::answers::typed::{AnswerLabel, QuizAnswers, SalaryBand};
use crate::region::Region;

pub const NOT_SPECIFIED: &str = "Not specified";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
}

/// Ordered label → value table. Serialises as a JSON object in row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    rows: Vec<SummaryRow>,
}

#[cfg(test)]
impl Summary {
    pub fn rows(&self) -> &[SummaryRow] {
        &self.rows
    }

    pub fn get(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.value.as_str())
    }
}

impl Serialize for Summary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rows.len()))?;
        for row in &self.rows {
            map.serialize_entry(row.label, &row.value)?;
        }
        map.end()
    }
}

/// Label for a decoded answer; absent answers render as "Not specified".
pub fn display_text<T: AnswerLabel>(value: Option<&T>) -> String {
    match value.map(AnswerLabel::label) {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => NOT_SPECIFIED.to_string(),
    }
}

/// Salary label for `(band, region)`. Every unmapped pair is "Not specified".
pub fn salary_text(band: Option<&SalaryBand>, region: &Region) -> String {
    band.and_then(|b| b.label_for(region))
        .unwrap_or(NOT_SPECIFIED)
        .to_string()
}

pub fn build_summary(answers: &QuizAnswers, region: &Region) -> Summary {
    let rows = vec![
        SummaryRow {
            label: "Career Stage",
            value: display_text(answers.experience.as_ref()),
        },
        SummaryRow {
            label: "Primary Challenge",
            value: display_text(answers.challenge.as_ref()),
        },
        SummaryRow {
            label: "Application Volume",
            value: display_text(answers.applications.as_ref()),
        },
        SummaryRow {
            label: "Resume Strategy",
            value: display_text(answers.resume_strategy.as_ref()),
        },
        SummaryRow {
            label: "LinkedIn Presence",
            value: display_text(answers.linkedin.as_ref()),
        },
        SummaryRow {
            label: "Interview Success",
            value: display_text(answers.interviews.as_ref()),
        },
        SummaryRow {
            label: "Timeline Goal",
            value: display_text(answers.timeline.as_ref()),
        },
        SummaryRow {
            label: "Salary Target",
            value: salary_text(answers.salary.as_ref(), region),
        },
    ];

    Summary { rows }
}
