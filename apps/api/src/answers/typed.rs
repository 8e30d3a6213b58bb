//! Typed answers — every field decoded once into a tagged enum.
//!
//! Historical value spellings emitted by older quiz versions decode to the same
//! variant as the canonical value. Anything else lands in `Unrecognized`, which
//! the rule groups treat as "no match" and the summary renders verbatim.

use crate::answers::aliases::{AnswerRecord, Field};
use crate::region::Region;

/// Human-readable label for the summary table.
pub trait AnswerLabel {
    fn label(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Challenge {
    NoCalls,
    ResumeRejection,
    InterviewRejection,
    Clarity,
    Change,
    Unrecognized(String),
}

impl Challenge {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "no_calls" | "no_response" => Self::NoCalls,
            "resume_rejection" => Self::ResumeRejection,
            "interview_rejection" | "interview" => Self::InterviewRejection,
            "clarity" => Self::Clarity,
            "change" => Self::Change,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

impl AnswerLabel for Challenge {
    fn label(&self) -> &str {
        match self {
            Self::NoCalls => "Applying everywhere, hearing nothing back",
            Self::ResumeRejection => "Resume getting rejected by ATS",
            Self::InterviewRejection => "Getting interviews but no offers",
            Self::Clarity => "Need clarity on the right direction",
            Self::Change => "Want to change careers but feel stuck",
            Self::Unrecognized(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplicationVolume {
    Under10,
    UpTo20,
    From10To30,
    From20To70,
    From30To70,
    From70To150,
    Over150,
    Unrecognized(String),
}

impl ApplicationVolume {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "under10" => Self::Under10,
            "0-20" => Self::UpTo20,
            "10-30" => Self::From10To30,
            "20-70" => Self::From20To70,
            "30-70" => Self::From30To70,
            "70-150" => Self::From70To150,
            "150+" => Self::Over150,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// Short phrase used inside blocking-point prose ("applying to 10–30 jobs").
    pub fn phrase(&self) -> &str {
        match self {
            Self::Under10 => "under 10",
            Self::UpTo20 => "0–20",
            Self::From10To30 => "10–30",
            Self::From20To70 => "20–70",
            Self::From30To70 => "30–70",
            Self::From70To150 => "70–150",
            Self::Over150 => "150+",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl AnswerLabel for ApplicationVolume {
    fn label(&self) -> &str {
        match self {
            Self::Under10 => "Less than 10 applications",
            Self::UpTo20 => "0–20 applications (Low Activity)",
            Self::From10To30 => "10–30 applications (Focused Search)",
            Self::From20To70 => "20–70 applications (Moderate Activity)",
            Self::From30To70 => "30–70 applications (High Volume)",
            Self::From70To150 => "70–150 applications (High Activity)",
            Self::Over150 => "150+ applications (Spray & Pray)",
            Self::Unrecognized(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResumeStrategy {
    Same,
    MinorTweaks,
    Partial,
    TailoredAts,
    TailoredNoAts,
    Unrecognized(String),
}

impl ResumeStrategy {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "same" | "same_resume" => Self::Same,
            "minor_tweaks" | "tweaks" => Self::MinorTweaks,
            "partial" => Self::Partial,
            "tailor_ats" | "ats_optimized" => Self::TailoredAts,
            "tailor_no_ats" | "custom_no_ats" => Self::TailoredNoAts,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

impl AnswerLabel for ResumeStrategy {
    fn label(&self) -> &str {
        match self {
            Self::Same => "Using the same resume everywhere",
            Self::MinorTweaks => "Minor tweaks for each job",
            Self::Partial => "Customized for some roles only",
            Self::TailoredAts => "Tailored and ATS-Optimized Resume",
            Self::TailoredNoAts => "Customized, but not ATS checked",
            Self::Unrecognized(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkedinPresence {
    NotActive,
    Under100,
    From100To500,
    Over500,
    Over1000,
    Unrecognized(String),
}

impl LinkedinPresence {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "not_active" => Self::NotActive,
            "under100" | "under_100" => Self::Under100,
            "100-500" | "100_500" => Self::From100To500,
            "500+" | "500_1000" => Self::Over500,
            "1000+" | "1000_plus" => Self::Over1000,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn is_large_network(&self) -> bool {
        matches!(self, Self::Over500 | Self::Over1000)
    }

    pub fn is_invisible(&self) -> bool {
        matches!(self, Self::NotActive | Self::Under100)
    }
}

impl AnswerLabel for LinkedinPresence {
    fn label(&self) -> &str {
        match self {
            Self::NotActive => "Not active on LinkedIn",
            Self::Under100 => "Under 100 connections",
            Self::From100To500 => "100–500 connections",
            Self::Over500 => "500+ connections",
            Self::Over1000 => "1000+ connections",
            Self::Unrecognized(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InterviewActivity {
    NoInterviews,
    Under10,
    OneToTwo,
    ThreeToFive,
    Interviewing,
    Offers,
    Unrecognized(String),
}

impl InterviewActivity {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "none" => Self::NoInterviews,
            "under10" => Self::Under10,
            "1-2" => Self::OneToTwo,
            "3-5" => Self::ThreeToFive,
            "interviewing" => Self::Interviewing,
            "offers" => Self::Offers,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// Any interview traction at all.
    pub fn has_activity(&self) -> bool {
        matches!(
            self,
            Self::OneToTwo | Self::ThreeToFive | Self::Interviewing | Self::Offers
        )
    }
}

impl AnswerLabel for InterviewActivity {
    fn label(&self) -> &str {
        match self {
            Self::NoInterviews => "No interviews yet",
            Self::Under10 => "Fewer than 10 interviews",
            Self::OneToTwo => "1–2 interviews so far",
            Self::ThreeToFive => "3–5 interviews so far",
            Self::Interviewing => "Currently interviewing",
            Self::Offers => "Received offers",
            Self::Unrecognized(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Timeline {
    Asap,
    OneToThreeMonths,
    ThreeToSixMonths,
    Exploring,
    Unrecognized(String),
}

impl Timeline {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "asap" => Self::Asap,
            "1-3" => Self::OneToThreeMonths,
            "3-6" => Self::ThreeToSixMonths,
            "exploring" => Self::Exploring,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

impl AnswerLabel for Timeline {
    fn label(&self) -> &str {
        match self {
            Self::Asap => "ASAP – within 30 days",
            Self::OneToThreeMonths => "Within 1–3 months",
            Self::ThreeToSixMonths => "Within 3–6 months",
            Self::Exploring => "Just exploring for now",
            Self::Unrecognized(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CareerStage {
    Fresher,
    Early,
    Mid,
    Senior,
    Changer,
    Unrecognized(String),
}

impl CareerStage {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "fresher" => Self::Fresher,
            "early" => Self::Early,
            "mid" => Self::Mid,
            "senior" => Self::Senior,
            "changer" => Self::Changer,
            other => Self::Unrecognized(other.to_string()),
        }
    }
}

impl AnswerLabel for CareerStage {
    fn label(&self) -> &str {
        match self {
            Self::Fresher => "Fresher (0–1 year)",
            Self::Early => "Early Career (0–3 years)",
            Self::Mid => "Mid-Career (4–10 years)",
            Self::Senior => "Senior Professional (10+ years)",
            Self::Changer => "Career Changer / Transitioning",
            Self::Unrecognized(raw) => raw,
        }
    }
}

/// Where the candidate sends applications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyChannel {
    Portals,
    Company,
    Network,
    Mixed,
    Unrecognized(String),
}

impl ApplyChannel {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "portals" => Self::Portals,
            "company" => Self::Company,
            "network" => Self::Network,
            "mixed" | "all" => Self::Mixed,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn uses_network(&self) -> bool {
        matches!(self, Self::Network | Self::Mixed)
    }
}

/// Salary bands. India answers are in lakh, everyone else in USD thousands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SalaryBand {
    Lakh3To8,
    Lakh8To20,
    Lakh20To40,
    Lakh40Plus,
    Usd50To80k,
    Usd80To120k,
    Usd120To180k,
    Usd180kPlus,
    Unrecognized(String),
}

impl SalaryBand {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "3-8L" => Self::Lakh3To8,
            "8-20L" => Self::Lakh8To20,
            "20-40L" => Self::Lakh20To40,
            "40L+" => Self::Lakh40Plus,
            "50-80k" => Self::Usd50To80k,
            "80-120k" => Self::Usd80To120k,
            "120-180k" => Self::Usd120To180k,
            "180k+" => Self::Usd180kPlus,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    /// Label for this band in `region`, or `None` when the band does not
    /// belong to the region's currency.
    pub fn label_for(&self, region: &Region) -> Option<&'static str> {
        match (region.is_india(), self) {
            (true, Self::Lakh3To8) => Some("₹3L – ₹8L"),
            (true, Self::Lakh8To20) => Some("₹8L – ₹20L"),
            (true, Self::Lakh20To40) => Some("₹20L – ₹40L"),
            (true, Self::Lakh40Plus) => Some("₹40L+"),
            (false, Self::Usd50To80k) => Some("$50K – $80K"),
            (false, Self::Usd80To120k) => Some("$80K – $120K"),
            (false, Self::Usd120To180k) => Some("$120K – $180K"),
            (false, Self::Usd180kPlus) => Some("$180K+"),
            _ => None,
        }
    }
}

/// A fully decoded answer set. Built once per request from an `AnswerRecord`.
/// Contact fields stay on the record; only quiz answers are decoded here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuizAnswers {
    pub challenge: Option<Challenge>,
    pub applications: Option<ApplicationVolume>,
    pub resume_strategy: Option<ResumeStrategy>,
    pub linkedin: Option<LinkedinPresence>,
    pub interviews: Option<InterviewActivity>,
    pub timeline: Option<Timeline>,
    pub experience: Option<CareerStage>,
    pub salary: Option<SalaryBand>,
    pub applying: Option<ApplyChannel>,
    pub emotional_state: Vec<String>,
}

impl QuizAnswers {
    pub fn from_record(record: &AnswerRecord) -> Self {
        let text = |field: Field| record.text(field);

        QuizAnswers {
            challenge: text(Field::Challenge).map(|v| Challenge::parse(&v)),
            applications: text(Field::Applications).map(|v| ApplicationVolume::parse(&v)),
            resume_strategy: text(Field::ResumeStrategy).map(|v| ResumeStrategy::parse(&v)),
            linkedin: text(Field::Linkedin).map(|v| LinkedinPresence::parse(&v)),
            interviews: text(Field::Interviews).map(|v| InterviewActivity::parse(&v)),
            timeline: text(Field::Urgency).map(|v| Timeline::parse(&v)),
            experience: text(Field::Experience).map(|v| CareerStage::parse(&v)),
            salary: text(Field::Salary).map(|v| SalaryBand::parse(&v)),
            applying: text(Field::Applying).map(|v| ApplyChannel::parse(&v)),
            emotional_state: record.list(Field::EmotionalState),
        }
    }

    pub fn resume_is(&self, strategy: &ResumeStrategy) -> bool {
        self.resume_strategy.as_ref() == Some(strategy)
    }

    pub fn applications_in(&self, bands: &[ApplicationVolume]) -> bool {
        self.applications
            .as_ref()
            .is_some_and(|v| bands.contains(v))
    }

    pub fn interviews_in(&self, levels: &[InterviewActivity]) -> bool {
        self.interviews.as_ref().is_some_and(|v| levels.contains(v))
    }

    pub fn linkedin_is_large(&self) -> bool {
        self.linkedin
            .as_ref()
            .is_some_and(LinkedinPresence::is_large_network)
    }

    pub fn feels(&self, emotion: &str) -> bool {
        self.emotional_state.iter().any(|e| e.contains(emotion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::aliases::normalize;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> QuizAnswers {
        QuizAnswers::from_record(&normalize(value.as_object().unwrap()))
    }

    #[test]
    fn test_historical_spellings_decode_to_canonical_variants() {
        assert_eq!(ResumeStrategy::parse("same_resume"), ResumeStrategy::Same);
        assert_eq!(ResumeStrategy::parse("tweaks"), ResumeStrategy::MinorTweaks);
        assert_eq!(ResumeStrategy::parse("ats_optimized"), ResumeStrategy::TailoredAts);
        assert_eq!(ResumeStrategy::parse("custom_no_ats"), ResumeStrategy::TailoredNoAts);
        assert_eq!(LinkedinPresence::parse("1000_plus"), LinkedinPresence::Over1000);
        assert_eq!(LinkedinPresence::parse("under_100"), LinkedinPresence::Under100);
        assert_eq!(Challenge::parse("no_response"), Challenge::NoCalls);
        assert_eq!(ApplyChannel::parse("all"), ApplyChannel::Mixed);
    }

    #[test]
    fn test_unknown_value_is_explicit_variant() {
        assert_eq!(
            InterviewActivity::parse("dozens"),
            InterviewActivity::Unrecognized("dozens".to_string())
        );
        assert_eq!(InterviewActivity::parse("dozens").label(), "dozens");
    }

    #[test]
    fn test_decoding_is_case_sensitive() {
        assert_eq!(
            ResumeStrategy::parse("SAME"),
            ResumeStrategy::Unrecognized("SAME".to_string())
        );
    }

    #[test]
    fn test_from_record_reads_aliases() {
        let answers = decode(json!({
            "resumeStrategy": "tailor_ats",
            "linkedin_presence": "500+",
            "timeline_goal": "asap",
            "emotional_state": ["determined"]
        }));
        assert_eq!(answers.resume_strategy, Some(ResumeStrategy::TailoredAts));
        assert!(answers.linkedin_is_large());
        assert_eq!(answers.timeline, Some(Timeline::Asap));
        assert!(answers.feels("determined"));
        assert!(answers.challenge.is_none());
    }

    #[test]
    fn test_salary_label_depends_on_region() {
        let india = Region::parse(Some("IN"));
        let us = Region::parse(Some("US"));

        assert_eq!(SalaryBand::Lakh8To20.label_for(&india), Some("₹8L – ₹20L"));
        assert_eq!(SalaryBand::Lakh8To20.label_for(&us), None);
        assert_eq!(SalaryBand::Usd180kPlus.label_for(&us), Some("$180K+"));
        assert_eq!(SalaryBand::Usd180kPlus.label_for(&india), None);
        assert_eq!(
            SalaryBand::Unrecognized("lots".to_string()).label_for(&us),
            None
        );
    }

    #[test]
    fn test_interview_activity_excludes_none_and_under10() {
        assert!(!InterviewActivity::NoInterviews.has_activity());
        assert!(!InterviewActivity::Under10.has_activity());
        assert!(InterviewActivity::OneToTwo.has_activity());
        assert!(InterviewActivity::Offers.has_activity());
    }
}
