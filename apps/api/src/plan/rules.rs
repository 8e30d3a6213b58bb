//! Blocking-point rule table.
//!
//! Rules are grouped. Groups are evaluated independently, in order, and within a
//! group the first matching rule wins. Thresholds that differ between the report
//! and the in-quiz analysis are configuration, not code branches.

use std::str::FromStr;

use serde::Serialize;

use crate::answers::typed::{ApplicationVolume, InterviewActivity, QuizAnswers, ResumeStrategy};
use crate::config::UnknownSetting;
use crate::plan::document::PitchKind;

/// Every blocking point the engine can emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockingKind {
    ResumeBlackHole,
    InconsistentResume,
    HiddenResumeFormat,
    LinkedinInvisibility,
    ApplicationTargeting,
    InterviewConversion,
    ResumeOptimizationGaps,
    NetworkingMissed,
    AtsOptimization,
}

impl BlockingKind {
    pub fn title(self) -> &'static str {
        match self {
            BlockingKind::ResumeBlackHole => "Resume Black Hole Syndrome",
            BlockingKind::InconsistentResume => "Inconsistent Resume Strategy",
            BlockingKind::HiddenResumeFormat => "Hidden Resume Format Issues",
            BlockingKind::LinkedinInvisibility => "LinkedIn Invisibility",
            BlockingKind::ApplicationTargeting => "Application Targeting Problem",
            BlockingKind::InterviewConversion => "Interview Conversion Problem",
            BlockingKind::ResumeOptimizationGaps => "Hidden Resume Optimization Gaps",
            BlockingKind::NetworkingMissed => "Networking Opportunity Missed",
            BlockingKind::AtsOptimization => "ATS Optimization Opportunity",
        }
    }

    /// Solution pitch embedded in the body. Fixed per category.
    pub fn pitch(self) -> PitchKind {
        match self {
            BlockingKind::ResumeBlackHole
            | BlockingKind::InconsistentResume
            | BlockingKind::HiddenResumeFormat
            | BlockingKind::ApplicationTargeting
            | BlockingKind::ResumeOptimizationGaps
            | BlockingKind::AtsOptimization => PitchKind::Resume,
            BlockingKind::LinkedinInvisibility | BlockingKind::NetworkingMissed => {
                PitchKind::Linkedin
            }
            BlockingKind::InterviewConversion => PitchKind::Interview,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleGroup {
    ResumeStrategy,
    Linkedin,
    Targeting,
}

impl RuleGroup {
    pub const ORDER: [RuleGroup; 3] = [
        RuleGroup::ResumeStrategy,
        RuleGroup::Linkedin,
        RuleGroup::Targeting,
    ];
}

/// Which "Application Targeting" thresholds apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetingRule {
    /// interviews ∈ {none, under10} and applications ∈ {10-30, 30-70}
    #[default]
    Report,
    /// interviews ∈ {none, 1-2} and applications ∈ {30-70, 70-150, 150+}
    Analysis,
}

impl TargetingRule {
    pub fn matches(self, answers: &QuizAnswers) -> bool {
        match self {
            TargetingRule::Report => {
                answers.interviews_in(&[InterviewActivity::NoInterviews, InterviewActivity::Under10])
                    && answers.applications_in(&[
                        ApplicationVolume::From10To30,
                        ApplicationVolume::From30To70,
                    ])
            }
            TargetingRule::Analysis => {
                answers.interviews_in(&[InterviewActivity::NoInterviews, InterviewActivity::OneToTwo])
                    && answers.applications_in(&[
                        ApplicationVolume::From30To70,
                        ApplicationVolume::From70To150,
                        ApplicationVolume::Over150,
                    ])
            }
        }
    }
}

impl FromStr for TargetingRule {
    type Err = UnknownSetting;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "report" => Ok(TargetingRule::Report),
            "analysis" => Ok(TargetingRule::Analysis),
            other => Err(UnknownSetting::new("TARGETING_RULE", other)),
        }
    }
}

/// Tunables for the rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleConfig {
    pub targeting: TargetingRule,
    /// Whether a customised-but-not-ATS-checked resume counts as a format issue.
    pub tailor_no_ats_format_issue: bool,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            targeting: TargetingRule::Report,
            tailor_no_ats_format_issue: true,
        }
    }
}

pub struct Rule {
    pub group: RuleGroup,
    pub kind: BlockingKind,
    pub applies: fn(&QuizAnswers, &RuleConfig) -> bool,
}

/// The rule table. Order within a group is precedence.
pub const RULES: &[Rule] = &[
    Rule {
        group: RuleGroup::ResumeStrategy,
        kind: BlockingKind::ResumeBlackHole,
        applies: resume_black_hole,
    },
    Rule {
        group: RuleGroup::ResumeStrategy,
        kind: BlockingKind::InconsistentResume,
        applies: inconsistent_resume,
    },
    Rule {
        group: RuleGroup::ResumeStrategy,
        kind: BlockingKind::HiddenResumeFormat,
        applies: hidden_resume_format,
    },
    Rule {
        group: RuleGroup::Linkedin,
        kind: BlockingKind::LinkedinInvisibility,
        applies: linkedin_invisible,
    },
    Rule {
        group: RuleGroup::Targeting,
        kind: BlockingKind::ApplicationTargeting,
        applies: application_targeting,
    },
    Rule {
        group: RuleGroup::Targeting,
        kind: BlockingKind::InterviewConversion,
        applies: interview_conversion,
    },
];

fn resume_black_hole(a: &QuizAnswers, _: &RuleConfig) -> bool {
    a.resume_is(&ResumeStrategy::Same) || a.applications_in(&[ApplicationVolume::Over150])
}

fn inconsistent_resume(a: &QuizAnswers, _: &RuleConfig) -> bool {
    a.resume_is(&ResumeStrategy::MinorTweaks) || a.resume_is(&ResumeStrategy::Partial)
}

fn hidden_resume_format(a: &QuizAnswers, config: &RuleConfig) -> bool {
    a.resume_is(&ResumeStrategy::TailoredAts)
        || (config.tailor_no_ats_format_issue && a.resume_is(&ResumeStrategy::TailoredNoAts))
}

fn linkedin_invisible(a: &QuizAnswers, _: &RuleConfig) -> bool {
    a.linkedin.as_ref().is_some_and(|l| l.is_invisible())
}

fn application_targeting(a: &QuizAnswers, config: &RuleConfig) -> bool {
    config.targeting.matches(a)
}

fn interview_conversion(a: &QuizAnswers, _: &RuleConfig) -> bool {
    a.interviews_in(&[
        InterviewActivity::ThreeToFive,
        InterviewActivity::Offers,
        InterviewActivity::Interviewing,
    ])
}

/// Runs every group and returns at most one kind per group, in group order.
pub fn evaluate(answers: &QuizAnswers, config: &RuleConfig) -> Vec<BlockingKind> {
    RuleGroup::ORDER
        .iter()
        .filter_map(|group| {
            RULES
                .iter()
                .filter(|rule| rule.group == *group)
                .find(|rule| (rule.applies)(answers, config))
                .map(|rule| rule.kind)
        })
        .collect()
}
