//! Quick analysis shown mid-quiz: one strength card, one blocking card and the
//! additive success probability. Both cards use their own first-match cascade,
//! independent of the full plan's rule table.

use serde::Serialize;

use crate::answers::typed::{
    ApplicationVolume, ApplyChannel, InterviewActivity, QuizAnswers, ResumeStrategy,
};
use crate::plan::probability::SuccessProbability;
use crate::plan::rules::TargetingRule;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InsightCard {
    pub name: &'static str,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickAnalysis {
    pub strength: InsightCard,
    pub blocking_point: InsightCard,
    pub success_probability: SuccessProbability,
}

const fn card(name: &'static str, message: &'static str) -> InsightCard {
    InsightCard { name, message }
}

pub fn strength_card(answers: &QuizAnswers) -> InsightCard {
    if answers.feels("determined") {
        card(
            "Determination",
            "Your commitment to completing this assessment shows you have the drive and focus to succeed.",
        )
    } else if answers.linkedin_is_large() {
        card(
            "Strong Professional Network",
            "You have 500+ LinkedIn connections - that's excellent! This gives you access to the hidden job market.",
        )
    } else if answers.resume_is(&ResumeStrategy::TailoredAts) {
        card(
            "Attention to Detail",
            "You customize your applications, which shows strategic thinking. This puts you ahead of 70% of job seekers.",
        )
    } else if answers.applying == Some(ApplyChannel::Network) {
        card(
            "Proactive Networking Skills",
            "You leverage networking instead of just job boards. This strategic approach significantly increases your chances.",
        )
    } else if answers.resume_is(&ResumeStrategy::MinorTweaks) {
        card(
            "Technical Awareness",
            "You understand ATS systems and optimize for them. This technical knowledge puts you ahead of most candidates.",
        )
    } else if answers.interviews_in(&[
        InterviewActivity::ThreeToFive,
        InterviewActivity::Offers,
        InterviewActivity::Interviewing,
    ]) {
        card(
            "Strong Application Profile",
            "You're getting interviews - your profile is working! We just need to optimize your interview-to-offer conversion.",
        )
    } else if answers.feels("hopeful") {
        card(
            "Optimism & Resilience",
            "Your positive outlook is a powerful asset. Employers value candidates who maintain hope through challenges.",
        )
    } else {
        card(
            "Action-Taking Mindset",
            "You're taking action by completing this assessment! That's the #1 predictor of success.",
        )
    }
}

pub fn blocking_card(answers: &QuizAnswers) -> InsightCard {
    if answers.applications_in(&[ApplicationVolume::Over150])
        && answers.resume_is(&ResumeStrategy::Same)
    {
        card(
            "Resume Strategy",
            "Your 'one-size-fits-all' resume is likely getting filtered out by ATS bots before a human ever sees it.",
        )
    } else if answers.resume_is(&ResumeStrategy::Same)
        || answers.resume_is(&ResumeStrategy::TailoredNoAts)
    {
        card(
            "ATS Optimization",
            "80% of your resumes are likely rejected by bots, not humans. ATS compatibility is critical.",
        )
    } else if answers.linkedin.as_ref().is_some_and(|l| l.is_invisible()) {
        card(
            "LinkedIn Presence",
            "Being inactive on LinkedIn means you're invisible to 70% of recruiters who use it to source candidates.",
        )
    } else if !answers.applying.as_ref().is_some_and(|c| c.uses_network()) {
        card(
            "Networking Gap",
            "Relying solely on job portals can be inefficient. A lack of networking might be holding you back from the hidden job market.",
        )
    } else if TargetingRule::Analysis.matches(answers) {
        card(
            "Application Targeting",
            "Low response rates suggest you might be targeting roles that don't align with your profile or experience level.",
        )
    } else if answers.interviews_in(&[InterviewActivity::ThreeToFive]) {
        card(
            "Interview Conversion Gap",
            "You're getting interviews but not converting them. There's likely a gap in interview preparation or storytelling.",
        )
    } else if answers.applications_in(&[ApplicationVolume::Under10]) {
        card(
            "Application Volume",
            "Your application volume might not be high enough to generate consistent interview opportunities in this competitive market.",
        )
    } else {
        card(
            "Job Search Strategy",
            "Your current approach needs refinement. Small strategic changes can dramatically improve your results.",
        )
    }
}

pub fn quick_analysis(answers: &QuizAnswers, probability: SuccessProbability) -> QuickAnalysis {
    QuickAnalysis {
        strength: strength_card(answers),
        blocking_point: blocking_card(answers),
        success_probability: probability,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::typed::LinkedinPresence;

    fn networked() -> QuizAnswers {
        QuizAnswers {
            applying: Some(ApplyChannel::Network),
            ..QuizAnswers::default()
        }
    }

    #[test]
    fn test_empty_answers_use_defaults() {
        let a = QuizAnswers::default();
        assert_eq!(strength_card(&a).name, "Action-Taking Mindset");
        // Absent channel counts as "not networking".
        assert_eq!(blocking_card(&a).name, "Networking Gap");
    }

    #[test]
    fn test_determination_beats_everything() {
        let a = QuizAnswers {
            emotional_state: vec!["stressed".into(), "determined".into()],
            linkedin: Some(LinkedinPresence::Over1000),
            resume_strategy: Some(ResumeStrategy::TailoredAts),
            ..QuizAnswers::default()
        };
        assert_eq!(strength_card(&a).name, "Determination");
    }

    #[test]
    fn test_strength_cascade_order() {
        let large = QuizAnswers {
            linkedin: Some(LinkedinPresence::Over500),
            resume_strategy: Some(ResumeStrategy::TailoredAts),
            ..QuizAnswers::default()
        };
        assert_eq!(strength_card(&large).name, "Strong Professional Network");

        let ats = QuizAnswers {
            resume_strategy: Some(ResumeStrategy::TailoredAts),
            applying: Some(ApplyChannel::Network),
            ..QuizAnswers::default()
        };
        assert_eq!(strength_card(&ats).name, "Attention to Detail");

        assert_eq!(strength_card(&networked()).name, "Proactive Networking Skills");

        let tweaks = QuizAnswers {
            resume_strategy: Some(ResumeStrategy::MinorTweaks),
            ..QuizAnswers::default()
        };
        assert_eq!(strength_card(&tweaks).name, "Technical Awareness");

        let interviewing = QuizAnswers {
            interviews: Some(InterviewActivity::Interviewing),
            ..QuizAnswers::default()
        };
        assert_eq!(strength_card(&interviewing).name, "Strong Application Profile");

        let hopeful = QuizAnswers {
            emotional_state: vec!["hopeful".into()],
            ..QuizAnswers::default()
        };
        assert_eq!(strength_card(&hopeful).name, "Optimism & Resilience");
    }

    #[test]
    fn test_mixed_channel_is_not_proactive_networking() {
        let a = QuizAnswers {
            applying: Some(ApplyChannel::Mixed),
            ..QuizAnswers::default()
        };
        assert_eq!(strength_card(&a).name, "Action-Taking Mindset");
    }

    #[test]
    fn test_spray_and_pray_same_resume() {
        let a = QuizAnswers {
            applications: Some(ApplicationVolume::Over150),
            resume_strategy: Some(ResumeStrategy::Same),
            ..QuizAnswers::default()
        };
        assert_eq!(blocking_card(&a).name, "Resume Strategy");
    }

    #[test]
    fn test_same_or_unchecked_resume_is_ats_gap() {
        for strategy in [ResumeStrategy::Same, ResumeStrategy::TailoredNoAts] {
            let a = QuizAnswers {
                resume_strategy: Some(strategy),
                ..QuizAnswers::default()
            };
            assert_eq!(blocking_card(&a).name, "ATS Optimization");
        }
    }

    #[test]
    fn test_blocking_cascade_after_channel_check() {
        let invisible = QuizAnswers {
            linkedin: Some(LinkedinPresence::NotActive),
            ..QuizAnswers::default()
        };
        assert_eq!(blocking_card(&invisible).name, "LinkedIn Presence");

        let targeting = QuizAnswers {
            applications: Some(ApplicationVolume::From70To150),
            interviews: Some(InterviewActivity::OneToTwo),
            ..networked()
        };
        assert_eq!(blocking_card(&targeting).name, "Application Targeting");

        let conversion = QuizAnswers {
            interviews: Some(InterviewActivity::ThreeToFive),
            ..networked()
        };
        assert_eq!(blocking_card(&conversion).name, "Interview Conversion Gap");

        let low_volume = QuizAnswers {
            applications: Some(ApplicationVolume::Under10),
            ..networked()
        };
        assert_eq!(blocking_card(&low_volume).name, "Application Volume");

        assert_eq!(blocking_card(&networked()).name, "Job Search Strategy");
    }

    #[test]
    fn test_quick_analysis_carries_probability() {
        let p = SuccessProbability {
            current: 50,
            optimized: 88,
        };
        let analysis = quick_analysis(&QuizAnswers::default(), p);
        assert_eq!(analysis.success_probability, p);
    }
}
