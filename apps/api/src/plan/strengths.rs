use serde::Serialize;

use crate::answers::typed::{QuizAnswers, ResumeStrategy};
use crate::plan::content::{ats_strength_body, linkedin_strength_body, resilience_strength_body};
use crate::plan::document::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthKind {
    LinkedinNetwork,
    TechnicalSavvy,
    Resilience,
}

impl StrengthKind {
    pub fn title(self) -> &'static str {
        match self {
            StrengthKind::LinkedinNetwork => "Strong LinkedIn Network",
            StrengthKind::TechnicalSavvy => "Attention to Detail & Technical Savvy",
            StrengthKind::Resilience => "Determination & Resilience",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Strength {
    pub title: String,
    pub kind: StrengthKind,
    pub body: Document,
}

/// First match wins; resilience is the unconditional fallback, so exactly one
/// strength is always produced.
pub fn select_strength(answers: &QuizAnswers) -> Strength {
    let kind = if answers.linkedin_is_large() {
        StrengthKind::LinkedinNetwork
    } else if answers.resume_is(&ResumeStrategy::TailoredAts) {
        StrengthKind::TechnicalSavvy
    } else {
        StrengthKind::Resilience
    };

    let body = match kind {
        StrengthKind::LinkedinNetwork => linkedin_strength_body(),
        StrengthKind::TechnicalSavvy => ats_strength_body(),
        StrengthKind::Resilience => resilience_strength_body(),
    };

    Strength {
        title: kind.title().to_string(),
        kind,
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answers::typed::LinkedinPresence;

    #[test]
    fn test_large_network_wins_over_ats() {
        let s = select_strength(&QuizAnswers {
            linkedin: Some(LinkedinPresence::Over1000),
            resume_strategy: Some(ResumeStrategy::TailoredAts),
            ..QuizAnswers::default()
        });
        assert_eq!(s.title, "Strong LinkedIn Network");
    }

    #[test]
    fn test_500_plus_counts_as_large() {
        let s = select_strength(&QuizAnswers {
            linkedin: Some(LinkedinPresence::Over500),
            ..QuizAnswers::default()
        });
        assert_eq!(s.kind, StrengthKind::LinkedinNetwork);
    }

    #[test]
    fn test_ats_resume_is_technical_savvy() {
        let s = select_strength(&QuizAnswers {
            linkedin: Some(LinkedinPresence::From100To500),
            resume_strategy: Some(ResumeStrategy::TailoredAts),
            ..QuizAnswers::default()
        });
        assert_eq!(s.title, "Attention to Detail & Technical Savvy");
    }

    #[test]
    fn test_tailored_without_ats_is_not_technical_savvy() {
        let s = select_strength(&QuizAnswers {
            resume_strategy: Some(ResumeStrategy::TailoredNoAts),
            ..QuizAnswers::default()
        });
        assert_eq!(s.kind, StrengthKind::Resilience);
    }

    #[test]
    fn test_empty_answers_fall_back_to_resilience() {
        let s = select_strength(&QuizAnswers::default());
        assert_eq!(s.title, "Determination & Resilience");
        assert!(!s.body.blocks.is_empty());
    }
}
