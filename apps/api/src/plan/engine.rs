//! Content derivation engine.
//!
//! `(AnswerRecord, Region) → ContentBundle`. Pure apart from the injected
//! optimized-score source; never fails.

use std::sync::Arc;

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::answers::aliases::{normalize, AnswerRecord};
use crate::answers::keys::normalize_legacy;
use crate::answers::typed::QuizAnswers;
use crate::config::Config;
use crate::plan::blocking::{select_blocking_points, BlockingPoint};
use crate::plan::insight::{quick_analysis, QuickAnalysis};
use crate::plan::probability::{
    compute_probability, FixedScore, OptimizedScoreSource, ProbabilityMode, ProbabilityOverride,
    SeededScore, SuccessProbability, ThreadRngScore,
};
use crate::plan::rules::RuleConfig;
use crate::plan::strengths::{select_strength, Strength};
use crate::plan::summary::{build_summary, Summary};
use crate::region::Region;

/// Everything the renderer needs for one plan.
#[derive(Debug, Clone, Serialize)]
pub struct ContentBundle {
    pub blocking_points: Vec<BlockingPoint>,
    pub strengths: Vec<Strength>,
    pub summary: Summary,
    pub success_probability: SuccessProbability,
}

pub struct PlanEngine {
    rules: RuleConfig,
    mode: ProbabilityMode,
    legacy_keys: bool,
    optimized: Arc<dyn OptimizedScoreSource>,
}

impl Default for PlanEngine {
    fn default() -> Self {
        Self::new(
            RuleConfig::default(),
            ProbabilityMode::default(),
            Arc::new(ThreadRngScore),
        )
    }
}

impl PlanEngine {
    pub fn new(
        rules: RuleConfig,
        mode: ProbabilityMode,
        optimized: Arc<dyn OptimizedScoreSource>,
    ) -> Self {
        Self {
            rules,
            mode,
            legacy_keys: true,
            optimized,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        // A pinned score beats a seed; with neither, draw fresh randomness.
        let optimized: Arc<dyn OptimizedScoreSource> =
            match (config.optimized_score, config.probability_seed) {
                (Some(score), _) => Arc::new(FixedScore::new(score)),
                (None, Some(seed)) => Arc::new(SeededScore::new(seed)),
                (None, None) => Arc::new(ThreadRngScore),
            };

        let engine = Self {
            rules: RuleConfig {
                targeting: config.targeting_rule,
                tailor_no_ats_format_issue: config.tailor_no_ats_format_issue,
            },
            mode: config.probability_mode,
            legacy_keys: config.legacy_key_normalization,
            optimized,
        };

        info!(
            targeting = ?engine.rules.targeting,
            mode = ?engine.mode,
            score_source = engine.optimized.backend(),
            legacy_keys = engine.legacy_keys,
            "plan engine configured"
        );
        engine
    }

    /// Canonicalizes raw answers. `legacy` overrides the configured key pre-pass.
    pub fn normalize(&self, raw: &Map<String, Value>, legacy: Option<bool>) -> AnswerRecord {
        let record = if legacy.unwrap_or(self.legacy_keys) {
            normalize_legacy(raw)
        } else {
            normalize(raw)
        };
        if record.is_empty() && !raw.is_empty() {
            debug!(keys = raw.len(), "no answer keys recognised");
        }
        record
    }

    pub fn derive(&self, record: &AnswerRecord, region: &Region) -> ContentBundle {
        self.derive_with_override(record, region, None)
    }

    pub fn derive_with_override(
        &self,
        record: &AnswerRecord,
        region: &Region,
        override_pair: Option<ProbabilityOverride>,
    ) -> ContentBundle {
        let answers = QuizAnswers::from_record(record);

        let blocking_points = select_blocking_points(&answers, &self.rules);
        let strength = select_strength(&answers);
        let summary = build_summary(&answers, region);
        let success_probability =
            compute_probability(self.mode, &answers, self.optimized.as_ref(), override_pair);

        debug!(
            region = region.code(),
            blocking = blocking_points.len(),
            strength = %strength.title,
            current = success_probability.current,
            optimized = success_probability.optimized,
            "content derived"
        );

        ContentBundle {
            blocking_points,
            strengths: vec![strength],
            summary,
            success_probability,
        }
    }

    /// Mid-quiz analysis. Always scores additively, with the analysis
    /// targeting thresholds baked into its own cascade.
    pub fn analyze(&self, record: &AnswerRecord) -> QuickAnalysis {
        let answers = QuizAnswers::from_record(record);
        let probability = compute_probability(
            ProbabilityMode::Additive,
            &answers,
            self.optimized.as_ref(),
            None,
        );
        let analysis = quick_analysis(&answers, probability);

        debug!(
            strength = analysis.strength.name,
            blocking = analysis.blocking_point.name,
            "quick analysis derived"
        );
        analysis
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn engine() -> PlanEngine {
        PlanEngine::new(
            RuleConfig::default(),
            ProbabilityMode::Additive,
            Arc::new(FixedScore::new(88)),
        )
    }

    fn record(value: Value) -> AnswerRecord {
        normalize(value.as_object().unwrap())
    }

    fn titles(bundle: &ContentBundle) -> Vec<&str> {
        bundle
            .blocking_points
            .iter()
            .map(|p| p.title.as_str())
            .collect()
    }

    #[test]
    fn test_scenario_same_resume_spray_and_pray() {
        let bundle = engine().derive(
            &record(json!({"resume_strategy": "same", "applications": "150+"})),
            &Region::parse(Some("US")),
        );
        assert_eq!(
            titles(&bundle),
            vec!["Resume Black Hole Syndrome", "Networking Opportunity Missed"]
        );
        assert_eq!(bundle.strengths.len(), 1);
        assert_eq!(bundle.strengths[0].title, "Determination & Resilience");
    }

    #[test]
    fn test_scenario_linkedin_beats_ats_strength() {
        let bundle = engine().derive(
            &record(json!({"linkedin": "1000+", "resume_strategy": "tailor_ats"})),
            &Region::neutral(),
        );
        assert_eq!(bundle.strengths[0].title, "Strong LinkedIn Network");
    }

    #[test]
    fn test_scenario_empty_answers_india() {
        let bundle = engine().derive(&AnswerRecord::default(), &Region::parse(Some("IN")));
        assert_eq!(
            titles(&bundle),
            vec!["Hidden Resume Optimization Gaps", "Networking Opportunity Missed"]
        );
        assert_eq!(bundle.summary.get("Salary Target"), Some("Not specified"));
    }

    #[test]
    fn test_scenario_application_targeting() {
        let bundle = engine().derive(
            &record(json!({"interviews": "none", "applications": "30-70"})),
            &Region::neutral(),
        );
        assert!(titles(&bundle).contains(&"Application Targeting Problem"));
    }

    #[test]
    fn test_scenario_override_wins() {
        let pair: ProbabilityOverride =
            serde_json::from_value(json!({"current": 40, "withSystem": 88})).unwrap();
        for answers in [
            json!({}),
            json!({"resume_strategy": "tailor_ats", "linkedin": "1000+", "applying": "network"}),
        ] {
            let bundle =
                engine().derive_with_override(&record(answers), &Region::neutral(), Some(pair));
            assert_eq!(
                bundle.success_probability,
                SuccessProbability {
                    current: 40,
                    optimized: 88
                }
            );
        }
    }

    #[test]
    fn test_aliases_feed_the_engine() {
        let bundle = engine().derive(
            &record(json!({"resume_strategy": "", "resumeStrategy": "same"})),
            &Region::neutral(),
        );
        assert_eq!(bundle.blocking_points[0].title, "Resume Black Hole Syndrome");
    }

    #[test]
    fn test_derive_is_deterministic_with_fixed_source() {
        let e = engine();
        let r = record(json!({"resume_strategy": "minor_tweaks", "interviews": "3-5"}));
        let a = serde_json::to_value(e.derive(&r, &Region::neutral())).unwrap();
        let b = serde_json::to_value(e.derive(&r, &Region::neutral())).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_bundle_shape_properties() {
        let inputs = [
            json!({}),
            json!({"resume_strategy": "same", "linkedin": "not_active", "interviews": "none", "applications": "10-30"}),
            json!({"resume_strategy": "garbage", "linkedin": 42, "interviews": ["x"]}),
        ];
        for input in inputs {
            let bundle = engine().derive(&record(input), &Region::parse(Some("xx")));
            assert!((1..=3).contains(&bundle.blocking_points.len()));
            assert_eq!(bundle.strengths.len(), 1);
            assert!(bundle.success_probability.current <= 80);
            assert!((85..=92).contains(&bundle.success_probability.optimized));
        }
    }

    #[test]
    fn test_fixed_mode_engine() {
        let e = PlanEngine::new(
            RuleConfig::default(),
            ProbabilityMode::FixedDefault,
            Arc::new(ThreadRngScore),
        );
        let bundle = e.derive(&AnswerRecord::default(), &Region::neutral());
        assert_eq!(
            bundle.success_probability,
            SuccessProbability {
                current: 35,
                optimized: 90
            }
        );
    }

    #[test]
    fn test_analyze_scores_additively_even_in_fixed_mode() {
        let e = PlanEngine::new(
            RuleConfig::default(),
            ProbabilityMode::FixedDefault,
            Arc::new(FixedScore::new(86)),
        );
        let analysis = e.analyze(&record(json!({"resume_strategy": "tailor_ats"})));
        assert_eq!(analysis.success_probability.current, 40);
        assert_eq!(analysis.success_probability.optimized, 86);
        assert_eq!(analysis.strength.name, "Attention to Detail");
    }

    #[test]
    fn test_normalize_respects_legacy_flag() {
        let e = engine();
        let raw = json!({"q3_resumeStrategy": "same"});
        let raw = raw.as_object().unwrap();
        assert_eq!(
            e.normalize(raw, None).text(crate::answers::aliases::Field::ResumeStrategy),
            Some("same".to_string())
        );
        assert!(e.normalize(raw, Some(false)).is_empty());
    }

    #[test]
    fn test_legacy_normalize_keeps_field_precedence() {
        use crate::answers::aliases::Field;

        let e = engine();
        let raw = json!({"resume_strategy": "same", "resumeStrategy": "tailor_ats"});
        assert_eq!(
            e.normalize(raw.as_object().unwrap(), None)
                .text(Field::ResumeStrategy)
                .as_deref(),
            Some("same")
        );

        let raw = json!({"career_stage": "mid", "careerStage": "senior"});
        assert_eq!(
            e.normalize(raw.as_object().unwrap(), None)
                .text(Field::Experience)
                .as_deref(),
            Some("mid")
        );
    }
}
