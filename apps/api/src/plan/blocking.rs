//! Blocking-point selection: rule evaluation, title dedup, backfill, cap.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::answers::typed::QuizAnswers;
use crate::plan::content::{backfill_body, blocking_body, Backfill, ProseContext};
use crate::plan::document::Document;
use crate::plan::rules::{evaluate, BlockingKind, RuleConfig};

/// Never more than this many blocking points in a plan.
pub const MAX_BLOCKING_POINTS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockingPoint {
    pub title: String,
    pub kind: BlockingKind,
    pub body: Document,
}

impl BlockingPoint {
    fn from_rule(kind: BlockingKind, ctx: &ProseContext) -> Self {
        BlockingPoint {
            title: kind.title().to_string(),
            kind,
            body: blocking_body(kind, ctx),
        }
    }

    fn backfill(kind: BlockingKind, reason: Backfill) -> Self {
        BlockingPoint {
            title: kind.title().to_string(),
            kind,
            body: backfill_body(kind, reason),
        }
    }
}

/// Selects 1..=3 blocking points with unique titles.
///
/// Algorithm:
/// 1. Evaluate the rule groups (at most one hit per group)
/// 2. Drop repeated titles, first occurrence wins
/// 3. Backfill: none → two generic entries; one → one companion chosen from
///    the first title ("resume" → networking, "linkedin" → resume gaps,
///    anything else → ATS opportunity)
/// 4. Truncate to `MAX_BLOCKING_POINTS`
pub fn select_blocking_points(answers: &QuizAnswers, config: &RuleConfig) -> Vec<BlockingPoint> {
    let ctx = ProseContext::from_answers(answers);

    let fired = evaluate(answers, config);
    debug!(?fired, "blocking-point rules evaluated");

    let mut points = dedup_by_title(
        fired
            .into_iter()
            .map(|kind| BlockingPoint::from_rule(kind, &ctx))
            .collect(),
    );

    match points.len() {
        0 => {
            points.push(BlockingPoint::backfill(
                BlockingKind::ResumeOptimizationGaps,
                Backfill::NoMatches,
            ));
            points.push(BlockingPoint::backfill(
                BlockingKind::NetworkingMissed,
                Backfill::NoMatches,
            ));
        }
        1 => {
            let primary = points[0].title.to_lowercase();
            let companion = if primary.contains("resume") {
                BlockingPoint::backfill(BlockingKind::NetworkingMissed, Backfill::AfterResume)
            } else if primary.contains("linkedin") {
                BlockingPoint::backfill(
                    BlockingKind::ResumeOptimizationGaps,
                    Backfill::AfterLinkedin,
                )
            } else {
                BlockingPoint::backfill(BlockingKind::AtsOptimization, Backfill::AfterOther)
            };
            points.push(companion);
        }
        _ => {}
    }

    let mut points = dedup_by_title(points);
    points.truncate(MAX_BLOCKING_POINTS);
    points
}

fn dedup_by_title(points: Vec<BlockingPoint>) -> Vec<BlockingPoint> {
    let mut seen = HashSet::new();
    points
        .into_iter()
        .filter(|p| seen.insert(p.title.clone()))
        .collect()
}
