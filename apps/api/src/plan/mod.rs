// Content derivation: typed answers + region → placement plan.
// Rule table and backfill produce blocking points; strength, summary and
// success probability are derived independently from the same answers.

pub mod blocking;
pub mod content;
pub mod document;
pub mod engine;
pub mod handlers;
pub mod insight;
pub mod probability;
pub mod rules;
pub mod schedule;
pub mod strengths;
pub mod summary;
