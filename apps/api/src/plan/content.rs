// Static prose for blocking points and strengths.
// Bodies interpolate only the applications and LinkedIn phrases; everything
// else is fixed copy.

use crate::answers::typed::{LinkedinPresence, QuizAnswers};
use crate::plan::document::{Document, PitchKind};
use crate::plan::rules::BlockingKind;

/// Phrases lifted from the answers and woven into the prose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProseContext {
    pub applications: String,
    pub linkedin: &'static str,
}

impl ProseContext {
    pub fn from_answers(answers: &QuizAnswers) -> Self {
        let applications = answers
            .applications
            .as_ref()
            .map(|a| a.phrase().to_string())
            .unwrap_or_else(|| "multiple".to_string());

        let linkedin = match answers.linkedin {
            Some(LinkedinPresence::NotActive) => "inactive status",
            Some(LinkedinPresence::Under100) => "under 100 connections",
            _ => "limited engagement",
        };

        ProseContext {
            applications,
            linkedin,
        }
    }
}

/// Why a backfilled entry was added. The same title reads differently
/// depending on what it accompanies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backfill {
    /// Nothing matched; two generic entries stand in.
    NoMatches,
    /// Follows a resume-related finding.
    AfterResume,
    /// Follows a LinkedIn finding.
    AfterLinkedin,
    /// Follows any other finding.
    AfterOther,
}

const FIX_HEADING: &str = "🔧 **What You MUST Do to Fix This:**";
const LEVERAGE_HEADING: &str = "🎯 **How to LEVERAGE This:**";

/// Body for a rule-selected blocking point.
pub fn blocking_body(kind: BlockingKind, ctx: &ProseContext) -> Document {
    let apps = &ctx.applications;
    let doc = match kind {
        BlockingKind::ResumeBlackHole => Document::new()
            .paragraph(&format!("**The Problem:** You're applying to **{apps}** jobs with a generic, one-size-fits-all resume. This \"spray and pray\" approach has a very low success rate."))
            .paragraph("**Why It's Failing YOU:** Many resumes are auto-rejected by Applicant Tracking Systems (ATS). Even when a resume passes the bot, recruiters spend only a few seconds scanning — if your resume doesn't speak directly to the role, it gets skipped.")
            .heading(FIX_HEADING)
            .list(&[
                "**Create an ATS-Optimized Master Resume:** Use simple formatting and exact keywords from job descriptions.",
                "**Switch from Volume to Strategy:** Instead of sending many generic applications, target ~30 strategic roles and customize each resume (it only takes ~15 minutes with the right system).",
                "**Transform Your Resume into a Storytelling Document:** Lead with impact and quantified achievements, not tasks.",
            ]),
        BlockingKind::InconsistentResume => Document::new()
            .paragraph(&format!("**The Problem:** You sometimes customize your resume but not consistently. When you apply to **{apps}** roles inconsistently, results drop."))
            .paragraph("**Why It's Failing YOU:** ATS and hiring managers prefer consistency — inconsistent tailoring reduces your chance to get noticed.")
            .heading(FIX_HEADING)
            .list(&[
                "**Define a 15-minute customization process:** Create a master resume and a keyword-swap checklist to make tailoring fast and repeatable.",
                "**Apply selectively:** Prioritize roles where you meet ~70%+ of requirements and where you can use referrals.",
                "**Track & iterate:** Measure application → reply rate and double down on what works.",
            ]),
        BlockingKind::HiddenResumeFormat => Document::new()
            .paragraph(&format!("**The Problem:** You're customizing but still not getting results. Even applying to **{apps}** jobs won't help if your resume format hides your value."))
            .paragraph("**Why It's Failing YOU:** Visual formatting (tables, graphics, columns) or missing keywords can make a resume unreadable for ATS or confusing for recruiters.")
            .heading(FIX_HEADING)
            .list(&[
                "**Run an ATS check:** Test your resume against target job descriptions and fix compatibility issues.",
                "**Rewrite bullets with impact:** Use the STAR approach and measurable results for each role.",
            ]),
        BlockingKind::LinkedinInvisibility => Document::new()
            .paragraph(&format!("**The Problem:** Your LinkedIn profile shows **{}** and limited networking — this keeps you hidden from recruiters.", ctx.linkedin))
            .paragraph("**Why This Hurts:** Over 70% of jobs are found through recruiters or referrals on LinkedIn. Without a visible and active profile, you're missing opportunities daily.")
            .heading(FIX_HEADING)
            .list(&[
                "**Optimize Your Profile:** Use a professional photo, add a compelling headline, and write a results-driven “About” section.",
                "**Grow Strategically:** Add 20–30 new relevant professionals weekly until you reach 500+ connections.",
                "**Engage Weekly:** Comment, post insights, and interact with industry discussions to stay visible.",
            ]),
        BlockingKind::ApplicationTargeting => Document::new()
            .paragraph(&format!("**The Problem:** You've applied to **{apps}** jobs but received few/no interviews — this points to a systematic problem rather than bad luck."))
            .paragraph("**Why Nothing Is Working:** Common causes include ATS failure, poor targeting, or not leveraging networking and referrals.")
            .heading(FIX_HEADING)
            .list(&[
                "**Pause bulk applications:** Diagnose by testing a small batch of highly targeted applications.",
                "**Get an expert review:** Check ATS compatibility and message/keyword alignment.",
                "**Activate networking:** Target referrals and informational chats instead of posting blind applications.",
            ]),
        BlockingKind::InterviewConversion => Document::new()
            .paragraph(&format!("**The Problem:** You're getting interviews around your applications to **{apps}** roles but not converting them into offers."))
            .paragraph("**Why Interviews Aren't Converting:** Often due to weak storytelling, lack of structured STAR answers, or not asking strategic questions.")
            .heading(FIX_HEADING)
            .list(&[
                "**Master a 2-minute pitch:** Clear, compelling connection between your experience and the role.",
                "**Prepare STAR stories:** Have measurable examples for core competencies.",
                "**Mock interviews:** Practice with feedback.",
            ]),
        BlockingKind::ResumeOptimizationGaps
        | BlockingKind::NetworkingMissed
        | BlockingKind::AtsOptimization => return backfill_body(kind, Backfill::NoMatches),
    };

    doc.pitch(kind.pitch())
}

/// Body for a backfilled blocking point.
pub fn backfill_body(kind: BlockingKind, reason: Backfill) -> Document {
    let (insight, action) = match (kind, reason) {
        (BlockingKind::ResumeOptimizationGaps, Backfill::AfterLinkedin) => (
            "LinkedIn visibility helps — but without an ATS-optimized resume, many opportunities are still missed.",
            "Use a resume scan to identify missing keywords and fix your format for higher compatibility.",
        ),
        (BlockingKind::ResumeOptimizationGaps, _) => (
            "Even strong resumes often fail due to missing keywords, weak formatting, or vague achievements.",
            "Run an ATS compatibility check and rewrite key bullet points with measurable results. Small changes can boost responses by 50%.",
        ),
        (BlockingKind::NetworkingMissed, Backfill::AfterResume) => (
            "Even with a strong resume, lack of network visibility slows results.",
            "Engage actively on LinkedIn, post once a week, and connect with 5 recruiters in your target field.",
        ),
        (BlockingKind::NetworkingMissed, _) => (
            "Over 70% of job offers come through referrals or LinkedIn connections — not job portals.",
            "Identify 10 professionals in your field and start short, informational chats to build referral opportunities.",
        ),
        (BlockingKind::AtsOptimization, _) => (
            "Your approach is solid, but your resume may not be fully optimized for automated systems.",
            "Test your resume through an ATS checker to raise visibility by 2x.",
        ),
        _ => (
            "Small, consistent fixes to your job-search system compound quickly.",
            "Pick one area from this plan and act on it this week.",
        ),
    };

    Document::new()
        .paragraph(&format!("**The Insight:** {insight}"))
        .paragraph(&format!("**What to Do:** {action}"))
        .pitch(match kind {
            BlockingKind::ResumeOptimizationGaps
            | BlockingKind::NetworkingMissed
            | BlockingKind::AtsOptimization => kind.pitch(),
            _ => PitchKind::Default,
        })
}

pub fn linkedin_strength_body() -> Document {
    Document::new()
        .paragraph("**What You Have:** You have 500+ LinkedIn connections—that's fantastic! You're in the top 30% of professionals and have access to the hidden job market where 80% of jobs are found.")
        .heading("**How to WEAPONIZE This Strength:**")
        .list(&[
            "**Activate Dormant Connections:** Most of your network is dormant. Re-engage with your top 50 connections with personalized messages to bring your profile to the top of their feed.",
            "**Mine Your Network for Target Companies:** Someone in your network knows someone at your target company. Use LinkedIn's search features to find 2nd-degree connections and ask for warm introductions.",
            "**Get Referrals, Not Just Connections:** Use our proven referral request framework to turn your connections into internal advocates.",
        ])
}

pub fn ats_strength_body() -> Document {
    Document::new()
        .paragraph("**What You Have:** You customize your resume and understand ATS. This shows you have a strategic mindset and an attention to detail that puts you ahead of 80% of other candidates.")
        .heading(LEVERAGE_HEADING)
        .list(&[
            "**Now Focus on Human Appeal:** You're passing the robots—it's time to impress the humans. Learn what recruiters actually look at in the 6-8 seconds they scan your resume and optimize for their psychology.",
            "**Add Networking to Your ATS Mastery:** An ATS-passing resume combined with an internal referral is an almost unstoppable combination. This is how you turn a good strategy into an offer-winning one.",
        ])
}

pub fn resilience_strength_body() -> Document {
    Document::new()
        .paragraph("**What You Have:** You completed this entire assessment, which shows grit and determination. Despite any frustration, you're still trying and still focused on your goal—this is the #1 predictor of success.")
        .heading(LEVERAGE_HEADING)
        .list(&[
            "**Channel That Energy into Strategy:** Your persistence will pay off once it's paired with a proven system. Shift from a volume-based approach to a strategic one.",
            "**Track What's Working:** Use your determination to meticulously track your applications and double down on what gets results. Use rejection as feedback, not failure.",
        ])
}
