//! Deterministic fallback coach, substituted whenever the live Gemini call
//! is unconfigured or fails. Mirrors the seven numbered sections the live
//! prompt requests, tailored by experience level, so the UI renders both
//! sources identically.

use chrono::Utc;

use crate::models::report::{AdviceMetadata, AdviceReport, EchoedAdviceInput, TokenUsage};
use crate::models::request::ExperienceLevel;

/// Model identifier distinguishing fallback advice from live advice.
pub const FALLBACK_MODEL: &str = "backup-advice-system";

pub fn generate_advice_fallback(
    goals: &str,
    experience_level: ExperienceLevel,
    challenges: Option<&str>,
) -> AdviceReport {
    AdviceReport {
        advice: render_advice(goals, experience_level, challenges),
        metadata: AdviceMetadata {
            model: FALLBACK_MODEL.to_string(),
            token_usage: TokenUsage {
                prompt_token_count: 400,
                candidates_token_count: 700,
                total_token_count: 1100,
            },
            timestamp: Utc::now(),
            user_input: EchoedAdviceInput {
                career_goals: goals.to_string(),
                experience_level,
                challenges: challenges.map(|c| c.to_string()),
            },
        },
    }
}

fn render_advice(
    goals: &str,
    experience_level: ExperienceLevel,
    challenges: Option<&str>,
) -> String {
    let (assessment, skills, timeline) = match experience_level {
        ExperienceLevel::EntryLevel => (
            "As an entry-level professional, your priority is building a foundation of demonstrable skills and a track record of finished work. Your stated goals are ambitious but reachable with consistent, focused effort.",
            "Focus on core technical or domain fundamentals, written communication, and one portfolio-ready project per quarter. Depth in one area beats breadth across five.",
            "Expect meaningful progress toward your goals within 12-18 months, with your first milestone (a completed project or certification) inside the first 90 days.",
        ),
        ExperienceLevel::MidCareer => (
            "At mid-career, the leverage shifts from acquiring skills to demonstrating impact and expanding your professional visibility. Your goals suggest it is time to convert experience into recognized expertise.",
            "Develop mentoring and cross-team influence, deepen one technical or domain specialty to an advocate level, and practice presenting your work to non-specialist audiences.",
            "A 9-15 month horizon is realistic for a significant role change, with quarterly checkpoints against the recommendations below.",
        ),
        ExperienceLevel::Senior => (
            "As a senior professional, progress toward your goals depends less on individual output and more on strategic positioning: the problems you choose, the people you develop, and the narrative your track record tells.",
            "Sharpen executive communication, organizational design, and strategic prioritization. Codify your expertise publicly through talks, writing, or open contributions.",
            "Senior transitions typically take 6-12 months of deliberate positioning; begin the conversations that matter this month rather than waiting for a complete story.",
        ),
    };

    let challenge_note = match challenges {
        Some(c) => format!(
            "You named a specific challenge: \"{c}\". Treat it as a scoping constraint rather than a blocker, and pick the recommendations below that route around it first."
        ),
        None => "You did not name specific challenges, so the plan below assumes time and access are your main constraints.".to_string(),
    };

    format!(
        "1. **Assessment**\n\
Your goal \"{goals}\" is specific enough to plan against. {assessment} {challenge_note}\n\
\n\
2. **Specific Recommendations**\n\
- Write a one-page plan translating your goal into three measurable outcomes for the next two quarters\n\
- Identify two people already doing the job you want and study how they got there\n\
- Schedule a monthly review of progress against the outcomes, and adjust rather than abandon\n\
- Build one visible artifact (project, document, talk) that demonstrates your target capability\n\
- Tell your manager or a mentor about the goal, since stated goals get follow-up\n\
\n\
3. **Skill Development**\n\
{skills}\n\
\n\
4. **Timeline**\n\
{timeline}\n\
\n\
5. **Resources**\n\
Prefer structured, completable resources: one recognized certification or course in your target area, one book by a practitioner, and the documentation or standards your target role treats as canonical.\n\
\n\
6. **Market Insights**\n\
Hiring across most fields currently rewards demonstrated outcomes over credentials alone. Roles increasingly blend domain knowledge with data and automation literacy; position your experience at that intersection where you can.\n\
\n\
7. **Next Steps**\n\
This week: write the one-page plan, pick the first visible artifact, and book the first monthly review in your calendar.\n\
\n\
This advice was generated by our backup guidance system. For fully personalized AI coaching, please try again later when our advanced AI service is available.",
    )
}
