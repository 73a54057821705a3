// Prompt constants for the career-advice feature.

/// Career-coach prompt template. Replace `{career_goals}`,
/// `{experience_level}` and `{challenges}` before sending.
pub const CAREER_ADVICE_PROMPT_TEMPLATE: &str = r#"You are a professional career coach AI with expertise in career development, job market trends, and professional growth strategies. Analyze the following user's career information and provide comprehensive, actionable advice.

User Information:
- Career Goals: {career_goals}
- Experience Level: {experience_level}
- Challenges: {challenges}

Please provide a detailed response that includes:

1. **Assessment**: A brief analysis of their current situation and goals
2. **Specific Recommendations**: At least 4-5 concrete, actionable steps they can take
3. **Skill Development**: Specific skills they should focus on developing
4. **Timeline**: Suggested timeframe for achieving their goals
5. **Resources**: Specific resources, certifications, or learning paths they should consider
6. **Market Insights**: Relevant industry trends and opportunities
7. **Next Steps**: Immediate actions they can take this week

Keep the tone professional yet encouraging, and make sure all advice is practical and achievable. Focus on their specific experience level and tailor recommendations accordingly."#;

pub fn career_advice_prompt(
    career_goals: &str,
    experience_level: &str,
    challenges: Option<&str>,
) -> String {
    CAREER_ADVICE_PROMPT_TEMPLATE
        .replace("{career_goals}", career_goals)
        .replace("{experience_level}", experience_level)
        .replace("{challenges}", challenges.unwrap_or("Not specified"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_all_fields() {
        let prompt =
            career_advice_prompt("Lead a platform team", "senior", Some("limited visibility"));
        assert!(prompt.contains("Lead a platform team"));
        assert!(prompt.contains("senior"));
        assert!(prompt.contains("limited visibility"));
    }

    #[test]
    fn test_absent_challenges_rendered_as_not_specified() {
        let prompt = career_advice_prompt("Ship more", "entry-level", None);
        assert!(prompt.contains("Challenges: Not specified"));
    }
}
