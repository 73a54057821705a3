// Prompt constants for the resume-analysis feature.

/// Resume review prompt template. Replace `{resume_text}` before sending.
///
/// The section headers here are load-bearing: the interpreter extracts
/// scores by matching the labelled phrases, and the fallback generator emits
/// the same headers so its output parses identically.
pub const RESUME_ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are an expert resume reviewer and career consultant with extensive experience in hiring, recruitment, and career development across multiple industries. Analyze the following resume comprehensively and provide a detailed, actionable report.

RESUME CONTENT:
{resume_text}

Please provide a structured analysis in the following format:

**OVERALL ASSESSMENT**
- Provide an overall score from 0-100
- Give a brief summary of the resume's current state
- Identify the candidate's career level and target roles

**STRENGTHS** (List 4-6 specific strengths)
- Highlight what works well in the resume
- Mention strong sections, good formatting, relevant experience, etc.
- Focus on elements that would appeal to employers

**AREAS FOR IMPROVEMENT** (List 4-6 specific areas)
- Identify skill gaps and missing elements
- Point out formatting or content issues
- Suggest missing sections or information
- Highlight outdated or weak content

**DETAILED RECOMMENDATIONS** (Provide 6-8 actionable recommendations)
- Give specific, actionable advice for improvement
- Include suggestions for content, formatting, and optimization
- Recommend specific skills or certifications to add
- Suggest ways to quantify achievements better

**ATS OPTIMIZATION**
- Assess how well the resume would perform with Applicant Tracking Systems
- Suggest keyword improvements
- Recommend formatting changes for better ATS compatibility

**CATEGORY SCORES** (Rate each category 0-100)
- Technical Skills: [score]
- Work Experience: [score]
- Education & Certifications: [score]
- Formatting & Structure: [score]
- Keywords & ATS Optimization: [score]
- Achievements & Impact: [score]

**INDUSTRY-SPECIFIC ADVICE**
- Provide advice tailored to the candidate's apparent industry/field
- Suggest industry-specific improvements
- Recommend relevant certifications or skills for their field

**NEXT STEPS**
- Provide immediate actionable steps the candidate can take
- Suggest a priority order for improvements
- Recommend timeline for implementing changes

Please be specific, constructive, and actionable in your feedback. Focus on helping the candidate improve their chances of getting interviews and job offers."#;

pub fn resume_analysis_prompt(resume_text: &str) -> String {
    RESUME_ANALYSIS_PROMPT_TEMPLATE.replace("{resume_text}", resume_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_embeds_resume_text() {
        let prompt = resume_analysis_prompt("RESUME BODY GOES HERE");
        assert!(prompt.contains("RESUME BODY GOES HERE"));
        assert!(!prompt.contains("{resume_text}"));
    }
}
