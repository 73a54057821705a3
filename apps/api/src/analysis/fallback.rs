//! Deterministic fallback analysis, used whenever the live Gemini call is
//! unconfigured, fails, or answers with nothing usable.
//!
//! The synthesized text carries the same section headers as genuine model
//! output, so the interpreter and the UI never special-case fallback
//! reports. Scores derive from simple keyword presence checks plus seeded
//! jitter, making the whole generator a pure function of its input.

use chrono::Utc;
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;

use crate::models::report::{CategoryScores, ResumeMetadata, ResumeReport, TokenUsage};

use super::seeded_rng;

/// Model identifier distinguishing fallback reports from live ones.
pub const FALLBACK_MODEL: &str = "backup-analysis-system";

static EDUCATION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)education|degree|university|college|school").unwrap());
static EXPERIENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)experience|work|job|position|role").unwrap());
static SKILLS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)skills|proficient|experienced|knowledge").unwrap());
static CONTACT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)email|phone|linkedin|contact").unwrap());

struct ContentSignals {
    word_count: usize,
    has_education: bool,
    has_experience: bool,
    has_skills: bool,
    has_contact: bool,
}

fn detect_signals(text: &str) -> ContentSignals {
    ContentSignals {
        word_count: text.split_whitespace().count(),
        has_education: EDUCATION_RE.is_match(text),
        has_experience: EXPERIENCE_RE.is_match(text),
        has_skills: SKILLS_RE.is_match(text),
        has_contact: CONTACT_RE.is_match(text),
    }
}

/// Base score: 60 plus a bonus per expected resume section found, capped at
/// 95 so fallback output never claims a perfect resume.
fn base_score(signals: &ContentSignals) -> u8 {
    let mut score: i32 = 60;
    if signals.has_education {
        score += 8;
    }
    if signals.has_experience {
        score += 12;
    }
    if signals.has_skills {
        score += 10;
    }
    if signals.has_contact {
        score += 5;
    }
    if signals.word_count > 200 {
        score += 5;
    }
    score.min(95) as u8
}

fn category_scores(overall: u8, signals: &ContentSignals, text: &str) -> CategoryScores {
    let overall = overall as i32;
    let mut rng = seeded_rng(text);
    let clipped = |floor: i32, value: i32| -> u8 { value.max(floor).min(95) as u8 };

    let technical = clipped(50, overall - 15 + rng.gen_range(0..20));
    let experience = clipped(50, overall - 10 + rng.gen_range(0..15));
    let education = if signals.has_education {
        clipped(60, overall - 5)
    } else {
        clipped(40, overall - 25)
    };
    let formatting = clipped(55, overall - 8 + rng.gen_range(0..16));
    let keywords = clipped(50, overall - 12 + rng.gen_range(0..18));
    let achievements = clipped(45, overall - 20 + rng.gen_range(0..25));

    CategoryScores {
        technical,
        experience,
        education,
        formatting,
        keywords,
        achievements,
    }
}

pub fn generate_resume_fallback(resume_text: &str, file_name: &str) -> ResumeReport {
    let signals = detect_signals(resume_text);
    let overall_score = base_score(&signals);
    let category_scores = category_scores(overall_score, &signals, resume_text);
    let full_analysis = render_analysis(overall_score, &category_scores, &signals);

    ResumeReport {
        overall_score,
        full_analysis,
        category_scores,
        metadata: ResumeMetadata {
            model: FALLBACK_MODEL.to_string(),
            token_usage: TokenUsage {
                prompt_token_count: 500,
                candidates_token_count: 800,
                total_token_count: 1300,
            },
            timestamp: Utc::now(),
            file_name: file_name.to_string(),
            text_length: resume_text.len(),
        },
    }
}

fn render_analysis(overall: u8, scores: &CategoryScores, signals: &ContentSignals) -> String {
    let verdict = if overall >= 80 {
        "strong potential"
    } else if overall >= 65 {
        "good foundation"
    } else {
        "areas for improvement"
    };

    let mut strengths = String::new();
    if signals.has_contact {
        strengths.push_str("- Contact information is clearly visible and accessible\n");
    }
    if signals.has_experience {
        strengths.push_str("- Work experience demonstrates career progression and responsibility\n");
    }
    if signals.has_skills {
        strengths.push_str("- Skills section shows relevant technical and professional capabilities\n");
    }
    if signals.has_education {
        strengths.push_str("- Educational background supports your career objectives\n");
    }
    strengths.push_str("- Resume length is appropriate for your experience level\n");
    strengths.push_str("- Content appears well-organized and structured");

    let experience_note = if signals.has_experience {
        "Your work experience section provides good context for your career progression."
    } else {
        "Consider adding more detailed work experience."
    };
    let education_note = if signals.has_education {
        "Your educational background is clearly presented."
    } else {
        "Educational qualifications could be better highlighted."
    };

    format!(
        "**OVERALL ASSESSMENT**\n\
Your resume shows {verdict} with an overall score of {overall}/100. {experience_note} {education_note}\n\
\n\
**STRENGTHS**\n\
{strengths}\n\
\n\
**AREAS FOR IMPROVEMENT**\n\
- Add more quantified achievements with specific metrics and results\n\
- Include more industry-specific keywords for better ATS compatibility\n\
- Enhance the professional summary or objective statement\n\
- Consider adding relevant certifications or professional development\n\
- Improve formatting consistency throughout the document\n\
- Add more action verbs to describe your accomplishments\n\
\n\
**DETAILED RECOMMENDATIONS**\n\
- Quantify your achievements: Replace generic statements with specific numbers, percentages, or dollar amounts\n\
- Optimize for ATS: Include relevant keywords from job descriptions in your industry\n\
- Strengthen your professional summary: Create a compelling 2-3 line summary that highlights your value proposition\n\
- Use consistent formatting: Ensure dates, bullet points, and spacing are uniform throughout\n\
- Add relevant sections: Consider including certifications, projects, or volunteer work if applicable\n\
- Tailor for each application: Customize your resume for specific roles and companies\n\
- Proofread carefully: Eliminate any typos or grammatical errors\n\
- Use strong action verbs: Start bullet points with impactful verbs like \"achieved,\" \"implemented,\" \"led\"\n\
\n\
**ATS OPTIMIZATION**\n\
Your resume would benefit from better ATS optimization. Include more industry-specific keywords, use standard section headings (Experience, Education, Skills), and ensure your formatting is ATS-friendly with clear section breaks and consistent styling. Avoid complex formatting, graphics, or unusual fonts that might confuse parsing systems.\n\
\n\
**CATEGORY SCORES**\n\
- Technical Skills: {technical}\n\
- Work Experience: {experience}\n\
- Education & Certifications: {education}\n\
- Formatting & Structure: {formatting}\n\
- Keywords & ATS Optimization: {keywords}\n\
- Achievements & Impact: {achievements}\n\
\n\
**INDUSTRY-SPECIFIC ADVICE**\n\
Based on your resume content, focus on highlighting transferable skills and relevant experience. Consider obtaining industry-specific certifications that are valued in your target field. Research common requirements for your desired roles and ensure your resume addresses those qualifications.\n\
\n\
**NEXT STEPS**\n\
1. Immediately: Fix any formatting inconsistencies and proofread for errors\n\
2. This week: Add quantified achievements to at least 3 bullet points\n\
3. Next week: Research and incorporate 5-7 relevant industry keywords\n\
4. Within 2 weeks: Enhance your professional summary with a compelling value proposition\n\
5. Ongoing: Tailor your resume for each specific job application\n\
\n\
This analysis was generated using our backup system. For the most comprehensive AI-powered analysis, please try again later when our advanced AI service is available.",
        technical = scores.technical,
        experience = scores.experience,
        education = scores.education,
        formatting = scores.formatting,
        keywords = scores.keywords,
        achievements = scores.achievements,
    )
}
