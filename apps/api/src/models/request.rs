//! Request builder: raw user-supplied fields in, validated request values out.
//!
//! Validation happens here and only here — an invalid request must never
//! reach the AI invoker. No network, no side effects.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Minimum extracted-resume length. Anything shorter signals a failed
/// upstream text extraction, not a short resume.
pub const MIN_RESUME_TEXT_LEN: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExperienceLevel {
    EntryLevel,
    MidCareer,
    Senior,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::EntryLevel => "entry-level",
            ExperienceLevel::MidCareer => "mid-career",
            ExperienceLevel::Senior => "senior",
        }
    }
}

/// A validated analysis request, one variant per AI-backed analysis feature.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum AnalysisRequest {
    CareerGoals {
        goals: String,
        experience_level: ExperienceLevel,
        challenges: Option<String>,
    },
    Resume {
        text: String,
        file_name: String,
    },
}

/// Raw career-goals fields as posted by the UI.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerGoalsInput {
    #[serde(default)]
    pub career_goals: String,
    pub experience_level: Option<ExperienceLevel>,
    #[serde(default)]
    pub challenges: String,
}

/// Raw resume-analysis fields as posted by the UI.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeInput {
    #[serde(default)]
    pub resume_text: String,
    pub file_name: Option<String>,
}

/// Raw interview-provisioning fields as posted by the UI.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewInput {
    #[serde(default)]
    pub job_role: String,
    pub candidate_name: Option<String>,
    pub custom_context: Option<String>,
}

/// A validated conversation-provisioning request.
#[derive(Debug, Clone)]
pub struct ConversationRequest {
    pub role: String,
    pub candidate_name: String,
    pub custom_context: Option<String>,
}

pub fn build_career_goals_request(input: CareerGoalsInput) -> Result<AnalysisRequest, AppError> {
    let goals = input.career_goals.trim();
    if goals.is_empty() {
        return Err(AppError::validation(
            "careerGoals",
            "careerGoals is required and cannot be empty",
        ));
    }
    let experience_level = input.experience_level.ok_or_else(|| {
        AppError::validation("experienceLevel", "experienceLevel is required")
    })?;
    let challenges = match input.challenges.trim() {
        "" => None,
        c => Some(c.to_string()),
    };

    Ok(AnalysisRequest::CareerGoals {
        goals: goals.to_string(),
        experience_level,
        challenges,
    })
}

pub fn build_resume_request(input: ResumeInput) -> Result<AnalysisRequest, AppError> {
    let text = input.resume_text.trim();
    if text.is_empty() {
        return Err(AppError::validation(
            "resumeText",
            "resumeText is required and cannot be empty",
        ));
    }
    // Count characters, not bytes, so multibyte text is measured fairly.
    if text.chars().count() < MIN_RESUME_TEXT_LEN {
        return Err(AppError::UnprocessableEntity(
            "Resume text too short: the extracted text appears to be incomplete. \
             Please ensure your resume contains readable text."
                .to_string(),
        ));
    }

    Ok(AnalysisRequest::Resume {
        text: text.to_string(),
        file_name: input.file_name.unwrap_or_else(|| "resume.pdf".to_string()),
    })
}

pub fn build_conversation_request(input: InterviewInput) -> Result<ConversationRequest, AppError> {
    let role = input.job_role.trim();
    if role.is_empty() {
        return Err(AppError::validation(
            "jobRole",
            "jobRole is required and cannot be empty",
        ));
    }
    let candidate_name = input
        .candidate_name
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "Candidate".to_string());

    Ok(ConversationRequest {
        role: role.to_string(),
        candidate_name,
        custom_context: input.custom_context.filter(|c| !c.trim().is_empty()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_career_goals_requires_goals() {
        let input = CareerGoalsInput {
            career_goals: "   ".to_string(),
            experience_level: Some(ExperienceLevel::Senior),
            challenges: String::new(),
        };
        assert!(matches!(
            build_career_goals_request(input),
            Err(AppError::Validation { .. })
        ));
    }

    #[test]
    fn test_career_goals_requires_experience_level() {
        let input = CareerGoalsInput {
            career_goals: "Become a staff engineer".to_string(),
            experience_level: None,
            challenges: String::new(),
        };
        assert!(matches!(
            build_career_goals_request(input),
            Err(AppError::Validation { .. })
        ));
    }

    #[test]
    fn test_career_goals_blank_challenges_become_none() {
        let input = CareerGoalsInput {
            career_goals: "Become a staff engineer".to_string(),
            experience_level: Some(ExperienceLevel::MidCareer),
            challenges: "  ".to_string(),
        };
        match build_career_goals_request(input).unwrap() {
            AnalysisRequest::CareerGoals { challenges, .. } => assert!(challenges.is_none()),
            other => panic!("Unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_resume_empty_text_rejected() {
        let input = ResumeInput {
            resume_text: String::new(),
            file_name: None,
        };
        assert!(matches!(
            build_resume_request(input),
            Err(AppError::Validation { .. })
        ));
    }

    #[test]
    fn test_resume_short_text_rejected_as_failed_extraction() {
        let input = ResumeInput {
            resume_text: "John Doe, engineer".to_string(),
            file_name: Some("cv.pdf".to_string()),
        };
        assert!(matches!(
            build_resume_request(input),
            Err(AppError::UnprocessableEntity(_))
        ));
    }

    #[test]
    fn test_resume_length_checked_after_trim() {
        // 49 meaningful chars padded with whitespace must still fail
        let padded = format!("  {}  ", "x".repeat(MIN_RESUME_TEXT_LEN - 1));
        let input = ResumeInput {
            resume_text: padded,
            file_name: None,
        };
        assert!(build_resume_request(input).is_err());
    }

    #[test]
    fn test_resume_length_counts_chars_not_bytes() {
        // 30 two-byte chars is 60 bytes but only 30 chars and must fail
        let input = ResumeInput {
            resume_text: "é".repeat(30),
            file_name: None,
        };
        assert!(matches!(
            build_resume_request(input),
            Err(AppError::UnprocessableEntity(_))
        ));

        let input = ResumeInput {
            resume_text: "é".repeat(MIN_RESUME_TEXT_LEN),
            file_name: None,
        };
        assert!(build_resume_request(input).is_ok());
    }

    #[test]
    fn test_resume_valid_text_trimmed_and_defaulted() {
        let input = ResumeInput {
            resume_text: format!("  {}  ", "x".repeat(60)),
            file_name: None,
        };
        match build_resume_request(input).unwrap() {
            AnalysisRequest::Resume { text, file_name } => {
                assert_eq!(text.len(), 60);
                assert_eq!(file_name, "resume.pdf");
            }
            other => panic!("Unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn test_conversation_requires_role() {
        let input = InterviewInput {
            job_role: String::new(),
            candidate_name: Some("Ada".to_string()),
            custom_context: None,
        };
        assert!(build_conversation_request(input).is_err());
    }

    #[test]
    fn test_conversation_candidate_name_defaults() {
        let input = InterviewInput {
            job_role: "Software Engineer".to_string(),
            candidate_name: Some("   ".to_string()),
            custom_context: None,
        };
        let request = build_conversation_request(input).unwrap();
        assert_eq!(request.candidate_name, "Candidate");
    }

    #[test]
    fn test_experience_level_kebab_case_wire_format() {
        let level: ExperienceLevel = serde_json::from_str("\"entry-level\"").unwrap();
        assert_eq!(level, ExperienceLevel::EntryLevel);
        assert_eq!(level.as_str(), "entry-level");
    }
}
