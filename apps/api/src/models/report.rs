//! Structured report types: the normalized, fully-populated result objects
//! the UI renders regardless of whether they came from a live or fallback
//! source.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::request::ExperienceLevel;

/// Token accounting as reported by the Gemini capability (or synthesized by
/// the fallback generators so the shape never varies).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TokenUsage {
    #[serde(rename = "promptTokenCount")]
    pub prompt_token_count: u32,
    #[serde(rename = "candidatesTokenCount")]
    pub candidates_token_count: u32,
    #[serde(rename = "totalTokenCount")]
    pub total_token_count: u32,
}

/// Per-category resume scores, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CategoryScores {
    pub technical: u8,
    pub experience: u8,
    pub education: u8,
    pub formatting: u8,
    pub keywords: u8,
    pub achievements: u8,
}

impl CategoryScores {
    pub fn all(&self) -> [u8; 6] {
        [
            self.technical,
            self.experience,
            self.education,
            self.formatting,
            self.keywords,
            self.achievements,
        ]
    }
}

/// Structured career-advice report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceReport {
    pub advice: String,
    pub metadata: AdviceMetadata,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdviceMetadata {
    pub model: String,
    pub token_usage: TokenUsage,
    pub timestamp: DateTime<Utc>,
    /// The user inputs echoed back so the UI can render the report
    /// standalone.
    pub user_input: EchoedAdviceInput,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EchoedAdviceInput {
    pub career_goals: String,
    pub experience_level: ExperienceLevel,
    pub challenges: Option<String>,
}

/// Structured resume-analysis report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeReport {
    pub overall_score: u8,
    pub full_analysis: String,
    pub category_scores: CategoryScores,
    pub metadata: ResumeMetadata,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeMetadata {
    pub model: String,
    pub token_usage: TokenUsage,
    pub timestamp: DateTime<Utc>,
    pub file_name: String,
    pub text_length: usize,
}
