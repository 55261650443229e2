//! Career data model — the wire-exact shapes the gateway parses Gemini
//! responses into. Wire field names are camelCase; every field is required.

use serde::{Deserialize, Serialize};

/// A single recommended career path.
///
/// Identity key is `title`, compared case-sensitively — two titles that
/// differ only in casing or whitespace are distinct careers. Immutable once
/// received from the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerPath {
    pub title: String,
    pub description: String,
    pub relevance: String,
}

/// The full career guide fetched for one selected career path.
///
/// Exists only while that career's detail view is active; cleared on back
/// navigation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerDetails {
    pub title: String,
    pub summary: String,
    pub key_responsibilities: Vec<String>,
    pub required_skills: RequiredSkills,
    pub learning_path: Vec<LearningPathStep>,
    pub interview_questions: InterviewQuestions,
    pub career_outlook: String,
}

/// Skills for a career, split into technical and soft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequiredSkills {
    pub technical: Vec<String>,
    pub soft: Vec<String>,
}

/// One ordered step in a career guide's learning path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningPathStep {
    pub step: String,
    pub description: String,
}

/// Sample interview questions, split into behavioral and technical.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterviewQuestions {
    pub behavioral: Vec<String>,
    pub technical: Vec<String>,
}
