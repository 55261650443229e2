//! Response schemas sent alongside every gateway prompt.
//!
//! Gemini's structured-output mode takes an OpenAPI-style schema in
//! `generationConfig.responseSchema` and constrains the response text to it.
//! Type tags are uppercase on the wire. Every field is required except
//! `resources` in the learning path — the single optional field.

use serde_json::{json, Value};

/// Schema for fetch_recommendations: an array of career path objects.
pub fn career_path_list() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "title": {
                    "type": "STRING",
                    "description": "The job title or career path."
                },
                "description": {
                    "type": "STRING",
                    "description": "A brief, one-paragraph summary of this career path."
                },
                "relevance": {
                    "type": "STRING",
                    "description": "A short explanation of why this career fits the provided skills."
                }
            },
            "required": ["title", "description", "relevance"]
        }
    })
}

/// Schema for fetch_career_details: the full guide for one career.
pub fn career_details() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": {
                "type": "STRING",
                "description": "The job title."
            },
            "summary": {
                "type": "STRING",
                "description": "A detailed overview of the career."
            },
            "keyResponsibilities": {
                "type": "ARRAY",
                "items": {"type": "STRING"},
                "description": "A list of primary day-to-day responsibilities."
            },
            "requiredSkills": {
                "type": "OBJECT",
                "properties": {
                    "technical": {"type": "ARRAY", "items": {"type": "STRING"}},
                    "soft": {"type": "ARRAY", "items": {"type": "STRING"}}
                },
                "required": ["technical", "soft"]
            },
            "learningPath": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "step": {
                            "type": "STRING",
                            "description": "A learning step or topic."
                        },
                        "description": {
                            "type": "STRING",
                            "description": "A description of the learning step and suggested resources."
                        }
                    },
                    "required": ["step", "description"]
                }
            },
            "interviewQuestions": {
                "type": "OBJECT",
                "properties": {
                    "behavioral": {"type": "ARRAY", "items": {"type": "STRING"}},
                    "technical": {"type": "ARRAY", "items": {"type": "STRING"}}
                },
                "required": ["behavioral", "technical"]
            },
            "careerOutlook": {
                "type": "STRING",
                "description": "The future job market outlook for this career, including trends and salary expectations."
            }
        },
        "required": [
            "title",
            "summary",
            "keyResponsibilities",
            "requiredSkills",
            "learningPath",
            "interviewQuestions",
            "careerOutlook"
        ]
    })
}

/// Schema for fetch_skills_learning_path: learning path grouped by skill area.
pub fn skills_learning_path() -> Value {
    json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "skillArea": {
                    "type": "STRING",
                    "description": "The high-level skill or technology area this part of the learning path focuses on."
                },
                "steps": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "properties": {
                            "title": {
                                "type": "STRING",
                                "description": "A concise title for this learning step."
                            },
                            "description": {
                                "type": "STRING",
                                "description": "A detailed description of the learning step, including concepts to learn, projects to build, or resources to consult."
                            },
                            "resources": {
                                "type": "ARRAY",
                                "description": "A list of suggested learning resources (articles, courses, documentation).",
                                "items": {
                                    "type": "OBJECT",
                                    "properties": {
                                        "name": {
                                            "type": "STRING",
                                            "description": "The name of the resource."
                                        },
                                        "url": {
                                            "type": "STRING",
                                            "description": "The direct URL to the resource."
                                        }
                                    },
                                    "required": ["name", "url"]
                                }
                            }
                        },
                        "required": ["title", "description"]
                    }
                }
            },
            "required": ["skillArea", "steps"]
        }
    })
}
