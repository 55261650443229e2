// All prompt templates for the gateway operations.
// The shared system instruction lives in llm_client::prompts.

/// Recommendations prompt. Replace `{skills}` before sending.
pub const RECOMMENDATIONS_PROMPT_TEMPLATE: &str = "Based on the following skills \
    and interests, recommend 3-5 potential career paths for a student or \
    professional. For each career, provide a title, a short description, and a \
    brief explanation of why it's a good match.\n\nSkills: {skills}";

/// Career guide prompt. Replace `{title}` before sending.
pub const DETAILS_PROMPT_TEMPLATE: &str = "Provide a comprehensive guide for a \
    student aspiring to become a \"{title}\". The guide should include a \
    detailed summary, key responsibilities, essential technical and soft \
    skills, a step-by-step learning path, sample behavioral and technical \
    interview questions, and the future career outlook.";

/// Learning path prompt. Replace `{skills}` before sending.
pub const LEARNING_PATH_PROMPT_TEMPLATE: &str = "Based on the following skills, \
    create a personalized, step-by-step learning path to help someone level up \
    their abilities. Group the path by distinct skill areas. For each step \
    within a skill area, provide a short, actionable title, a detailed \
    description, and a few links to high-quality learning resources (like \
    official documentation, popular tutorials, or courses on platforms like \
    Coursera, freeCodeCamp, or Udemy).\n\nSkills: {skills}";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_templates_carry_their_placeholders() {
        assert!(RECOMMENDATIONS_PROMPT_TEMPLATE.contains("{skills}"));
        assert!(DETAILS_PROMPT_TEMPLATE.contains("{title}"));
        assert!(LEARNING_PATH_PROMPT_TEMPLATE.contains("{skills}"));
    }
}
