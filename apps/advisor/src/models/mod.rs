pub mod career;
pub mod learning;

pub use career::{CareerDetails, CareerPath, InterviewQuestions, LearningPathStep, RequiredSkills};
pub use learning::{LearningResource, LearningStep, SkillsLearningPath};
