//! Learning-path data model — the grouped, skill-area-keyed path produced
//! from the raw skills text.

use serde::{Deserialize, Serialize};

/// One skill-area group of the personalized learning path. The gateway
/// returns an ordered sequence of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsLearningPath {
    pub skill_area: String,
    pub steps: Vec<LearningStep>,
}

/// A single learning step within a skill area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningStep {
    pub title: String,
    pub description: String,
    /// The only optional field in any gateway schema — may be absent entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<LearningResource>>,
}

/// A suggested learning resource (article, course, documentation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningResource {
    pub name: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_learning_path_deserializes_with_resources() {
        let json = r#"[{
            "skillArea": "Python for Data Science",
            "steps": [{
                "title": "Mastering pandas",
                "description": "Work through the official user guide.",
                "resources": [
                    {"name": "pandas docs", "url": "https://pandas.pydata.org/docs/"}
                ]
            }]
        }]"#;

        let path: Vec<SkillsLearningPath> = serde_json::from_str(json).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path[0].skill_area, "Python for Data Science");
        let resources = path[0].steps[0].resources.as_ref().unwrap();
        assert_eq!(resources[0].name, "pandas docs");
    }

    #[test]
    fn test_learning_step_without_resources_deserializes() {
        let json = r#"{
            "title": "Mastering pandas",
            "description": "Work through the official user guide."
        }"#;
        let step: LearningStep = serde_json::from_str(json).unwrap();
        assert!(step.resources.is_none());
    }

    #[test]
    fn test_learning_step_missing_description_fails() {
        let bad_json = r#"{"title": "Mastering pandas"}"#;
        let result: Result<LearningStep, _> = serde_json::from_str(bad_json);
        assert!(result.is_err());
    }

    #[test]
    fn test_absent_resources_not_serialized() {
        let step = LearningStep {
            title: "Mastering pandas".to_string(),
            description: "Work through the official user guide.".to_string(),
            resources: None,
        };
        let json = serde_json::to_value(&step).unwrap();
        assert!(json.get("resources").is_none());
    }
}
