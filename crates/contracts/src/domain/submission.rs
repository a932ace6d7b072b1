use serde::{Deserialize, Serialize};

/// A skill found in both the JD and the résumé, with the surface form it
/// matched under in the résumé.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedSkill {
    pub skill: String,
    pub matched_as: String,
}

/// A skill required by the JD but absent from the résumé.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingSkill {
    pub skill: String,
    pub expected_as: String,
}

/// Scoring result for one submission, as returned by `POST /process`.
///
/// Field names follow the backend's wire schema verbatim. The client only
/// renders these values; it never validates or recomputes them, and extra
/// fields the backend may add are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionResult {
    #[serde(rename = "Resume")]
    pub resume: String,
    #[serde(rename = "Job_Description")]
    pub job_description: String,
    #[serde(rename = "Tfidf_Similarity")]
    pub tfidf_similarity: f64,
    #[serde(rename = "Jaccard_Similarity")]
    pub jaccard_similarity: f64,
    #[serde(rename = "Length_Ratio")]
    pub length_ratio: f64,
    #[serde(rename = "No_of_Matched_Skills")]
    pub matched_skill_count: u32,
    #[serde(rename = "No_of_Missing_Skills")]
    pub missing_skill_count: u32,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Score")]
    pub score: f64,
    #[serde(default)]
    pub matched_skills: Vec<MatchedSkill>,
    #[serde(default)]
    pub missing_skills: Vec<MissingSkill>,
}

/// Flatten skill labels into a display line.
///
/// An empty list renders as the literal "None", never as a blank string.
pub fn skill_summary<'a, I>(skills: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let joined = skills.into_iter().collect::<Vec<_>>().join(", ");
    if joined.is_empty() {
        "None".to_string()
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_summary_empty_is_none() {
        assert_eq!(skill_summary(Vec::<&str>::new()), "None");
    }

    #[test]
    fn test_skill_summary_joins_labels() {
        assert_eq!(skill_summary(["python", "sql"]), "python, sql");
        assert_eq!(skill_summary(["docker"]), "docker");
    }

    #[test]
    fn test_result_decodes_wire_names() {
        let json = r#"{
            "Resume": "resume_1.pdf",
            "Job_Description": "jd_1.pdf",
            "Tfidf_Similarity": 0.42,
            "Jaccard_Similarity": 0.31,
            "Length_Ratio": 1.05,
            "No_of_Matched_Skills": 2,
            "No_of_Missing_Skills": 1,
            "Category": "solid",
            "Score": 78,
            "matched_skills": [
                {"skill": "python", "matched_as": "python3"},
                {"skill": "sql", "matched_as": "sql"}
            ],
            "missing_skills": [
                {"skill": "docker", "expected_as": "docker"}
            ],
            "resume_text": "ignored extra field"
        }"#;

        let result: SubmissionResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.resume, "resume_1.pdf");
        assert_eq!(result.matched_skill_count, 2);
        assert_eq!(result.matched_skills[0].matched_as, "python3");
        assert_eq!(result.missing_skills[0].skill, "docker");
        assert_eq!(result.score, 78.0);
    }

    #[test]
    fn test_result_tolerates_missing_skill_lists() {
        let json = r#"{
            "Resume": "r.pdf",
            "Job_Description": "j.pdf",
            "Tfidf_Similarity": 0.1,
            "Jaccard_Similarity": 0.2,
            "Length_Ratio": 0.9,
            "No_of_Matched_Skills": 0,
            "No_of_Missing_Skills": 0,
            "Category": "poor",
            "Score": 10
        }"#;

        let result: SubmissionResult = serde_json::from_str(json).unwrap();
        assert!(result.matched_skills.is_empty());
        assert!(result.missing_skills.is_empty());
    }
}
