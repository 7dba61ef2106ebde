//! Data types shared between the store, the model layer, and the HTTP API.
//!
//! The wire format is camelCase JSON (`idCode`, `skillList`, `todoText`),
//! matching the stored corpus. Stored jobs never carry a `skills` field;
//! [`ResolvedJob`] attaches it at read time.

use serde::{Deserialize, Serialize};

/// A skill definition, keyed by its externally assigned `idCode`.
///
/// Descriptive fields may be empty. A lookup result's `id_code` always
/// reflects the code it was looked up by, even when the stored record
/// carries a different or missing code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    #[serde(default)]
    pub id_code: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
}

impl Skill {
    /// Placeholder returned for codes with no stored record. Never fails a
    /// lookup; unknown or typo'd codes degrade to this instead.
    pub fn null_object(id_code: &str) -> Self {
        Skill {
            id_code: id_code.to_string(),
            name: String::new(),
            url: String::new(),
            description: String::new(),
        }
    }
}

/// A job listing as stored. `skill_list` is a raw comma-separated string of
/// skill codes; resolution into [`Skill`] records happens on read, never at
/// rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub skill_list: String,
    #[serde(default)]
    pub todo: String,
}

/// A job with its skill list resolved. Derived per request, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedJob {
    #[serde(flatten)]
    pub job: Job,
    pub skills: Vec<Skill>,
}

/// Reduced per-job row for the todo view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    pub todo_text: String,
    pub company: String,
    pub title: String,
    pub url: String,
}

impl From<&Job> for Todo {
    fn from(job: &Job) -> Self {
        Todo {
            todo_text: job.todo.clone(),
            company: job.company.clone(),
            title: job.title.clone(),
            url: job.url.clone(),
        }
    }
}

/// One entry per distinct skill code observed across all jobs, with its
/// occurrence count. The retained `skill` is the one resolved the first time
/// the code was encountered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TotaledSkill {
    pub skill: Skill,
    pub total: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_job_json_deserializes_without_skills_field() {
        let json = r#"{
            "id": 7,
            "title": "Backend Developer",
            "company": "Acme",
            "url": "https://example.com/7",
            "description": "desc",
            "skillList": "S1, S2",
            "todo": "apply"
        }"#;

        let job: Job = serde_json::from_str(json).expect("stored job should deserialize");
        assert_eq!(job.id, 7);
        assert_eq!(job.skill_list, "S1, S2");
        assert_eq!(job.todo, "apply");
    }

    #[test]
    fn missing_string_fields_default_to_empty() {
        let job: Job = serde_json::from_str(r#"{"id": 1}"#).expect("minimal job");
        assert_eq!(job.title, "");
        assert_eq!(job.skill_list, "");
        assert_eq!(job.todo, "");
    }

    #[test]
    fn resolved_job_serializes_flat_with_skills() {
        let job = Job {
            id: 1,
            title: "t".into(),
            company: "c".into(),
            url: "u".into(),
            description: "d".into(),
            skill_list: "S1".into(),
            todo: "".into(),
        };
        let resolved = ResolvedJob {
            job,
            skills: vec![Skill::null_object("S1")],
        };

        let value = serde_json::to_value(&resolved).expect("serialize");
        assert_eq!(value["id"], 1);
        assert_eq!(value["skillList"], "S1");
        assert_eq!(value["skills"][0]["idCode"], "S1");
    }

    #[test]
    fn null_object_skill_has_empty_descriptive_fields() {
        let skill = Skill::null_object("S9");
        assert_eq!(skill.id_code, "S9");
        assert_eq!(skill.name, "");
        assert_eq!(skill.url, "");
        assert_eq!(skill.description, "");
    }
}
