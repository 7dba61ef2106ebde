//! Skill catalog: the single source of truth for skill descriptive fields.

use std::collections::HashMap;

use crate::models::Skill;

/// Known skill definitions keyed by code, loaded once from the store.
#[derive(Debug, Clone, Default)]
pub struct SkillCatalog {
    skills: HashMap<String, Skill>,
}

impl SkillCatalog {
    pub fn new(skills: HashMap<String, Skill>) -> Self {
        SkillCatalog { skills }
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Resolves a code to its skill record. Total: a miss returns the
    /// null-object skill instead of failing. The result's `id_code` is
    /// always the queried code, whatever the stored record carries.
    pub fn lookup(&self, id_code: &str) -> Skill {
        match self.skills.get(id_code) {
            Some(skill) => Skill {
                id_code: id_code.to_string(),
                ..skill.clone()
            },
            None => Skill::null_object(id_code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> SkillCatalog {
        let mut skills = HashMap::new();
        skills.insert(
            "S1".to_string(),
            Skill {
                id_code: "S1".to_string(),
                name: "JavaScript".to_string(),
                url: "https://example.com/js".to_string(),
                description: "scripting".to_string(),
            },
        );
        // Stored under S2 but the record's own code disagrees
        skills.insert(
            "S2".to_string(),
            Skill {
                id_code: "stale-code".to_string(),
                name: "Go".to_string(),
                url: String::new(),
                description: String::new(),
            },
        );
        SkillCatalog::new(skills)
    }

    #[test]
    fn lookup_hit_returns_stored_fields() {
        let skill = catalog().lookup("S1");
        assert_eq!(skill.id_code, "S1");
        assert_eq!(skill.name, "JavaScript");
        assert_eq!(skill.url, "https://example.com/js");
    }

    #[test]
    fn lookup_forces_id_code_over_stored_value() {
        let skill = catalog().lookup("S2");
        assert_eq!(skill.id_code, "S2");
        assert_eq!(skill.name, "Go");
    }

    #[test]
    fn lookup_miss_returns_null_object_with_queried_code() {
        let skill = catalog().lookup("S9");
        assert_eq!(
            skill,
            Skill {
                id_code: "S9".to_string(),
                name: String::new(),
                url: String::new(),
                description: String::new(),
            }
        );
    }

    #[test]
    fn lookup_of_empty_code_is_total() {
        let skill = catalog().lookup("");
        assert_eq!(skill.id_code, "");
        assert_eq!(skill.name, "");
    }
}
