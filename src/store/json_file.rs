//! Combined single-file adapter: one `db.json` holding both collections.
//!
//! Matches the lowdb-style layout `{"jobs": [...], "skills": [...]}`; the
//! skill collection is also accepted under the key `skillInfos`, and in
//! either sequence or object form.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::models::{Job, Skill};
use crate::store::{Result, SkillsAtRest, Store, StoreError};

#[derive(Debug, Deserialize)]
struct DbFile {
    #[serde(default)]
    jobs: Vec<Job>,
    #[serde(default, alias = "skillInfos")]
    skills: Option<SkillsAtRest>,
}

#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_db(&self) -> Result<DbFile> {
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

impl Store for JsonFileStore {
    fn read_jobs(&self) -> Result<Vec<Job>> {
        Ok(self.read_db()?.jobs)
    }

    fn read_skills(&self) -> Result<HashMap<String, Skill>> {
        Ok(self
            .read_db()?
            .skills
            .map(SkillsAtRest::into_map)
            .unwrap_or_default())
    }

    /// Rewrites the `jobs` collection, leaving the skill collection exactly
    /// as it appears on disk (key name and shape included). Goes through a
    /// temp file in the same directory plus a rename so a failed write never
    /// truncates the store.
    fn write_jobs(&self, jobs: &[Job]) -> Result<()> {
        let raw = fs::read_to_string(&self.path)?;
        let mut root: Value = serde_json::from_str(&raw)?;

        let object = root.as_object_mut().ok_or_else(|| {
            StoreError::Write(format!("{} is not a JSON object", self.path.display()))
        })?;
        object.insert("jobs".to_string(), serde_json::to_value(jobs)?);

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(&root)?)?;
        fs::rename(&tmp, &self.path)?;

        debug!(path = %self.path.display(), jobs = jobs.len(), "Job set written back");
        Ok(())
    }
}
