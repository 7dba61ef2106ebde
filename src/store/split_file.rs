//! Split two-file adapter: `jobs.json` and `skills.json` side by side.
//!
//! Each file holds one collection at its top level. Write-back only ever
//! touches the jobs file.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::models::{Job, Skill};
use crate::store::{Result, SkillsAtRest, Store};

#[derive(Debug, Clone)]
pub struct SplitFileStore {
    jobs_path: PathBuf,
    skills_path: PathBuf,
}

impl SplitFileStore {
    pub fn new(jobs_path: impl Into<PathBuf>, skills_path: impl Into<PathBuf>) -> Self {
        SplitFileStore {
            jobs_path: jobs_path.into(),
            skills_path: skills_path.into(),
        }
    }
}

impl Store for SplitFileStore {
    fn read_jobs(&self) -> Result<Vec<Job>> {
        let raw = fs::read_to_string(&self.jobs_path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn read_skills(&self) -> Result<HashMap<String, Skill>> {
        let raw = fs::read_to_string(&self.skills_path)?;
        let skills: SkillsAtRest = serde_json::from_str(&raw)?;
        Ok(skills.into_map())
    }

    fn write_jobs(&self, jobs: &[Job]) -> Result<()> {
        let tmp = self.jobs_path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(jobs)?)?;
        fs::rename(&tmp, &self.jobs_path)?;

        debug!(path = %self.jobs_path.display(), jobs = jobs.len(), "Job set written back");
        Ok(())
    }
}
