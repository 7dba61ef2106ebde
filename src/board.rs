//! The join-and-aggregate layer over the job corpus.
//!
//! [`JobBoard`] owns an in-memory snapshot of the job set (loaded once from
//! the store at startup) plus the [`SkillCatalog`], and derives every read
//! view from them on each call. Nothing derived is cached; cost per call is
//! O(jobs x skills per job), fine at the corpus sizes this serves.

use std::sync::RwLock;

use tracing::info;

use crate::models::{Job, ResolvedJob, Skill, Todo, TotaledSkill};
use crate::skills::SkillCatalog;
use crate::store::{self, Store};

pub struct JobBoard<S: Store> {
    store: S,
    catalog: SkillCatalog,
    jobs: RwLock<Vec<Job>>,
}

impl<S: Store> JobBoard<S> {
    /// Reads both collections from the store and holds them for the process
    /// lifetime. A read failure here is fatal to startup.
    pub fn load(store: S) -> store::Result<Self> {
        let jobs = store.read_jobs()?;
        let catalog = SkillCatalog::new(store.read_skills()?);

        info!(jobs = jobs.len(), skills = catalog.len(), "Job board loaded");

        Ok(JobBoard {
            store,
            catalog,
            jobs: RwLock::new(jobs),
        })
    }

    pub fn catalog(&self) -> &SkillCatalog {
        &self.catalog
    }

    /// The raw job set, without resolved skills.
    pub fn jobs(&self) -> Vec<Job> {
        self.jobs.read().expect("job set lock poisoned").clone()
    }

    /// Splits a job's `skill_list` on commas, trims each token, and resolves
    /// every token through the catalog. Output order matches the list;
    /// duplicates and unknown codes come through as-is. Splitting an empty
    /// string yields one empty token, which resolves to one null-object
    /// skill.
    pub fn resolve_skills(&self, job: &Job) -> Vec<Skill> {
        job.skill_list
            .split(',')
            .map(|token| self.catalog.lookup(token.trim()))
            .collect()
    }

    /// Every job with its `skills` attached. Derived per call, never stored.
    pub fn jobs_with_skills(&self) -> Vec<ResolvedJob> {
        self.jobs
            .read()
            .expect("job set lock poisoned")
            .iter()
            .map(|job| ResolvedJob {
                skills: self.resolve_skills(job),
                job: job.clone(),
            })
            .collect()
    }

    /// Occurrence totals per distinct skill code across all jobs' resolved
    /// skill lists. A job listing a code twice counts twice. Entries appear
    /// in first-occurrence order, and the retained skill record is the one
    /// resolved at that first occurrence.
    pub fn totaled_skills(&self) -> Vec<TotaledSkill> {
        let mut totals: Vec<TotaledSkill> = Vec::new();
        for resolved in self.jobs_with_skills() {
            for skill in resolved.skills {
                match totals
                    .iter_mut()
                    .find(|entry| entry.skill.id_code == skill.id_code)
                {
                    Some(entry) => entry.total += 1,
                    None => totals.push(TotaledSkill { skill, total: 1 }),
                }
            }
        }
        totals
    }

    /// One todo row per job, order preserved. Pure projection, no joins.
    pub fn todos(&self) -> Vec<Todo> {
        self.jobs
            .read()
            .expect("job set lock poisoned")
            .iter()
            .map(Todo::from)
            .collect()
    }

    /// Removes the job with the given id, persists the updated set, and
    /// returns the removed record. `Ok(None)` when no job matched. The
    /// in-memory set is only updated after the store write succeeds, so a
    /// persistence failure leaves both views untouched and in agreement.
    pub fn delete_job(&self, id: i64) -> store::Result<Option<Job>> {
        let mut jobs = self.jobs.write().expect("job set lock poisoned");

        let Some(position) = jobs.iter().position(|job| job.id == id) else {
            return Ok(None);
        };

        let mut next = jobs.clone();
        let removed = next.remove(position);
        self.store.write_jobs(&next)?;
        *jobs = next;

        info!(id, title = %removed.title, "Job deleted");
        Ok(Some(removed))
    }
}
