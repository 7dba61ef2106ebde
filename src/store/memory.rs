//! In-memory store for unit and integration tests.
//!
//! Holds both collections in plain memory and records every `write_jobs`
//! call so tests can assert on what was persisted. Failures can be injected
//! via [`MemoryStoreConfig`].

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::models::{Job, Skill};
use crate::store::{Result, Store, StoreError};

/// Controls which operations should fail. All default to success.
#[derive(Debug, Clone, Default)]
pub struct MemoryStoreConfig {
    /// If set, `read_jobs()` returns this error message
    pub read_jobs_error: Option<String>,
    /// If set, `read_skills()` returns this error message
    pub read_skills_error: Option<String>,
    /// If set, `write_jobs()` returns this error message
    pub write_jobs_error: Option<String>,
}

#[derive(Clone, Default)]
pub struct MemoryStore {
    jobs: Arc<Mutex<Vec<Job>>>,
    skills: Arc<Mutex<HashMap<String, Skill>>>,
    writes: Arc<AtomicUsize>,
    config: MemoryStoreConfig,
}

impl MemoryStore {
    pub fn new(jobs: Vec<Job>, skills: Vec<Skill>) -> Self {
        Self::with_config(jobs, skills, MemoryStoreConfig::default())
    }

    pub fn with_config(jobs: Vec<Job>, skills: Vec<Skill>, config: MemoryStoreConfig) -> Self {
        let skills = skills
            .into_iter()
            .map(|skill| (skill.id_code.clone(), skill))
            .collect();
        MemoryStore {
            jobs: Arc::new(Mutex::new(jobs)),
            skills: Arc::new(Mutex::new(skills)),
            writes: Arc::new(AtomicUsize::new(0)),
            config,
        }
    }

    /// How many times `write_jobs` has completed successfully.
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::Relaxed)
    }

    /// The job set as last persisted.
    pub fn persisted_jobs(&self) -> Vec<Job> {
        self.jobs.lock().expect("store lock poisoned").clone()
    }
}

impl Store for MemoryStore {
    fn read_jobs(&self) -> Result<Vec<Job>> {
        if let Some(msg) = &self.config.read_jobs_error {
            return Err(StoreError::Io(std::io::Error::other(msg.clone())));
        }
        Ok(self.jobs.lock().expect("store lock poisoned").clone())
    }

    fn read_skills(&self) -> Result<HashMap<String, Skill>> {
        if let Some(msg) = &self.config.read_skills_error {
            return Err(StoreError::Io(std::io::Error::other(msg.clone())));
        }
        Ok(self.skills.lock().expect("store lock poisoned").clone())
    }

    fn write_jobs(&self, jobs: &[Job]) -> Result<()> {
        if let Some(msg) = &self.config.write_jobs_error {
            return Err(StoreError::Write(msg.clone()));
        }
        *self.jobs.lock().expect("store lock poisoned") = jobs.to_vec();
        self.writes.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}
